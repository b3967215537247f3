//! Quiz rounds: card selection, question generation and answer submission.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::{RoundError, SettingsError};
use crate::matching::grade;
use crate::question::generator_for;
use crate::set::{CardId, CardSet};
use crate::types::{Card, Question, QuestionType, RoundSettings};

/// One question of a round together with the card it was made from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundItem {
    pub card: CardId,
    pub question: Question,
    pub answered: bool,
    pub correct: bool,
}

/// An ordered run of questions with a cursor and a running score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    items: Vec<RoundItem>,
    current_question_index: usize,
    correct_answers: usize,
}

/// Score of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub correct: usize,
    pub total: usize,
    /// Percentage of correct answers, rounded to the nearest whole number.
    pub accuracy: u32,
}

/// Cards in the order a round draws them: starred first, then lowest
/// mastery. Ties keep their set order, or a random order with `shuffle`.
pub fn selection_order<'a>(
    set: &'a CardSet,
    shuffle: bool,
    rng: &mut dyn RngCore,
) -> Vec<(CardId, &'a Card)> {
    let mut pool: Vec<(CardId, &Card)> = set.iter().collect();
    if shuffle {
        pool.shuffle(&mut *rng);
    }
    // sort_by_key is stable
    pool.sort_by_key(|(_, card)| (!card.starred, card.mastery));
    pool
}

/// Build a round from a set.
///
/// Cards are taken from [`selection_order`] cycling back to the start until
/// `round_length` questions exist, so small sets repeat cards. Every
/// occurrence gets its own question of a randomly chosen allowed type. An
/// empty set yields an empty round.
pub fn build_round(
    set: &CardSet,
    settings: &RoundSettings,
    rng: &mut dyn RngCore,
) -> Result<Round, SettingsError> {
    settings.validate()?;

    let pool = selection_order(set, settings.shuffle_terms, rng);
    if pool.is_empty() {
        return Ok(Round::default());
    }

    let types = settings.distinct_question_types();
    let items = pool
        .iter()
        .cycle()
        .take(settings.round_length)
        .map(|&(id, card)| {
            let kind = types[rng.random_range(0..types.len())];
            RoundItem {
                card: id,
                question: generator_for(kind).generate(id, card, set, settings, &mut *rng),
                answered: false,
                correct: false,
            }
        })
        .collect();

    Ok(Round {
        items,
        current_question_index: 0,
        correct_answers: 0,
    })
}

impl Round {
    pub fn items(&self) -> &[RoundItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// The item under the cursor, or None once the round is exhausted.
    pub fn current(&self) -> Option<&RoundItem> {
        self.items.get(self.current_question_index)
    }

    pub fn is_complete(&self) -> bool {
        self.current_question_index >= self.items.len()
    }

    /// Fraction of the round reached, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 1.0;
        }
        let reached = (self.current_question_index + 1).min(self.items.len());
        reached as f64 / self.items.len() as f64
    }

    /// Grade an answer to the current question and record the outcome.
    ///
    /// Choice questions need a selected option. A written question with no
    /// answer is graded as an empty string.
    pub fn submit(
        &mut self,
        answer: Option<&str>,
        settings: &RoundSettings,
    ) -> Result<bool, RoundError> {
        let index = self.current_question_index;
        let item = self.items.get_mut(index).ok_or(RoundError::Finished)?;
        if item.answered {
            return Err(RoundError::AlreadyAnswered { index });
        }

        let answer = match (item.question.question_type, answer) {
            (QuestionType::MultipleChoice | QuestionType::TrueFalse, None) => {
                return Err(RoundError::NoSelection)
            }
            (_, answer) => answer.unwrap_or_default(),
        };

        let correct = grade(&item.question, answer, settings);
        item.answered = true;
        item.correct = correct;
        if correct {
            self.correct_answers += 1;
        }
        Ok(correct)
    }

    /// Move past an answered question. Returns whether another question is
    /// left.
    pub fn advance(&mut self) -> Result<bool, RoundError> {
        let index = self.current_question_index;
        let item = self.items.get(index).ok_or(RoundError::Finished)?;
        if !item.answered {
            return Err(RoundError::NotAnswered { index });
        }
        self.current_question_index += 1;
        Ok(!self.is_complete())
    }

    pub fn summary(&self) -> RoundSummary {
        let total = self.items.len();
        let correct = self.items.iter().filter(|item| item.correct).count();
        let accuracy = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };
        RoundSummary {
            correct,
            total,
            accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnswerSide;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn settings(round_length: usize, types: &[QuestionType]) -> RoundSettings {
        RoundSettings {
            round_length,
            question_types: types.to_vec(),
            shuffle_terms: false,
            ..Default::default()
        }
    }

    fn three_cards() -> CardSet {
        CardSet::from(vec![
            Card::new("for loop", "Iterates over a sequence"),
            Card::new("dictionary", "Key-value pairs"),
            Card::new("tuple", "Immutable sequence"),
        ])
    }

    #[test]
    fn rejects_invalid_settings() {
        let set = three_cards();
        assert_eq!(
            build_round(&set, &settings(0, &QuestionType::ALL), &mut rng()),
            Err(SettingsError::ZeroRoundLength)
        );
        assert_eq!(
            build_round(&set, &settings(5, &[]), &mut rng()),
            Err(SettingsError::NoQuestionTypes)
        );
    }

    #[test]
    fn refuses_oversized_rounds_before_allocating() {
        let set = CardSet::from(vec![Card::new("a", "1")]);
        assert_eq!(
            build_round(&set, &settings(usize::MAX / 8, &[QuestionType::Written]), &mut rng()),
            Err(SettingsError::RoundTooLong {
                max: crate::types::MAX_ROUND_LENGTH
            })
        );

        let round = build_round(
            &set,
            &settings(crate::types::MAX_ROUND_LENGTH, &[QuestionType::Written]),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(round.len(), crate::types::MAX_ROUND_LENGTH);
    }

    #[test]
    fn empty_set_gives_empty_round() {
        let round = build_round(&CardSet::new(), &settings(10, &QuestionType::ALL), &mut rng()).unwrap();
        assert!(round.is_empty());
        assert!(round.is_complete());
        assert_eq!(
            round.summary(),
            RoundSummary {
                correct: 0,
                total: 0,
                accuracy: 0
            }
        );
    }

    #[test]
    fn cycles_through_small_pool() {
        let set = three_cards();
        let round = build_round(&set, &settings(10, &[QuestionType::Written]), &mut rng()).unwrap();
        assert_eq!(round.len(), 10);

        let positions: Vec<usize> = round
            .items()
            .iter()
            .map(|item| set.position(item.card).unwrap())
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0]);
        assert!(round.items().iter().all(|item| !item.answered && !item.correct));
    }

    #[test]
    fn repeated_cards_get_independent_question_types() {
        let set = CardSet::from(vec![Card::new("a", "1"), Card::new("b", "2")]);
        let round = build_round(&set, &settings(40, &QuestionType::ALL), &mut rng()).unwrap();
        let first = set.id_at(0).unwrap();
        let kinds: std::collections::HashSet<QuestionType> = round
            .items()
            .iter()
            .filter(|item| item.card == first)
            .map(|item| item.question.question_type)
            .collect();
        assert!(kinds.len() > 1);
    }

    #[test]
    fn starred_then_low_mastery_first() {
        let mut set = CardSet::new();
        let plain = set.push("plain", "p").unwrap();
        let starred = set.push("starred", "s").unwrap();
        let strong = set.push("strong", "x").unwrap();
        let weak = set.push("weak", "w").unwrap();
        set.get_mut(starred).unwrap().mastery = 50;
        set.set_starred(1, true).unwrap();
        set.get_mut(strong).unwrap().mastery = 80;
        set.get_mut(weak).unwrap().mastery = 10;

        for shuffle in [false, true] {
            let order: Vec<CardId> = selection_order(&set, shuffle, &mut rng())
                .into_iter()
                .map(|(id, _)| id)
                .collect();
            assert_eq!(order, vec![starred, plain, weak, strong]);
        }
    }

    #[test]
    fn sort_is_stable_without_shuffle() {
        let mut set = CardSet::new();
        let ids: Vec<CardId> = (0..5)
            .map(|i| set.push(format!("t{i}"), "d").unwrap())
            .collect();
        let order: Vec<CardId> = selection_order(&set, false, &mut rng())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn starred_card_leads_the_round() {
        let mut set = CardSet::new();
        set.push("unstarred", "u").unwrap();
        let starred = set.push("starred", "s").unwrap();
        set.get_mut(starred).unwrap().mastery = 50;
        set.set_starred(1, true).unwrap();

        let round = build_round(&set, &settings(1, &[QuestionType::Written]), &mut rng()).unwrap();
        assert_eq!(round.items()[0].card, starred);
    }

    #[test]
    fn questions_follow_answer_side() {
        let set = three_cards();
        let by_definition = RoundSettings {
            answer_with: AnswerSide::Definition,
            ..settings(3, &[QuestionType::Written])
        };
        let round = build_round(&set, &by_definition, &mut rng()).unwrap();
        assert_eq!(round.items()[0].question.prompt_text, "for loop");
        assert_eq!(
            round.items()[0].question.correct_answer,
            "Iterates over a sequence"
        );
    }

    #[test]
    fn submit_and_advance_through_round() {
        let set = three_cards();
        let settings = settings(3, &[QuestionType::Written]);
        let mut round = build_round(&set, &settings, &mut rng()).unwrap();

        assert_eq!(round.advance(), Err(RoundError::NotAnswered { index: 0 }));

        assert_eq!(round.submit(Some("for loop"), &settings), Ok(true));
        assert_eq!(
            round.submit(Some("for loop"), &settings),
            Err(RoundError::AlreadyAnswered { index: 0 })
        );
        assert_eq!(round.advance(), Ok(true));

        assert_eq!(round.submit(Some("set"), &settings), Ok(false));
        assert_eq!(round.advance(), Ok(true));

        assert_eq!(round.submit(None, &settings), Ok(false));
        assert_eq!(round.advance(), Ok(false));

        assert!(round.is_complete());
        assert_eq!(round.submit(Some("x"), &settings), Err(RoundError::Finished));
        assert_eq!(round.advance(), Err(RoundError::Finished));
        assert_eq!(round.correct_answers(), 1);
        assert_eq!(
            round.summary(),
            RoundSummary {
                correct: 1,
                total: 3,
                accuracy: 33
            }
        );
    }

    #[test]
    fn choice_questions_need_a_selection() {
        let set = three_cards();
        let settings = settings(1, &[QuestionType::MultipleChoice]);
        let mut round = build_round(&set, &settings, &mut rng()).unwrap();

        assert_eq!(round.submit(None, &settings), Err(RoundError::NoSelection));
        assert!(!round.current().unwrap().answered);

        assert_eq!(round.submit(Some("for loop"), &settings), Ok(true));
        assert!(round.current().unwrap().correct);
    }

    #[test]
    fn progress_counts_current_question() {
        let set = three_cards();
        let settings = settings(4, &[QuestionType::TrueFalse]);
        let mut round = build_round(&set, &settings, &mut rng()).unwrap();
        assert_eq!(round.progress(), 0.25);
        round.submit(Some("True"), &settings).unwrap();
        round.advance().unwrap();
        assert_eq!(round.progress(), 0.5);
    }
}
