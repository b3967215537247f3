//! Multiple-choice questions.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::RngCore;

use super::QuestionGenerator;
use crate::set::{CardId, CardSet};
use crate::types::{Card, Question, QuestionType, RoundSettings};

/// Maximum number of wrong options shown next to the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Picks the answer side of the card out of a shuffled list that also holds
/// the same side of up to [`DISTRACTOR_COUNT`] other cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleChoice;

impl QuestionGenerator for MultipleChoice {
    fn question_type(&self) -> QuestionType {
        QuestionType::MultipleChoice
    }

    fn generate(
        &self,
        id: CardId,
        card: &Card,
        set: &CardSet,
        settings: &RoundSettings,
        rng: &mut dyn RngCore,
    ) -> Question {
        let answer_with = settings.answer_with;
        let correct_answer = card.side(answer_with).to_string();

        // Sampled by card, so two cards with the same text can both show up
        let others: Vec<&str> = set
            .iter()
            .filter(|(other, _)| *other != id)
            .map(|(_, other)| other.side(answer_with))
            .collect();

        let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
        options.push(correct_answer.clone());
        options.extend(
            others
                .choose_multiple(&mut *rng, DISTRACTOR_COUNT)
                .map(|text| text.to_string()),
        );
        options.shuffle(&mut *rng);

        Question {
            question_type: QuestionType::MultipleChoice,
            prompt_text: card.side(answer_with.opposite()).to_string(),
            options,
            correct_answer,
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

    fn set_of(n: usize) -> CardSet {
        CardSet::from(
            (0..n)
                .map(|i| Card::new(format!("term {i}"), format!("definition {i}")))
                .collect::<Vec<_>>(),
        )
    }

    fn question_for(set: &CardSet, position: usize, settings: &RoundSettings, seed: u64) -> Question {
        let id = set.id_at(position).unwrap();
        let card = set.card(position).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        MultipleChoice.generate(id, card, set, settings, &mut rng)
    }

    #[test]
    fn four_options_with_correct_answer_once() {
        let set = set_of(6);
        let settings = RoundSettings::default();
        for seed in 0..50 {
            let question = question_for(&set, 2, &settings, seed);
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.correct_answer, "term 2");
            assert_eq!(question.prompt_text, "definition 2");
            let hits = question
                .options
                .iter()
                .filter(|option| **option == question.correct_answer)
                .count();
            assert_eq!(hits, 1);
            assert!(question.options.iter().all(|option| option.starts_with("term ")));
        }
    }

    #[test]
    fn small_sets_give_fewer_options() {
        let settings = RoundSettings::default();

        let question = question_for(&set_of(1), 0, &settings, 3);
        assert_eq!(question.options, vec!["term 0".to_string()]);

        let mut options = question_for(&set_of(3), 1, &settings, 3).options;
        options.sort();
        assert_eq!(options, vec!["term 0", "term 1", "term 2"]);
    }

    #[test]
    fn answers_with_definitions() {
        let settings = RoundSettings {
            answer_with: AnswerSide::Definition,
            ..Default::default()
        };
        let question = question_for(&set_of(5), 0, &settings, 9);
        assert_eq!(question.prompt_text, "term 0");
        assert_eq!(question.correct_answer, "definition 0");
        assert!(question
            .options
            .iter()
            .all(|option| option.starts_with("definition ")));
    }

    #[test]
    fn correct_answer_position_varies() {
        let set = set_of(4);
        let settings = RoundSettings::default();
        let positions: std::collections::HashSet<usize> = (0..40)
            .map(|seed| {
                let question = question_for(&set, 0, &settings, seed);
                question
                    .options
                    .iter()
                    .position(|option| *option == question.correct_answer)
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }
}
