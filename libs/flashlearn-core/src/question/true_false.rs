//! True/false questions.

use rand::{Rng, RngCore};

use super::QuestionGenerator;
use crate::set::{CardId, CardSet};
use crate::types::{Card, Question, QuestionType, RoundSettings};

pub const TRUE_OPTION: &str = "True";
pub const FALSE_OPTION: &str = "False";

/// Asks whether a term/definition pairing is right. Half of the time the
/// definition is taken from another card in the set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFalse;

impl QuestionGenerator for TrueFalse {
    fn question_type(&self) -> QuestionType {
        QuestionType::TrueFalse
    }

    fn generate(
        &self,
        id: CardId,
        card: &Card,
        set: &CardSet,
        _settings: &RoundSettings,
        rng: &mut dyn RngCore,
    ) -> Question {
        let correct_pair = rng.random_bool(0.5);

        // The first other card in set order, even if its definition
        // happens to match this card's.
        let mismatch = if correct_pair || set.len() < 2 {
            None
        } else {
            set.iter()
                .find(|(other, _)| *other != id)
                .map(|(_, other)| other.definition.as_str())
        };

        let (definition, correct_answer) = match mismatch {
            Some(definition) => (definition, FALSE_OPTION),
            None => (card.definition.as_str(), TRUE_OPTION),
        };

        Question {
            question_type: QuestionType::TrueFalse,
            prompt_text: pairing_prompt(&card.term, definition),
            options: vec![TRUE_OPTION.to_string(), FALSE_OPTION.to_string()],
            correct_answer: correct_answer.to_string(),
        }
    }
}

fn pairing_prompt(term: &str, definition: &str) -> String {
    format!("Is \"{term}\" correctly defined as: \"{definition}\"?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(set: &CardSet, position: usize, seed: u64) -> Question {
        let id = set.id_at(position).unwrap();
        let card = set.card(position).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        TrueFalse.generate(id, card, set, &RoundSettings::default(), &mut rng)
    }

    #[test]
    fn single_card_is_always_true() {
        let set = CardSet::from(vec![Card::new("dictionary", "Key-value pairs")]);
        for seed in 0..30 {
            let question = generate(&set, 0, seed);
            assert_eq!(question.correct_answer, TRUE_OPTION);
            assert_eq!(
                question.prompt_text,
                "Is \"dictionary\" correctly defined as: \"Key-value pairs\"?"
            );
            assert_eq!(question.options, vec!["True", "False"]);
        }
    }

    #[test]
    fn false_pairing_uses_first_other_card() {
        let set = CardSet::from(vec![
            Card::new("a", "def a"),
            Card::new("b", "def b"),
            Card::new("c", "def c"),
        ]);

        let mut seen_true = false;
        let mut seen_false = false;
        for seed in 0..60 {
            let question = generate(&set, 2, seed);
            assert_eq!(question.options, vec!["True", "False"]);
            if question.correct_answer == FALSE_OPTION {
                seen_false = true;
                assert_eq!(
                    question.prompt_text,
                    "Is \"c\" correctly defined as: \"def a\"?"
                );
            } else {
                seen_true = true;
                assert_eq!(
                    question.prompt_text,
                    "Is \"c\" correctly defined as: \"def c\"?"
                );
            }
        }
        assert!(seen_true && seen_false);
    }

    #[test]
    fn shared_definition_still_counts_as_false() {
        let set = CardSet::from(vec![Card::new("a", "same"), Card::new("b", "same")]);
        let falses = (0..60)
            .map(|seed| generate(&set, 0, seed))
            .filter(|question| question.correct_answer == FALSE_OPTION)
            .inspect(|question| {
                assert_eq!(question.prompt_text, "Is \"a\" correctly defined as: \"same\"?")
            })
            .count();
        assert!(falses > 0);
    }
}
