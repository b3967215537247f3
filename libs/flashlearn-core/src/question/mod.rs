//! Question generation strategies.

pub mod multiple_choice;
pub mod true_false;
pub mod written;

use rand::RngCore;

use crate::set::{CardId, CardSet};
use crate::types::{Card, Question, QuestionType, RoundSettings};

/// Trait for turning one card of a set into a question.
pub trait QuestionGenerator: Send + Sync {
    /// Question type this generator produces.
    fn question_type(&self) -> QuestionType;

    /// Build a question for `card`, drawing distractors or mismatched
    /// pairings from the rest of `set` when the strategy needs them.
    fn generate(
        &self,
        id: CardId,
        card: &Card,
        set: &CardSet,
        settings: &RoundSettings,
        rng: &mut dyn RngCore,
    ) -> Question;
}

/// Get the generator for a question type.
pub fn generator_for(kind: QuestionType) -> Box<dyn QuestionGenerator> {
    match kind {
        QuestionType::MultipleChoice => Box::new(multiple_choice::MultipleChoice),
        QuestionType::Written => Box::new(written::Written),
        QuestionType::TrueFalse => Box::new(true_false::TrueFalse),
    }
}
