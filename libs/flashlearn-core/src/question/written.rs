//! Free-text questions.

use rand::RngCore;

use super::QuestionGenerator;
use crate::set::{CardId, CardSet};
use crate::types::{Card, Question, QuestionType, RoundSettings};

/// Shows one side of the card and expects the other side typed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Written;

impl QuestionGenerator for Written {
    fn question_type(&self) -> QuestionType {
        QuestionType::Written
    }

    fn generate(
        &self,
        _id: CardId,
        card: &Card,
        _set: &CardSet,
        settings: &RoundSettings,
        _rng: &mut dyn RngCore,
    ) -> Question {
        Question {
            question_type: QuestionType::Written,
            prompt_text: card.side(settings.answer_with.opposite()).to_string(),
            options: Vec::new(),
            correct_answer: card.side(settings.answer_with).to_string(),
        }
    }
}
