//! Core types for the quiz engine.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SettingsError;

/// Highest mastery a card can reach.
pub const MAX_MASTERY: u8 = 100;

/// Longest round the builder will make.
pub const MAX_ROUND_LENGTH: usize = 1000;

/// A term/definition flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub term: String,
    pub definition: String,
    #[serde(default, deserialize_with = "deserialize_mastery")]
    pub mastery: u8,
    #[serde(default)]
    pub starred: bool,
}

impl Card {
    /// Create an unstarred card with zero mastery.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mastery: 0,
            starred: false,
        }
    }

    /// Text on the given side of the card.
    pub fn side(&self, side: AnswerSide) -> &str {
        match side {
            AnswerSide::Term => &self.term,
            AnswerSide::Definition => &self.definition,
        }
    }
}

/// Stored mastery above the cap is read back as the cap.
fn deserialize_mastery<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = u64::deserialize(deserializer)?;
    Ok(stored.min(u64::from(MAX_MASTERY)) as u8)
}

/// Side of the card the user answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSide {
    Term,
    Definition,
}

impl Default for AnswerSide {
    fn default() -> Self {
        Self::Term
    }
}

impl AnswerSide {
    /// The side shown as the prompt when answering with `self`.
    pub fn opposite(self) -> Self {
        match self {
            Self::Term => Self::Definition,
            Self::Definition => Self::Term,
        }
    }
}

/// Kind of question asked about a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    MultipleChoice,
    Written,
    TrueFalse,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [Self::MultipleChoice, Self::Written, Self::TrueFalse];

    /// Get the question type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multipleChoice",
            Self::Written => "written",
            Self::TrueFalse => "trueFalse",
        }
    }

    /// Mastery earned by one correct answer of this type.
    pub fn mastery_gain(self) -> u32 {
        match self {
            Self::TrueFalse => 10,
            Self::MultipleChoice => 20,
            Self::Written => 30,
        }
    }
}

/// A generated quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt_text: String,
    /// Answer choices; empty for written questions.
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Settings for a single quiz round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_date: Option<NaiveDate>,
    pub round_length: usize,
    pub question_types: Vec<QuestionType>,
    pub answer_with: AnswerSide,
    pub shuffle_terms: bool,
    pub allow_typos: bool,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            exam_date: None,
            round_length: 10,
            question_types: QuestionType::ALL.to_vec(),
            answer_with: AnswerSide::default(),
            shuffle_terms: true,
            allow_typos: true,
        }
    }
}

impl RoundSettings {
    /// Check the preconditions the round builder relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.round_length == 0 {
            return Err(SettingsError::ZeroRoundLength);
        }
        if self.round_length > MAX_ROUND_LENGTH {
            return Err(SettingsError::RoundTooLong {
                max: MAX_ROUND_LENGTH,
            });
        }
        if self.question_types.is_empty() {
            return Err(SettingsError::NoQuestionTypes);
        }
        Ok(())
    }

    /// Question types with duplicates removed, in first-seen order.
    pub fn distinct_question_types(&self) -> Vec<QuestionType> {
        let mut types = Vec::with_capacity(self.question_types.len());
        for kind in &self.question_types {
            if !types.contains(kind) {
                types.push(*kind);
            }
        }
        types
    }
}
