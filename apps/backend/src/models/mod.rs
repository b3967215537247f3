//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from flashlearn-core
pub use flashlearn_core::{
    CardResult, CardSet, Question, QuestionType, RoundItem, RoundSettings, RoundSummary,
    SetLibrary,
};

use crate::services::rounds::ActiveRound;

// Set types
#[derive(Debug, Serialize, Deserialize)]
pub struct SetSummary {
    pub name: String,
    pub card_count: usize,
    pub is_current: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetListResponse {
    pub current_set: String,
    pub sets: Vec<SetSummary>,
}

impl SetListResponse {
    pub fn from_library(library: &SetLibrary) -> Self {
        let current = library.current_name();
        Self {
            current_set: current.to_string(),
            sets: library
                .sets()
                .iter()
                .map(|set| SetSummary {
                    name: set.name.clone(),
                    card_count: set.cards.len(),
                    is_current: set.name == current,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetNameRequest {
    pub name: String,
}

// Card types
#[derive(Debug, Serialize, Deserialize)]
pub struct CardView {
    pub position: usize,
    pub term: String,
    pub definition: String,
    pub mastery: u8,
    pub starred: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardListResponse {
    pub set_name: String,
    pub cards: Vec<CardView>,
}

impl CardListResponse {
    pub fn from_set(set_name: &str, set: &CardSet) -> Self {
        Self {
            set_name: set_name.to_string(),
            cards: set
                .iter()
                .enumerate()
                .map(|(position, (_, card))| CardView {
                    position,
                    term: card.term.clone(),
                    definition: card.definition.clone(),
                    mastery: card.mastery,
                    starred: card.starred,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardRequest {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StarRequest {
    pub starred: bool,
}

// Round types
/// A question as shown to the player. The correct answer is withheld until
/// the question has been answered.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionView {
    pub index: usize,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub prompt_text: String,
    pub options: Vec<String>,
    pub answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl QuestionView {
    pub fn new(index: usize, item: &RoundItem) -> Self {
        let Question {
            question_type,
            prompt_text,
            options,
            correct_answer,
        } = item.question.clone();
        Self {
            index,
            question_type,
            prompt_text,
            options,
            answered: item.answered,
            correct: item.answered.then_some(item.correct),
            correct_answer: item.answered.then_some(correct_answer),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoundView {
    pub id: Uuid,
    pub set_name: String,
    pub total: usize,
    pub current_question_index: usize,
    pub correct_answers: usize,
    pub progress: f64,
    pub complete: bool,
    pub started_at: DateTime<Utc>,
    pub question: Option<QuestionView>,
}

impl RoundView {
    pub fn new(id: Uuid, active: &ActiveRound) -> Self {
        let round = &active.round;
        Self {
            id,
            set_name: active.set_name.clone(),
            total: round.len(),
            current_question_index: round.current_question_index(),
            correct_answers: round.correct_answers(),
            progress: round.progress(),
            complete: round.is_complete(),
            started_at: active.started_at,
            question: round
                .current()
                .map(|item| QuestionView::new(round.current_question_index(), item)),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub correct_answer: String,
    pub correct_answers: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinishRoundResponse {
    pub set_name: String,
    pub summary: RoundSummary,
    pub results: Vec<CardResultView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CardResultView {
    pub term: String,
    pub correct: usize,
    pub total: usize,
    pub mastery: u8,
}

impl From<CardResult> for CardResultView {
    fn from(result: CardResult) -> Self {
        Self {
            term: result.term,
            correct: result.correct,
            total: result.total,
            mastery: result.mastery,
        }
    }
}
