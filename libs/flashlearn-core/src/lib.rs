//! Core quiz engine for the FlashLearn study tool.
//!
//! Provides:
//! - Card sets with stable card ids, and the named set library
//! - Question generators (multiple-choice, true/false, written)
//! - Round building, answer submission and round summaries
//! - Answer grading with bigram similarity for typo tolerance
//! - Mastery updates at the end of a round
//!
//! Randomness is always passed in as a [`rand::RngCore`] so callers can use a
//! seeded generator for reproducible rounds.

pub mod error;
pub mod mastery;
pub mod matching;
pub mod question;
pub mod round;
pub mod set;
pub mod types;

pub use error::{RoundError, SetError, SetResult, SettingsError};
pub use mastery::{apply_round_results, CardResult};
pub use matching::{grade, similarity, TYPO_THRESHOLD};
pub use question::{generator_for, QuestionGenerator};
pub use round::{build_round, selection_order, Round, RoundItem, RoundSummary};
pub use set::{CardId, CardSet, NamedSet, SetLibrary, STARTER_SET_NAME};
pub use types::{
    AnswerSide, Card, Question, QuestionType, RoundSettings, MAX_MASTERY,
    MAX_ROUND_LENGTH,
};
