//! Error types for flashlearn-core.

use thiserror::Error;

/// Result type alias using SetError.
pub type SetResult<T> = std::result::Result<T, SetError>;

/// Round settings that break a round builder precondition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("round length must be at least 1")]
    ZeroRoundLength,

    #[error("round length must be at most {max}")]
    RoundTooLong { max: usize },

    #[error("at least one question type must be selected")]
    NoQuestionTypes,
}

/// Errors from editing cards and sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetError {
    #[error("a set named {0:?} already exists")]
    DuplicateSet(String),

    #[error("set name must not be blank")]
    BlankSetName,

    #[error("no set named {0:?}")]
    UnknownSet(String),

    #[error("cannot delete {0:?}: at least one set must remain")]
    LastSet(String),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no card at position {position} (set has {len} cards)")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Errors from stepping through a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("round has no more questions")]
    Finished,

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("question {index} has not been answered")]
    NotAnswered { index: usize },

    #[error("no option selected")]
    NoSelection,
}
