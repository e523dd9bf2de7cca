//! Error types shared by the engine
//!
//! Every failure the core can report is either a [`Conflict`] (the feedback history
//! contradicts itself) or an [`InvalidInput`] (the caller handed over malformed data).

use super::WordError;
use thiserror::Error;

/// Failure returned by the engine's fallible operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The feedback history is logically inconsistent
    #[error("conflicting feedback: {0}")]
    Conflict(#[from] Conflict),

    /// The caller supplied malformed input
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl From<WordError> for EngineError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(InvalidInput::Word(err))
    }
}

/// A contradiction between a new piece of feedback and accumulated knowledge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("position {position} is fixed to '{existing}' but feedback marks '{asserted}' correct there")]
    Position {
        position: usize,
        existing: char,
        asserted: char,
    },

    #[error("letter '{letter}' needs at least {min} occurrence(s) but exactly {exact} were observed")]
    Count { letter: char, min: usize, exact: usize },

    #[error("letter '{letter}' was observed exactly {previous} time(s), now exactly {observed}")]
    ExactMismatch {
        letter: char,
        previous: usize,
        observed: usize,
    },

    #[error("letter '{letter}' is fixed at position {position}, which is also a known wrong position")]
    Placement { letter: char, position: usize },

    #[error("letter '{letter}' is fixed at {fixed} position(s) but occurs exactly {exact} time(s)")]
    FixedExceedsExact {
        letter: char,
        fixed: usize,
        exact: usize,
    },

    #[error("known letters require at least {required} slots in a {length}-letter word")]
    Overfull { required: usize, length: usize },
}

/// Malformed input rejected before any computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error("word length {actual} does not match expected length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("feedback has {statuses} status(es) for a {letters}-letter word")]
    FeedbackLength { letters: usize, statuses: usize },

    #[error("unrecognised feedback '{0}' (use C/P/A, G/Y/- or coloured squares)")]
    Feedback(String),
}
