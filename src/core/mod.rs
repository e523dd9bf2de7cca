//! Core domain types for Wordle-style games
//!
//! Words, feedback patterns, guess results and the engine's error types.
//! Everything here is pure and has no I/O.

mod error;
mod feedback;
mod pattern;
mod word;

pub use error::{Conflict, EngineError, InvalidInput};
pub use feedback::{GuessResult, LetterOccurrence, evaluate};
pub use pattern::{LetterStatus, Pattern};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
