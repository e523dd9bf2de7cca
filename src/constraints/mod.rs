//! Constraint derivation and dictionary filtering
//!
//! Turns a guess history into a [`WordConstraints`] value and narrows word lists
//! down to the words still consistent with it.

mod accumulator;
mod filter;

pub use accumulator::{LetterCount, WordConstraints, build_constraints};
pub use filter::{filter_words, is_valid};
