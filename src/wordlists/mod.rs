//! Word lists for guess recommendation
//!
//! Provides the embedded dictionary compiled into the binary, file loading, and
//! the [`WordSource`] seam the advisor reads words through.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{COMMON, COMMON_COUNT, WORDS, WORDS_COUNT};
pub use source::{STATISTICS_LENGTHS, WordList, WordListMetadata, WordSource};
