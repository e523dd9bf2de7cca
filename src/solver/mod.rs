//! Guess recommendation
//!
//! Entropy scoring, candidate pool selection, opening words and the advisor that
//! ties them to a word source.

mod config;
mod engine;
pub mod entropy;
mod openers;
mod recommend;

pub use config::RecommendConfig;
pub use engine::{Advice, Advisor};
pub use entropy::EntropyResult;
pub use openers::opening_words;
pub use recommend::recommend;
