//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for feedback pattern distributions
//! and the ranking of candidate guesses by expected information gain.

mod calculator;
mod selector;

pub use calculator::{
    EntropyResult, calculate_entropy, expected_remaining, pattern_distribution, score_guess,
    shannon_entropy,
};
pub use selector::{DIRECT_GUESS_LIMIT, ENTROPY_TOLERANCE, rank_candidates};
pub(crate) use selector::check_lengths;
