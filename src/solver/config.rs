//! Tunables for guess recommendation

/// Recommendation settings
///
/// The defaults suit standard Wordle dictionaries; the CLI exposes each field
/// as a flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendConfig {
    /// Maximum number of recommendations returned
    pub top_n: usize,
    /// Below this many possible answers, only answers are considered as guesses
    pub small_pool_threshold: usize,
    /// Maximum number of dictionary words scored when the answer pool is large
    pub scan_budget: usize,
    /// Fraction of the answer pool assumed to survive an opening guess
    pub opening_remaining_ratio: f64,
    /// Draw possible answers from the common-words list instead of the full one
    pub common_only: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            small_pool_threshold: 50,
            scan_budget: 1000,
            opening_remaining_ratio: 0.2,
            common_only: false,
        }
    }
}
