//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod filter;
pub mod recommend;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use filter::{FilterResult, filter_candidates};
pub use recommend::{
    DEFAULT_WORD_LENGTH, parse_guess, parse_history, recommend_next, resolve_word_length,
};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
