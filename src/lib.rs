//! Wordle Advisor
//!
//! Constraint-based word elimination and entropy-driven guess recommendation for
//! Wordle-style games of any word length.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::constraints::{build_constraints, filter_words};
//! use wordle_advisor::core::{Word, evaluate};
//!
//! // Feedback for a guess against a known target
//! let guess = evaluate(&Word::new("sleep").unwrap(), &Word::new("level").unwrap()).unwrap();
//! assert_eq!(guess.pattern().to_string(), "APPCA");
//!
//! // Narrow a word list down to what is still possible
//! let constraints = build_constraints([&guess]).unwrap();
//! let words: Vec<Word> = ["level", "lever", "spell"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! assert_eq!(filter_words(&words, &constraints).len(), 2);
//! ```

// Core domain types
pub mod core;

// Constraint derivation and filtering
pub mod constraints;

// Entropy scoring and recommendation
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
