//! Word analysis command
//!
//! Scores one guess against the answers still possible after a history.

use crate::core::{GuessResult, Word};
use crate::solver::entropy::score_guess;
use crate::solver::{Advisor, EntropyResult};
use crate::wordlists::WordSource;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub score: EntropyResult,
    /// Effective number of equally likely outcomes, 2^entropy
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word is in the dictionary
    pub known_word: bool,
}

/// Analyze `word` as a guess after `history`
///
/// Words outside the dictionary are still scored; `known_word` records it.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid or its length differs from the history's
/// - The history is inconsistent
/// - No answers remain to score against
pub fn analyze_word<S: WordSource + ?Sized>(
    word: &str,
    advisor: &Advisor<'_, S>,
    history: &[GuessResult],
) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;

    let (_, answers) = advisor
        .possible_answers(history, guess.len())
        .context("Could not apply guess history")?;
    if answers.is_empty() {
        bail!("No {}-letter answers remain to analyze against", guess.len());
    }

    let score = score_guess(&guess, &answers);

    Ok(AnalysisResult {
        expected_reduction: score.entropy.exp2(),
        total_candidates: answers.len(),
        known_word: advisor.source().is_known(&guess),
        score,
    })
}
