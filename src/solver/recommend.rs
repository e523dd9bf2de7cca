//! Candidate pool selection and guess recommendation

use super::config::RecommendConfig;
use super::entropy::{EntropyResult, check_lengths, rank_candidates, score_guess};
use super::openers::opening_words;
use crate::core::{EngineError, Word};
use log::debug;

/// Recommend guesses against the possible `answers`
///
/// - First guess with a shortlist for this length: the opening words are scored
///   in shortlist order and their expected remaining is estimated as
///   `|answers| × opening_remaining_ratio`.
/// - Fewer than `small_pool_threshold` answers: candidates are the answers.
/// - Otherwise: candidates are the first `scan_budget` words of `all_words` with
///   the answers' length.
///
/// An empty `answers` slice gives an empty list.
///
/// # Errors
/// [`crate::core::InvalidInput::LengthMismatch`] if the answers do not all share
/// one length.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::{RecommendConfig, recommend};
///
/// let all: Vec<Word> = ["tears", "crane", "slice", "tried", "hello"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let answers: Vec<&Word> = all.iter().collect();
///
/// let first = recommend(&all, &answers, true, &RecommendConfig::default()).unwrap();
/// assert_eq!(first[0].word.text(), "TEARS");
/// ```
pub fn recommend(
    all_words: &[Word],
    answers: &[&Word],
    is_first_guess: bool,
    config: &RecommendConfig,
) -> Result<Vec<EntropyResult>, EngineError> {
    let Some(first) = answers.first() else {
        return Ok(Vec::new());
    };
    let length = first.len();
    check_lengths(answers.iter().copied(), length)?;

    if is_first_guess {
        let openers = opening_words(length);
        if !openers.is_empty() {
            debug!(
                "opening guess: scoring {} shortlisted words against {} answers",
                openers.len(),
                answers.len()
            );
            return score_openers(openers, answers, config);
        }
    }

    let pool: Vec<&Word> = if answers.len() < config.small_pool_threshold {
        debug!("candidate pool: {} possible answers", answers.len());
        answers.to_vec()
    } else {
        let pool: Vec<&Word> = all_words
            .iter()
            .filter(|word| word.len() == length)
            .take(config.scan_budget)
            .collect();
        debug!(
            "candidate pool: {} dictionary words (budget {}) for {} answers",
            pool.len(),
            config.scan_budget,
            answers.len()
        );
        pool
    };

    rank_candidates(&pool, answers, config.top_n)
}

fn score_openers(
    openers: &[&str],
    answers: &[&Word],
    config: &RecommendConfig,
) -> Result<Vec<EntropyResult>, EngineError> {
    let estimate = answers.len() as f64 * config.opening_remaining_ratio;

    openers
        .iter()
        .take(config.top_n)
        .map(|&text| {
            let word = Word::new(text)?;
            let mut result = score_guess(&word, answers);
            result.expected_remaining = estimate;
            Ok(result)
        })
        .collect()
}
