//! Word solving command
//!
//! Plays the advisor's top recommendation against a known target until it is
//! found or the guess limit runs out.

use crate::core::{GuessResult, Pattern, Word, evaluate};
use crate::solver::Advisor;
use crate::wordlists::WordSource;
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess, when it was scored rather than guessed outright
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` by always playing the top recommendation
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the advisor's answer pool
/// - The advisor runs out of recommendations
pub fn solve_word<S: WordSource + ?Sized>(
    config: SolveConfig,
    advisor: &Advisor<'_, S>,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;
    let length = target.len();

    let (_, pool) = advisor.possible_answers(&[], length)?;
    if !pool.contains(&&target) {
        bail!("Target '{target}' is not in the {length}-letter answer list");
    }

    let mut history: Vec<GuessResult> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let advice = advisor.advise(&history, length)?;
        let candidates_before = advice.possible_answers.len();

        let Some(best) = advice.recommendations.into_iter().next() else {
            bail!("No recommendation after {} guesses", history.len());
        };

        let (entropy, expected_remaining) = if best.pattern_distribution.is_empty() {
            (None, None)
        } else {
            (Some(best.entropy), Some(best.expected_remaining))
        };

        let result = evaluate(&best.word, &target)?;
        let pattern = result.pattern();
        let solved = result.is_solved();
        history.push(result);

        let (_, after) = advisor.possible_answers(&history, length)?;

        guesses.push(GuessStep {
            word: best.word,
            pattern,
            candidates_before,
            candidates_after: after.len(),
            entropy,
            expected_remaining,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RecommendConfig;
    use crate::wordlists::WordList;

    fn advisor_over(list: &WordList) -> Advisor<'_, WordList> {
        Advisor::new(list, RecommendConfig::default())
    }

    #[test]
    fn solve_word_succeeds() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        let result = solve_word(SolveConfig::new("level".to_string()), &advisor).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= 6);
        if result.success {
            let last = result.guesses.last().unwrap();
            assert_eq!(last.word.text(), "LEVEL");
            assert!(last.pattern.is_perfect());
        }
    }

    #[test]
    fn solve_records_history() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        let result = solve_word(SolveConfig::new("crane".to_string()), &advisor).unwrap();

        assert_eq!(result.guesses[0].word.text(), "TEARS");
        assert!(result.guesses[0].entropy.is_some());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solves_other_lengths() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        let result = solve_word(SolveConfig::new("cat".to_string()), &advisor).unwrap();
        assert_eq!(result.guesses[0].word.text(), "SEA");
        assert_eq!(result.target.len(), 3);
    }

    #[test]
    fn solve_unknown_target_returns_error() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        assert!(solve_word(SolveConfig::new("zzzzz".to_string()), &advisor).is_err());
        assert!(solve_word(SolveConfig::new("cr4ne".to_string()), &advisor).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        let mut config = SolveConfig::new("level".to_string());
        config.max_guesses = 1;

        let result = solve_word(config, &advisor).unwrap();
        assert_eq!(result.guesses.len(), 1);
        assert!(!result.success);
    }

    #[test]
    fn opener_target_solved_first_try() {
        let list = WordList::embedded();
        let advisor = advisor_over(&list);

        let result = solve_word(SolveConfig::new("tears".to_string()), &advisor).unwrap();
        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }
}
