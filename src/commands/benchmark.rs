//! Benchmark command
//!
//! Plays the advisor against many targets and reports guess statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Advisor;
use crate::wordlists::WordSource;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses summed over solved words only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved words per guess count
    pub distribution: BTreeMap<usize, usize>,
    pub first_guesses: BTreeMap<String, usize>,
    /// Solved words needing the most guesses, worst first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct targets from `pool`
///
/// A fixed `seed` gives the same sample every run.
#[must_use]
pub fn sample_targets(pool: &[Word], count: usize, seed: Option<u64>) -> Vec<&Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    pool.choose_multiple(&mut rng, count).collect()
}

/// Solve every target and collect statistics
///
/// # Errors
///
/// Returns an error if a target cannot be played, for example because it is not
/// in the advisor's answer pool.
pub fn run_benchmark<S: WordSource + ?Sized>(
    advisor: &Advisor<'_, S>,
    targets: &[&Word],
    max_guesses: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved_counts: Vec<(String, usize)> = Vec::new();
    let mut failed_words = Vec::new();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut first_guesses: BTreeMap<String, usize> = BTreeMap::new();

    for (idx, &target) in targets.iter().enumerate() {
        let mut config = SolveConfig::new(target.text().to_string());
        config.max_guesses = max_guesses;
        let result = solve_word(config, advisor)?;

        if let Some(first) = result.guesses.first() {
            *first_guesses.entry(first.word.text().to_string()).or_insert(0) += 1;
        }

        if result.success {
            let guesses = result.guesses.len();
            *distribution.entry(guesses).or_insert(0) += 1;
            solved_counts.push((target.text().to_string(), guesses));
        } else {
            failed_words.push(target.text().to_string());
        }

        if idx % 10 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_words = targets.len();
    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let min_guesses = solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_guesses_seen = solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut hardest_words = solved_counts;
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        total_words as f64 / duration.as_secs_f64()
    };

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: failed_words.len(),
        total_guesses,
        average_guesses,
        min_guesses,
        max_guesses: max_guesses_seen,
        distribution,
        first_guesses,
        hardest_words,
        failed_words,
        duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RecommendConfig;
    use crate::wordlists::WordList;

    fn three_letter_targets(list: &WordList) -> Vec<&Word> {
        list.words_of_length(3).iter().take(10).collect()
    }

    #[test]
    fn benchmark_runs() {
        let list = WordList::embedded();
        let advisor = Advisor::new(&list, RecommendConfig::default());
        let targets = three_letter_targets(&list);

        let result = run_benchmark(&advisor, &targets, 6, false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed, 10);
        assert!(result.min_guesses <= result.max_guesses);
        assert!(result.max_guesses <= 6);
        assert_eq!(result.first_guesses.get("SEA"), Some(&10));
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let list = WordList::embedded();
        let advisor = Advisor::new(&list, RecommendConfig::default());
        let targets = three_letter_targets(&list);

        let result = run_benchmark(&advisor, &targets, 6, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
        if result.solved > 0 {
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn benchmark_empty_target_list() {
        let list = WordList::embedded();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let result = run_benchmark(&advisor, &[], 6, false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn seeded_sampling_is_repeatable() {
        let list = WordList::embedded();
        let pool = list.words_of_length(5);

        let first = sample_targets(pool, 8, Some(42));
        let second = sample_targets(pool, 8, Some(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn sampling_caps_at_pool_size() {
        let list = WordList::embedded();
        let pool = list.words_of_length(11);

        assert_eq!(sample_targets(pool, 10_000, Some(1)).len(), pool.len());
    }
}
