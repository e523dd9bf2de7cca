//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and the set of possible answers, computes how the answers split
//! into feedback buckets and the expected information gain of that split.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Score of one candidate guess against the possible answers
#[derive(Debug, Clone)]
pub struct EntropyResult {
    /// The candidate guess
    pub word: Word,
    /// Shannon entropy of the pattern distribution, in bits
    pub entropy: f64,
    /// Expected number of answers left after guessing `word`
    pub expected_remaining: f64,
    /// Whether `word` is itself one of the possible answers
    pub is_possible_answer: bool,
    /// Number of answers producing each feedback pattern
    pub pattern_distribution: FxHashMap<Pattern, usize>,
}

impl EntropyResult {
    /// A result for guessing a possible answer outright, without scoring
    #[must_use]
    pub fn direct(word: &Word) -> Self {
        Self {
            word: word.clone(),
            entropy: 0.0,
            expected_remaining: 1.0,
            is_possible_answer: true,
            pattern_distribution: FxHashMap::default(),
        }
    }

    /// Size of the largest pattern bucket (worst-case answers left)
    #[must_use]
    pub fn max_partition(&self) -> usize {
        self.pattern_distribution.values().copied().max().unwrap_or(0)
    }
}

/// Group answers by the pattern they produce with the guess
#[must_use]
pub fn pattern_distribution(guess: &Word, answers: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &answer in answers {
        let pattern = Pattern::calculate(guess, answer);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 when every answer lands in one bucket
/// - Maximised by a uniform split
/// - Always in range [0, log₂(n)] for n answers
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_advisor::core::Pattern;
/// use wordle_advisor::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Pattern::parse("AAA").unwrap(), 25);
/// uniform.insert(Pattern::parse("AAP").unwrap(), 25);
/// uniform.insert(Pattern::parse("APA").unwrap(), 25);
/// uniform.insert(Pattern::parse("PAA").unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            p * (1.0 / p).log2()
        })
        .sum()
}

/// Expected number of answers left once the feedback is known
///
/// Σ p_k × |bucket_k|, except the all-correct bucket counts as zero because
/// that guess ends the game.
#[must_use]
pub fn expected_remaining<S>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64
where
    S: BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .iter()
        .filter(|(pattern, _)| !pattern.is_perfect())
        .map(|(_, &count)| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum()
}

/// Calculate the Shannon entropy of guessing `guess` against `answers`
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("cat").unwrap();
/// let answers = [Word::new("cat").unwrap(), Word::new("dog").unwrap()];
/// let refs: Vec<&Word> = answers.iter().collect();
///
/// assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, answers: &[&Word]) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }

    shannon_entropy(&pattern_distribution(guess, answers))
}

/// Full score of a guess: entropy, expected remaining and distribution
#[must_use]
pub fn score_guess(guess: &Word, answers: &[&Word]) -> EntropyResult {
    let distribution = pattern_distribution(guess, answers);

    EntropyResult {
        word: guess.clone(),
        entropy: shannon_entropy(&distribution),
        expected_remaining: expected_remaining(&distribution),
        is_possible_answer: answers.iter().any(|&a| a == guess),
        pattern_distribution: distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("AAAAA"), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < f64::EPSILON);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for (i, p) in ["AAA", "AAP", "APA", "PAA"].into_iter().enumerate() {
            uniform.insert(pattern(p), 25);
            skewed.insert(pattern(p), if i == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn simple_binary_split() {
        let answers = words(&["cat", "dog"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let result = score_guess(&Word::new("cat").unwrap(), &refs);

        assert_eq!(result.pattern_distribution.get(&pattern("CCC")), Some(&1));
        assert_eq!(result.pattern_distribution.get(&pattern("AAA")), Some(&1));
        assert!((result.entropy - 1.0).abs() < 1e-9);
        // The all-correct bucket contributes nothing
        assert!((result.expected_remaining - 0.5).abs() < 1e-9);
        assert!(result.is_possible_answer);
    }

    #[test]
    fn identical_patterns_give_zero_entropy() {
        let answers = words(&["abc", "def", "ghi", "jkl"]);
        let refs: Vec<&Word> = answers.iter().collect();

        assert!(calculate_entropy(&Word::new("xyz").unwrap(), &refs).abs() < 1e-12);

        let repeated = words(&["cat", "cat", "cat"]);
        let refs: Vec<&Word> = repeated.iter().collect();
        assert!(calculate_entropy(&Word::new("dog").unwrap(), &refs).abs() < 1e-12);
    }

    #[test]
    fn distribution_counts_every_answer() {
        let answers = words(&["speed", "spend", "spell", "steed"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let result = score_guess(&Word::new("speed").unwrap(), &refs);

        assert_eq!(result.pattern_distribution.get(&pattern("CCCCC")), Some(&1));
        assert_eq!(result.pattern_distribution.values().sum::<usize>(), 4);
        assert_eq!(result.max_partition(), 1);
    }

    #[test]
    fn entropy_bounded_by_log_of_answer_count() {
        let answers = words(&["crane", "slate", "irate", "trace", "raise", "arise", "stare"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let bound = (refs.len() as f64).log2();

        for guess in &answers {
            let entropy = calculate_entropy(guess, &refs);
            assert!(entropy >= 0.0);
            assert!(entropy <= bound + 1e-9, "{guess}: {entropy} > {bound}");
        }
    }

    #[test]
    fn calculate_entropy_empty_answers() {
        let answers: Vec<&Word> = vec![];
        assert!(calculate_entropy(&Word::new("crane").unwrap(), &answers).abs() < f64::EPSILON);
    }

    #[test]
    fn direct_result_shape() {
        let result = EntropyResult::direct(&Word::new("apple").unwrap());
        assert!(result.entropy.abs() < f64::EPSILON);
        assert!((result.expected_remaining - 1.0).abs() < f64::EPSILON);
        assert!(result.pattern_distribution.is_empty());
    }
}
