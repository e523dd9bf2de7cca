//! Entropy-based candidate ranking
//!
//! Scores every candidate guess in parallel and orders them by expected
//! information gain.

use super::calculator::{EntropyResult, score_guess};
use crate::core::{EngineError, InvalidInput, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Entropy differences at or below this many bits count as a tie
pub const ENTROPY_TOLERANCE: f64 = 0.001;

/// With this many answers or fewer, the answers themselves are recommended
/// without scoring
pub const DIRECT_GUESS_LIMIT: usize = 2;

/// Rank `candidates` as guesses against the possible `answers`
///
/// Ordering is by entropy descending. Candidates whose entropy lies within
/// [`ENTROPY_TOLERANCE`] of the leader of their tie group prefer possible
/// answers first, then lower expected remaining. Equal keys keep input order.
///
/// At most `top_n` results are returned.
///
/// # Errors
/// [`InvalidInput::LengthMismatch`] if any candidate or answer differs in length
/// from the first answer.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::rank_candidates;
///
/// let guesses = [Word::new("aaaaa").unwrap(), Word::new("aeros").unwrap()];
/// let answers = [
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let answer_refs: Vec<&Word> = answers.iter().collect();
///
/// let ranked = rank_candidates(&guess_refs, &answer_refs, 5).unwrap();
/// assert_eq!(ranked[0].word.text(), "AEROS");
/// assert!(ranked[0].entropy > ranked[1].entropy);
/// ```
pub fn rank_candidates(
    candidates: &[&Word],
    answers: &[&Word],
    top_n: usize,
) -> Result<Vec<EntropyResult>, EngineError> {
    if answers.len() <= DIRECT_GUESS_LIMIT {
        return Ok(answers
            .iter()
            .take(top_n)
            .map(|&answer| EntropyResult::direct(answer))
            .collect());
    }

    let length = answers[0].len();
    check_lengths(answers.iter().chain(candidates).copied(), length)?;

    let answer_set: FxHashSet<&Word> = answers.iter().copied().collect();

    let mut scored: Vec<EntropyResult> = candidates
        .par_iter()
        .map(|&candidate| {
            let mut result = score_guess(candidate, answers);
            result.is_possible_answer = answer_set.contains(candidate);
            result
        })
        .collect();

    order_by_information(&mut scored);
    scored.truncate(top_n);

    Ok(scored)
}

/// Every word must have `length` letters
pub(crate) fn check_lengths<'a, I>(words: I, length: usize) -> Result<(), EngineError>
where
    I: IntoIterator<Item = &'a Word>,
{
    match words.into_iter().find(|word| word.len() != length) {
        Some(word) => Err(InvalidInput::LengthMismatch {
            expected: length,
            actual: word.len(),
        }
        .into()),
        None => Ok(()),
    }
}

/// Sort by entropy, then settle near-ties by answer membership and expected
/// remaining
///
/// Tie groups are anchored on their first (highest entropy) member so the
/// comparison stays transitive.
fn order_by_information(results: &mut [EntropyResult]) {
    results.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));

    let mut start = 0;
    while start < results.len() {
        let leader = results[start].entropy;
        let end = results[start..]
            .iter()
            .position(|r| leader - r.entropy > ENTROPY_TOLERANCE)
            .map_or(results.len(), |offset| start + offset);

        results[start..end].sort_by(tie_break);
        start = end;
    }
}

fn tie_break(a: &EntropyResult, b: &EntropyResult) -> Ordering {
    b.is_possible_answer
        .cmp(&a.is_possible_answer)
        .then_with(|| a.expected_remaining.total_cmp(&b.expected_remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn result(text: &str, entropy: f64, expected: f64, is_answer: bool) -> EntropyResult {
        EntropyResult {
            word: Word::new(text).unwrap(),
            entropy,
            expected_remaining: expected,
            is_possible_answer: is_answer,
            pattern_distribution: FxHashMap::default(),
        }
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = words(&["aaaaa", "aeros"]);
        let answers = words(&["slate", "irate", "crate", "grate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let answer_refs: Vec<&Word> = answers.iter().collect();

        let ranked = rank_candidates(&guess_refs, &answer_refs, 5).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word.text(), "AEROS");
        assert!(ranked[0].entropy > 0.5);
    }

    #[test]
    fn two_or_fewer_answers_are_returned_directly() {
        let guesses = words(&["crane", "slate"]);
        let answers = words(&["irate", "grate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let answer_refs: Vec<&Word> = answers.iter().collect();

        let ranked = rank_candidates(&guess_refs, &answer_refs, 5).unwrap();
        let texts: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["IRATE", "GRATE"]);
        assert!(ranked.iter().all(|r| r.entropy.abs() < f64::EPSILON));
        assert!(ranked.iter().all(|r| (r.expected_remaining - 1.0).abs() < f64::EPSILON));

        let one = rank_candidates(&guess_refs, &answer_refs[..1], 5).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].word.text(), "IRATE");
    }

    #[test]
    fn empty_answers_give_no_results() {
        let guesses = words(&["crane"]);
        let guess_refs: Vec<&Word> = guesses.iter().collect();

        assert!(rank_candidates(&guess_refs, &[], 5).unwrap().is_empty());
    }

    #[test]
    fn results_truncated_to_top_n() {
        let list = words(&["crane", "slate", "irate", "trace", "raise", "arise", "stare"]);
        let refs: Vec<&Word> = list.iter().collect();

        let ranked = rank_candidates(&refs, &refs, 3).unwrap();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].entropy >= w[1].entropy - ENTROPY_TOLERANCE));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let guesses = words(&["cranes"]);
        let answers = words(&["slate", "irate", "crate"]);

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let answer_refs: Vec<&Word> = answers.iter().collect();

        let err = rank_candidates(&guess_refs, &answer_refs, 5).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InvalidInput::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn near_ties_prefer_possible_answers() {
        let mut results = vec![
            result("crane", 2.0, 1.0, false),
            result("slate", 1.9995, 3.0, true),
            result("irate", 1.5, 0.5, true),
        ];
        order_by_information(&mut results);

        let texts: Vec<&str> = results.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "IRATE"]);
    }

    #[test]
    fn near_ties_then_prefer_lower_expected_remaining() {
        let mut results = vec![
            result("crane", 2.0, 3.0, false),
            result("slate", 2.0005, 2.0, false),
            result("trace", 2.0, 1.0, false),
        ];
        order_by_information(&mut results);

        let texts: Vec<&str> = results.iter().map(|r| r.word.text()).collect();
        assert_eq!(texts, ["TRACE", "SLATE", "CRANE"]);
    }

    #[test]
    fn clear_entropy_gap_wins_over_membership() {
        let mut results = vec![
            result("crane", 1.0, 1.0, true),
            result("slate", 2.0, 5.0, false),
        ];
        order_by_information(&mut results);

        assert_eq!(results[0].word.text(), "SLATE");
    }

    #[test]
    fn ranking_is_deterministic() {
        let list = words(&["crane", "slate", "irate", "trace", "raise", "arise", "stare"]);
        let refs: Vec<&Word> = list.iter().collect();

        let first: Vec<String> = rank_candidates(&refs, &refs, 7)
            .unwrap()
            .into_iter()
            .map(|r| r.word.text().to_string())
            .collect();
        let second: Vec<String> = rank_candidates(&refs, &refs, 7)
            .unwrap()
            .into_iter()
            .map(|r| r.word.text().to_string())
            .collect();

        assert_eq!(first, second);
    }
}
