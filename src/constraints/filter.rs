//! Dictionary filtering against accumulated constraints

use super::WordConstraints;
use crate::core::Word;

/// Check whether `word` could still be the hidden word
///
/// Checks run cheapest first: fixed positions, required letters, excluded
/// letters, known wrong positions, then occurrence counts. A word of a different
/// length than the constraints were built for never matches.
#[must_use]
pub fn is_valid(word: &Word, constraints: &WordConstraints) -> bool {
    if constraints
        .word_length
        .is_some_and(|length| length != word.len())
    {
        return false;
    }

    let fixed_match = constraints
        .correct_letters
        .iter()
        .all(|(&position, &letter)| word.letter_at(position) == Some(letter));
    if !fixed_match {
        return false;
    }

    if !constraints
        .present_letters
        .iter()
        .all(|&letter| word.has_letter(letter))
    {
        return false;
    }

    if constraints
        .absent_letters
        .iter()
        .any(|&letter| word.has_letter(letter))
    {
        return false;
    }

    let misplaced = constraints
        .wrong_positions
        .iter()
        .any(|(&letter, positions)| {
            positions
                .iter()
                .any(|&position| word.letter_at(position) == Some(letter))
        });
    if misplaced {
        return false;
    }

    constraints
        .letter_counts
        .iter()
        .all(|(&letter, count)| count.admits(word.count_of(letter)))
}

/// Keep the words that satisfy every constraint, preserving order
///
/// # Examples
/// ```
/// use wordle_advisor::constraints::{build_constraints, filter_words};
/// use wordle_advisor::core::{evaluate, Word};
///
/// let guess = evaluate(&Word::new("sleep").unwrap(), &Word::new("level").unwrap()).unwrap();
/// let constraints = build_constraints([&guess]).unwrap();
///
/// let words: Vec<Word> = ["level", "lever", "leave", "spell", "hello"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let remaining: Vec<&str> = filter_words(&words, &constraints)
///     .into_iter()
///     .map(Word::text)
///     .collect();
///
/// assert_eq!(remaining, ["LEVEL", "LEVER"]);
/// ```
#[must_use]
pub fn filter_words<'a, I>(words: I, constraints: &WordConstraints) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_valid(word, constraints))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{LetterCount, build_constraints};
    use crate::core::evaluate;
    use std::collections::BTreeSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(words: Vec<&Word>) -> Vec<&str> {
        words.into_iter().map(Word::text).collect()
    }

    #[test]
    fn empty_constraints_accept_everything() {
        let list = words(&["cat", "level", "programming"]);
        let constraints = WordConstraints::new();
        assert_eq!(filter_words(&list, &constraints).len(), 3);
    }

    #[test]
    fn hand_built_constraints() {
        let mut c = WordConstraints::new();
        c.correct_letters.insert(0, b'S');
        c.correct_letters.insert(2, b'E');
        c.present_letters.insert(b'P');
        c.wrong_positions.insert(b'P', BTreeSet::from([3]));

        let list = words(&["speed", "slept", "steel", "speck", "sheep"]);
        assert_eq!(texts(filter_words(&list, &c)), ["SPEED", "SPECK", "SHEEP"]);
    }

    #[test]
    fn out_of_range_fixed_position_fails_without_panicking() {
        let mut c = WordConstraints::new();
        c.correct_letters.insert(6, b'S');
        c.wrong_positions.insert(b'T', BTreeSet::from([9]));

        assert!(!is_valid(&Word::new("cat").unwrap(), &c));
        assert!(is_valid(&Word::new("chooses").unwrap(), &c));
    }

    #[test]
    fn length_established_by_history_is_enforced() {
        let guess = evaluate(&Word::new("dog").unwrap(), &Word::new("cat").unwrap()).unwrap();
        let c = build_constraints([&guess]).unwrap();

        assert!(is_valid(&Word::new("cab").unwrap(), &c));
        assert!(!is_valid(&Word::new("cabs").unwrap(), &c));
    }

    #[test]
    fn three_letter_game() {
        let target = Word::new("cat").unwrap();
        let history = [
            evaluate(&Word::new("dog").unwrap(), &target).unwrap(),
            evaluate(&Word::new("car").unwrap(), &target).unwrap(),
        ];
        let c = build_constraints(&history).unwrap();

        assert!(is_valid(&Word::new("cat").unwrap(), &c));
        assert!(is_valid(&Word::new("cab").unwrap(), &c));
        assert!(!is_valid(&Word::new("bat").unwrap(), &c));
    }

    #[test]
    fn count_bounds_are_checked() {
        let mut c = WordConstraints::new();
        c.letter_counts.insert(b'E', LetterCount::Exact(1));
        c.letter_counts.insert(b'L', LetterCount::AtLeast(2));

        let list = words(&["lever", "level", "hello", "ladle", "belle"]);
        assert_eq!(texts(filter_words(&list, &c)), ["HELLO", "LADLE"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let guess = evaluate(&Word::new("crane").unwrap(), &Word::new("crane").unwrap()).unwrap();
        let c = build_constraints([&guess]).unwrap();

        let list = words(&["slate", "irate"]);
        assert!(filter_words(&list, &c).is_empty());
    }
}
