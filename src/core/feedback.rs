//! Guess feedback
//!
//! A [`GuessResult`] pairs a guessed word with the per-letter statuses the game
//! reported for it. Results are either computed against a known target with
//! [`evaluate`] or built from feedback observed in a real game.

use super::{EngineError, InvalidInput, LetterStatus, Pattern, Word};
use std::collections::BTreeMap;
use std::fmt;

/// One occurrence of a letter inside a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterOccurrence {
    pub position: usize,
    pub status: LetterStatus,
}

/// A guessed word together with its feedback
///
/// Immutable once created; the statuses always have the same length as the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    word: Word,
    statuses: Vec<LetterStatus>,
}

impl GuessResult {
    /// Build a result from feedback observed in a game
    ///
    /// # Errors
    /// Returns [`InvalidInput::FeedbackLength`] if the number of statuses differs
    /// from the word length.
    pub fn from_statuses(word: Word, statuses: Vec<LetterStatus>) -> Result<Self, EngineError> {
        if statuses.len() != word.len() {
            return Err(InvalidInput::FeedbackLength {
                letters: word.len(),
                statuses: statuses.len(),
            }
            .into());
        }
        Ok(Self { word, statuses })
    }

    /// Parse a word and a feedback string such as `"SLEEP"`, `"APPCA"`
    ///
    /// # Errors
    /// Returns an error if the word is invalid, the feedback contains an
    /// unrecognised symbol, or the two lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{GuessResult, LetterStatus};
    ///
    /// let guess = GuessResult::parse("sleep", "-yyg-").unwrap();
    /// assert_eq!(guess.word().text(), "SLEEP");
    /// assert_eq!(guess.statuses()[3], LetterStatus::Correct);
    /// ```
    pub fn parse(word: &str, feedback: &str) -> Result<Self, EngineError> {
        let word = Word::new(word)?;
        let statuses = feedback
            .chars()
            .map(LetterStatus::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| InvalidInput::Feedback(feedback.to_string()))?;
        Self::from_statuses(word, statuses)
    }

    /// The guessed word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-letter statuses, one per position
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.statuses
    }

    /// The statuses encoded as a [`Pattern`]
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        Pattern::from_statuses(&self.statuses)
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Group the guess's occurrences by letter
    #[must_use]
    pub fn letter_details(&self) -> BTreeMap<u8, Vec<LetterOccurrence>> {
        let mut details: BTreeMap<u8, Vec<LetterOccurrence>> = BTreeMap::new();
        for (position, (&letter, &status)) in
            self.word.letters().iter().zip(&self.statuses).enumerate()
        {
            details
                .entry(letter)
                .or_default()
                .push(LetterOccurrence { position, status });
        }
        details
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.pattern())
    }
}

/// Compute the feedback for `guess` against `target`
///
/// # Errors
/// Returns [`InvalidInput::LengthMismatch`] if the words have different lengths.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{evaluate, LetterStatus::*, Word};
///
/// let guess = Word::new("seeds").unwrap();
/// let target = Word::new("speed").unwrap();
/// let result = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(result.statuses(), &[Correct, Present, Correct, Present, Absent]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<GuessResult, EngineError> {
    if guess.len() != target.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: target.len(),
            actual: guess.len(),
        }
        .into());
    }

    Ok(GuessResult {
        word: guess.clone(),
        statuses: Pattern::calculate(guess, target).statuses(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> GuessResult {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn evaluate_same_word_is_all_correct() {
        let result = eval("level", "level");
        assert!(result.is_solved());
        assert!(result.pattern().is_perfect());
    }

    #[test]
    fn evaluate_is_case_insensitive() {
        assert_eq!(eval("Door", "wORD"), eval("DOOR", "WORD"));
        assert_eq!(eval("door", "word").statuses(), &[Present, Correct, Absent, Present]);
    }

    #[test]
    fn evaluate_three_letter_words() {
        assert_eq!(eval("dog", "cat").statuses(), &[Absent, Absent, Absent]);
        assert_eq!(eval("car", "cat").statuses(), &[Correct, Correct, Absent]);
    }

    #[test]
    fn evaluate_rejects_length_mismatch() {
        let err = evaluate(&Word::new("cat").unwrap(), &Word::new("cats").unwrap()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InvalidInput::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn evaluate_never_over_reports_duplicates() {
        let words = ["speed", "erase", "eerie", "geese", "level", "sleep", "sheep"];
        for guess in words {
            for target in words {
                let result = eval(guess, target);
                let target_word = Word::new(target).unwrap();
                for (letter, occurrences) in result.letter_details() {
                    let marked = occurrences
                        .iter()
                        .filter(|o| o.status != Absent)
                        .count();
                    assert!(
                        marked <= target_word.count_of(letter),
                        "{guess} vs {target}: letter {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn parse_observed_feedback() {
        let result = GuessResult::parse("sleep", "APPCA").unwrap();
        assert_eq!(result, eval("sleep", "level"));
        assert_eq!(result.to_string(), "SLEEP APPCA");
    }

    #[test]
    fn parse_rejects_bad_feedback() {
        assert!(matches!(
            GuessResult::parse("sleep", "APPC"),
            Err(EngineError::InvalidInput(InvalidInput::FeedbackLength {
                letters: 5,
                statuses: 4
            }))
        ));
        assert!(matches!(
            GuessResult::parse("sleep", "APPCZ"),
            Err(EngineError::InvalidInput(InvalidInput::Feedback(_)))
        ));
        assert!(matches!(
            GuessResult::parse("sl3ep", "APPCA"),
            Err(EngineError::InvalidInput(InvalidInput::Word(_)))
        ));
    }

    #[test]
    fn letter_details_groups_by_letter() {
        let details = eval("sleep", "level").letter_details();
        let e = &details[&b'E'];
        assert_eq!(e.len(), 2);
        assert_eq!(e[0], LetterOccurrence { position: 2, status: Present });
        assert_eq!(e[1], LetterOccurrence { position: 3, status: Correct });
    }
}
