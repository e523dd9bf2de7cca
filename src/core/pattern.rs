//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, after accounting for matched copies)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Each position contributes digit × 3^position to the value. The pattern also
//! remembers its length so that words of 3 to 15 letters share one type.

use super::Word;
use super::word::MAX_WORD_LENGTH;
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// No unmatched copy of the letter remains in the target
    Absent,
    /// The letter occurs in the target, but not here
    Present,
    /// The letter occupies this position in the target
    Correct,
}

impl LetterStatus {
    #[inline]
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Pattern-string symbol: `C`, `P` or `A`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }

    /// Coloured square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `C`/`G`/🟩 for correct, `P`/`Y`/🟨 for present and
    /// `A`/`-`/`_`/⬜/⬛ for absent (letters are case-insensitive).
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'C' | 'G' | '🟩' => Some(Self::Correct),
            'P' | 'Y' | '🟨' => Some(Self::Present),
            'A' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess
///
/// Two patterns are equal only if they have the same length and the same statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u32,
    len: u8,
}

impl Pattern {
    /// All-correct pattern for a word of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LENGTH`]
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LENGTH, "pattern length must be <= {MAX_WORD_LENGTH}");
        let value = (0..len).fold(0u32, |acc, _| acc * 3 + 2);
        Self {
            value,
            len: len as u8,
        }
    }

    /// Encode a sequence of statuses
    #[must_use]
    pub fn from_statuses(statuses: &[LetterStatus]) -> Self {
        debug_assert!(statuses.len() <= MAX_WORD_LENGTH);
        let mut value = 0u32;
        let mut multiplier = 1u32;
        for status in statuses {
            value += status.digit() * multiplier;
            multiplier *= 3;
        }
        Self {
            value,
            len: statuses.len() as u8,
        }
    }

    /// Get the raw base-3 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of letters the pattern covers
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.len())
    }

    /// Calculate the pattern when `guess` is played and `answer` is the target
    ///
    /// Implements Wordle's feedback rules including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct; every unmatched target letter
    ///    goes into the pool of available letters
    /// 2. Second pass: for each remaining guess letter, mark it present and take
    ///    one copy out of the pool if any copy is left, otherwise absent
    ///
    /// Lengths are expected to match; positions past the end of the shorter word
    /// are never correct.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("door").unwrap();
    /// let answer = Word::new("word").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "PCAP");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let guess = guess.letters();
        let answer = answer.letters();
        let mut marks = [LetterStatus::Absent; MAX_WORD_LENGTH];
        let mut available = [0u8; 26];

        // First pass: exact matches
        for (i, &letter) in answer.iter().enumerate() {
            if guess.get(i) == Some(&letter) {
                marks[i] = LetterStatus::Correct;
            } else {
                available[letter_index(letter)] += 1;
            }
        }

        // Second pass: present elsewhere, consuming one copy each
        for (i, &letter) in guess.iter().enumerate() {
            if marks[i] == LetterStatus::Correct {
                continue;
            }
            let slot = &mut available[letter_index(letter)];
            if *slot > 0 {
                marks[i] = LetterStatus::Present;
                *slot -= 1;
            }
        }

        Self::from_statuses(&marks[..guess.len()])
    }

    /// Decode the per-letter statuses
    #[must_use]
    pub fn statuses(self) -> Vec<LetterStatus> {
        let mut val = self.value;
        (0..self.len())
            .map(|_| {
                let status = LetterStatus::from_digit(val % 3);
                val /= 3;
                status
            })
            .collect()
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.statuses()
            .into_iter()
            .filter(|&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.statuses()
            .into_iter()
            .filter(|&s| s == LetterStatus::Present)
            .count()
    }

    /// Parse a pattern from a string like "CPAAC", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("CP-CY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.to_string(), "CPACP");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let statuses: Vec<LetterStatus> = s
            .chars()
            .map(LetterStatus::from_char)
            .collect::<Option<_>>()?;

        if statuses.is_empty() || statuses.len() > MAX_WORD_LENGTH {
            return None;
        }

        Some(Self::from_statuses(&statuses))
    }

    /// Convert pattern to a string of coloured squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.statuses().into_iter().map(LetterStatus::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.statuses() {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}
