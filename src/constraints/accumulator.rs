//! Constraint accumulation
//!
//! Folds guess feedback, one guess at a time, into a [`WordConstraints`] value
//! describing everything known about the hidden word.

use crate::core::{Conflict, EngineError, GuessResult, InvalidInput, LetterStatus};
use log::trace;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Known number of occurrences of a letter in the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCount {
    /// Exactly this many occurrences
    Exact(usize),
    /// At least this many, upper bound unknown
    AtLeast(usize),
}

impl LetterCount {
    /// Whether a word with `occurrences` copies of the letter satisfies the bound
    #[inline]
    #[must_use]
    pub const fn admits(self, occurrences: usize) -> bool {
        match self {
            Self::Exact(n) => occurrences == n,
            Self::AtLeast(n) => occurrences >= n,
        }
    }

    /// The smallest admissible number of occurrences
    #[inline]
    #[must_use]
    pub const fn lower_bound(self) -> usize {
        match self {
            Self::Exact(n) | Self::AtLeast(n) => n,
        }
    }
}

impl fmt::Display for LetterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "={n}"),
            Self::AtLeast(n) => write!(f, "≥{n}"),
        }
    }
}

/// Accumulated knowledge about the hidden word
///
/// Letters are uppercase ASCII bytes and positions are zero-based. A letter in
/// `absent_letters` always carries `LetterCount::Exact(0)` when built by
/// [`WordConstraints::fold`]; a letter with a fixed position only stays in
/// `present_letters` while more copies are required than are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordConstraints {
    /// Length established by the first folded guess
    pub word_length: Option<usize>,
    /// Position → letter known to sit there
    pub correct_letters: BTreeMap<usize, u8>,
    /// Letters known to occur with no position fixed yet
    pub present_letters: BTreeSet<u8>,
    /// Letters with zero occurrences
    pub absent_letters: BTreeSet<u8>,
    /// Letter → positions it is known not to occupy
    pub wrong_positions: BTreeMap<u8, BTreeSet<usize>>,
    /// Letter → occurrence bound
    pub letter_counts: BTreeMap<u8, LetterCount>,
}

impl WordConstraints {
    /// Create an empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is known yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct_letters.is_empty()
            && self.present_letters.is_empty()
            && self.absent_letters.is_empty()
            && self.wrong_positions.is_empty()
            && self.letter_counts.is_empty()
    }

    /// Number of positions fixed to `letter`
    #[must_use]
    pub fn fixed_count(&self, letter: u8) -> usize {
        self.correct_letters.values().filter(|&&l| l == letter).count()
    }

    /// Fold one guess's feedback into the constraints
    ///
    /// On error the constraints are left exactly as they were before the call.
    ///
    /// # Errors
    /// - [`InvalidInput::LengthMismatch`] if the guess length differs from the
    ///   length established by earlier guesses
    /// - [`EngineError::Conflict`] if the feedback contradicts what is already known
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::constraints::{LetterCount, WordConstraints};
    /// use wordle_advisor::core::{evaluate, Word};
    ///
    /// let guess = evaluate(&Word::new("sleep").unwrap(), &Word::new("level").unwrap()).unwrap();
    /// let mut constraints = WordConstraints::new();
    /// constraints.fold(&guess).unwrap();
    ///
    /// assert_eq!(constraints.correct_letters.get(&3), Some(&b'E'));
    /// assert_eq!(constraints.letter_counts.get(&b'E'), Some(&LetterCount::AtLeast(2)));
    /// ```
    pub fn fold(&mut self, guess: &GuessResult) -> Result<(), EngineError> {
        let mut next = self.clone();
        next.apply(guess)?;
        next.settle_present_letters();
        next.validate()?;
        trace!("folded {guess}");
        *self = next;
        Ok(())
    }

    fn apply(&mut self, guess: &GuessResult) -> Result<(), EngineError> {
        let length = guess.word().len();
        match self.word_length {
            Some(expected) if expected != length => {
                return Err(InvalidInput::LengthMismatch {
                    expected,
                    actual: length,
                }
                .into());
            }
            _ => self.word_length = Some(length),
        }

        for (letter, occurrences) in guess.letter_details() {
            let tally = |status: LetterStatus| {
                occurrences.iter().filter(|o| o.status == status).count()
            };
            let correct = tally(LetterStatus::Correct);
            let present = tally(LetterStatus::Present);
            let absent = tally(LetterStatus::Absent);

            for occ in occurrences.iter().filter(|o| o.status == LetterStatus::Correct) {
                if let Some(&existing) = self.correct_letters.get(&occ.position)
                    && existing != letter
                {
                    return Err(Conflict::Position {
                        position: occ.position,
                        existing: char::from(existing),
                        asserted: char::from(letter),
                    }
                    .into());
                }
                self.correct_letters.insert(occ.position, letter);
            }

            for occ in occurrences.iter().filter(|o| o.status == LetterStatus::Present) {
                self.wrong_positions
                    .entry(letter)
                    .or_default()
                    .insert(occ.position);
            }

            let observed = correct + present;
            let count = if absent > 0 {
                // A grey copy pins the count exactly
                match self.letter_counts.get(&letter) {
                    Some(&LetterCount::AtLeast(min)) if min > observed => {
                        return Err(Conflict::Count {
                            letter: char::from(letter),
                            min,
                            exact: observed,
                        }
                        .into());
                    }
                    Some(&LetterCount::Exact(previous)) if previous != observed => {
                        return Err(Conflict::ExactMismatch {
                            letter: char::from(letter),
                            previous,
                            observed,
                        }
                        .into());
                    }
                    _ => {}
                }
                if observed == 0 {
                    self.absent_letters.insert(letter);
                }
                LetterCount::Exact(observed)
            } else {
                match self.letter_counts.get(&letter) {
                    Some(&LetterCount::Exact(exact)) if exact < observed => {
                        return Err(Conflict::Count {
                            letter: char::from(letter),
                            min: observed,
                            exact,
                        }
                        .into());
                    }
                    Some(&LetterCount::Exact(exact)) => LetterCount::Exact(exact),
                    Some(&LetterCount::AtLeast(min)) => LetterCount::AtLeast(min.max(observed)),
                    None => LetterCount::AtLeast(observed),
                }
            };
            self.letter_counts.insert(letter, count);
        }

        Ok(())
    }

    /// Recompute `present_letters` from the other fields
    ///
    /// A letter is present when it has been seen in a wrong position and more
    /// copies are required than are fixed. Deriving the set rather than
    /// growing it keeps the result independent of guess order.
    fn settle_present_letters(&mut self) {
        self.present_letters = self
            .wrong_positions
            .keys()
            .copied()
            .filter(|&letter| {
                let required = self
                    .letter_counts
                    .get(&letter)
                    .map_or(1, |count| count.lower_bound());
                required > self.fixed_count(letter)
            })
            .collect();
    }

    /// Cross-check the accumulated constraints against each other
    ///
    /// # Errors
    /// Returns the first [`Conflict`] found.
    pub fn validate(&self) -> Result<(), Conflict> {
        for (&position, &letter) in &self.correct_letters {
            if self
                .wrong_positions
                .get(&letter)
                .is_some_and(|wrong| wrong.contains(&position))
            {
                return Err(Conflict::Placement {
                    letter: char::from(letter),
                    position,
                });
            }
        }

        for (&letter, &count) in &self.letter_counts {
            let fixed = self.fixed_count(letter);
            if let LetterCount::Exact(exact) = count
                && fixed > exact
            {
                return Err(Conflict::FixedExceedsExact {
                    letter: char::from(letter),
                    fixed,
                    exact,
                });
            }
        }

        if let Some(length) = self.word_length {
            let required: usize = self.letter_counts.values().map(|c| c.lower_bound()).sum();
            if required > length {
                return Err(Conflict::Overfull { required, length });
            }
        }

        Ok(())
    }
}

impl fmt::Display for WordConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let length = self.word_length.unwrap_or_else(|| {
            self.correct_letters
                .keys()
                .next_back()
                .map_or(0, |&last| last + 1)
        });
        let slots: Vec<String> = (0..length)
            .map(|i| {
                self.correct_letters
                    .get(&i)
                    .map_or_else(|| "_".to_string(), |&l| char::from(l).to_string())
            })
            .collect();
        writeln!(f, "Pattern:  {}", slots.join(" "))?;

        let letters = |set: &BTreeSet<u8>| set.iter().map(|&l| char::from(l)).collect::<String>();
        writeln!(f, "Present:  {}", letters(&self.present_letters))?;
        writeln!(f, "Absent:   {}", letters(&self.absent_letters))?;

        let wrong: Vec<String> = self
            .wrong_positions
            .iter()
            .map(|(&l, positions)| {
                let positions: Vec<String> =
                    positions.iter().map(|p| (p + 1).to_string()).collect();
                format!("{}∉{{{}}}", char::from(l), positions.join(","))
            })
            .collect();
        writeln!(f, "Wrong:    {}", wrong.join(" "))?;

        let counts: Vec<String> = self
            .letter_counts
            .iter()
            .map(|(&l, count)| format!("{}{count}", char::from(l)))
            .collect();
        write!(f, "Counts:   {}", counts.join(" "))
    }
}

/// Build constraints from a full guess history
///
/// # Errors
/// Returns the first error reported by [`WordConstraints::fold`].
pub fn build_constraints<'a, I>(history: I) -> Result<WordConstraints, EngineError>
where
    I: IntoIterator<Item = &'a GuessResult>,
{
    let mut constraints = WordConstraints::new();
    for guess in history {
        constraints.fold(guess)?;
    }
    Ok(constraints)
}
