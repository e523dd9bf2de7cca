//! Recommendation orchestrator
//!
//! Composes constraint derivation, dictionary filtering and entropy ranking over
//! an injected word source.

use super::config::RecommendConfig;
use super::entropy::EntropyResult;
use super::recommend::recommend;
use crate::constraints::{WordConstraints, build_constraints, filter_words};
use crate::core::{EngineError, GuessResult, InvalidInput, Word};
use crate::wordlists::WordSource;
use log::{debug, warn};

/// Outcome of one advice request
#[derive(Debug, Clone)]
pub struct Advice<'a> {
    /// Constraints derived from the history
    pub constraints: WordConstraints,
    /// Answers still consistent with the history, in dictionary order
    pub possible_answers: Vec<&'a Word>,
    /// Ranked guesses, best first
    pub recommendations: Vec<EntropyResult>,
}

impl Advice<'_> {
    /// Whether the history ruled out every word
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.possible_answers.is_empty()
    }
}

/// Guess advisor over a dictionary
///
/// Holds no game state: every call rebuilds constraints from the history it is
/// given.
pub struct Advisor<'a, S: WordSource + ?Sized> {
    source: &'a S,
    config: RecommendConfig,
}

impl<'a, S: WordSource + ?Sized> Advisor<'a, S> {
    /// Create an advisor reading words from `source`
    pub const fn new(source: &'a S, config: RecommendConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub const fn config(&self) -> &RecommendConfig {
        &self.config
    }

    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Words of `word_length` that answers are drawn from
    fn answer_pool(&self, word_length: usize) -> &'a [Word] {
        if self.config.common_only {
            self.source.common_words_of_length(word_length)
        } else {
            self.source.words_of_length(word_length)
        }
    }

    /// Derive constraints and the possible answers without ranking guesses
    ///
    /// # Errors
    /// [`InvalidInput::LengthMismatch`] if a guess is not `word_length` letters
    /// long, or a conflict from folding the history.
    pub fn possible_answers(
        &self,
        history: &[GuessResult],
        word_length: usize,
    ) -> Result<(WordConstraints, Vec<&'a Word>), EngineError> {
        if let Some(guess) = history.iter().find(|g| g.word().len() != word_length) {
            return Err(InvalidInput::LengthMismatch {
                expected: word_length,
                actual: guess.word().len(),
            }
            .into());
        }

        let constraints = build_constraints(history)?;
        let answers = filter_words(self.answer_pool(word_length), &constraints);

        debug!(
            "{} guesses leave {} possible answers of length {word_length}",
            history.len(),
            answers.len()
        );

        Ok((constraints, answers))
    }

    /// Advise on the next guess given the history so far
    ///
    /// The first guess is the one made with an empty history. Zero possible
    /// answers is reported as an exhausted [`Advice`], not an error.
    ///
    /// # Errors
    /// Same as [`Advisor::possible_answers`].
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::GuessResult;
    /// use wordle_advisor::solver::{Advisor, RecommendConfig};
    /// use wordle_advisor::wordlists::WordList;
    ///
    /// let list = WordList::embedded();
    /// let advisor = Advisor::new(&list, RecommendConfig::default());
    ///
    /// let history = [GuessResult::parse("sleep", "APPCA").unwrap()];
    /// let advice = advisor.advise(&history, 5).unwrap();
    ///
    /// assert!(advice.possible_answers.iter().any(|w| w.text() == "LEVEL"));
    /// assert!(!advice.recommendations.is_empty());
    /// ```
    pub fn advise(
        &self,
        history: &[GuessResult],
        word_length: usize,
    ) -> Result<Advice<'a>, EngineError> {
        let (constraints, possible_answers) = self.possible_answers(history, word_length)?;

        if possible_answers.is_empty() {
            warn!("no {word_length}-letter words fit the {} guesses so far", history.len());
            return Ok(Advice {
                constraints,
                possible_answers,
                recommendations: Vec::new(),
            });
        }

        let recommendations = recommend(
            self.source.words_of_length(word_length),
            &possible_answers,
            history.is_empty(),
            &self.config,
        )?;

        Ok(Advice {
            constraints,
            possible_answers,
            recommendations,
        })
    }
}
