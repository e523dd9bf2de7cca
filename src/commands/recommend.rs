//! Recommend command
//!
//! Parses guesses typed on the command line and asks the advisor for the next
//! guess.

use crate::core::GuessResult;
use crate::solver::{Advice, Advisor};
use crate::wordlists::WordSource;
use anyhow::{Context, Result, bail};

/// Word length used when neither a guess nor `--length` gives one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Parse one `WORD:FEEDBACK` argument
///
/// Feedback accepts `C`/`P`/`A`, `G`/`Y`/`-`, or emoji squares.
///
/// # Errors
///
/// Returns an error if the separator is missing, the word is invalid, or the
/// feedback does not match the word.
///
/// # Examples
/// ```
/// use wordle_advisor::commands::parse_guess;
///
/// let guess = parse_guess("crane:AAPCA").unwrap();
/// assert_eq!(guess.to_string(), "CRANE AAPCA");
/// assert!(parse_guess("crane").is_err());
/// ```
pub fn parse_guess(arg: &str) -> Result<GuessResult> {
    let Some((word, feedback)) = arg.split_once(':') else {
        bail!("Expected WORD:FEEDBACK, got '{arg}'");
    };

    GuessResult::parse(word.trim(), feedback.trim())
        .with_context(|| format!("Invalid guess '{arg}'"))
}

/// Parse every guess argument in order
///
/// # Errors
///
/// Returns the first parse failure.
pub fn parse_history<S: AsRef<str>>(args: &[S]) -> Result<Vec<GuessResult>> {
    args.iter().map(|arg| parse_guess(arg.as_ref())).collect()
}

/// Pick the word length from the first guess, the requested length, or the
/// default
///
/// # Errors
///
/// Returns an error if a requested length disagrees with the guesses.
pub fn resolve_word_length(history: &[GuessResult], requested: Option<usize>) -> Result<usize> {
    match (history.first(), requested) {
        (Some(guess), Some(length)) if guess.word().len() != length => bail!(
            "Guess '{}' has {} letters but --length is {length}",
            guess.word(),
            guess.word().len()
        ),
        (Some(guess), _) => Ok(guess.word().len()),
        (None, Some(length)) => Ok(length),
        (None, None) => Ok(DEFAULT_WORD_LENGTH),
    }
}

/// Advise on the next guess after `history`
///
/// # Errors
///
/// Returns an error if the history is inconsistent or mixes word lengths.
pub fn recommend_next<'a, S: WordSource + ?Sized>(
    advisor: &Advisor<'a, S>,
    history: &[GuessResult],
    word_length: usize,
) -> Result<Advice<'a>> {
    advisor
        .advise(history, word_length)
        .context("Could not derive a recommendation from these guesses")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::solver::RecommendConfig;
    use crate::wordlists::WordList;

    #[test]
    fn parses_letter_and_emoji_feedback() {
        let letters = parse_guess("sleep:APPCA").unwrap();
        let emoji = parse_guess("SLEEP:⬜🟨🟨🟩⬜").unwrap();
        let wordle = parse_guess(" sleep : -yyg- ").unwrap();

        assert_eq!(letters, emoji);
        assert_eq!(letters, wordle);
        assert_eq!(letters.statuses()[3], LetterStatus::Correct);
    }

    #[test]
    fn rejects_malformed_guesses() {
        assert!(parse_guess("sleep").is_err());
        assert!(parse_guess("sleep:APP").is_err());
        assert!(parse_guess("sl33p:AAAAA").is_err());
        assert!(parse_guess("sleep:AXAAA").is_err());
    }

    #[test]
    fn history_parse_stops_at_first_error() {
        let ok = parse_history(&["crane:AAAAA", "sleep:APPCA"]).unwrap();
        assert_eq!(ok.len(), 2);

        assert!(parse_history(&["crane:AAAAA", "oops"]).is_err());
    }

    #[test]
    fn word_length_resolution() {
        let history = parse_history(&["crane:AAAAA"]).unwrap();

        assert_eq!(resolve_word_length(&history, None).unwrap(), 5);
        assert_eq!(resolve_word_length(&history, Some(5)).unwrap(), 5);
        assert!(resolve_word_length(&history, Some(6)).is_err());
        assert_eq!(resolve_word_length(&[], Some(7)).unwrap(), 7);
        assert_eq!(resolve_word_length(&[], None).unwrap(), DEFAULT_WORD_LENGTH);
    }

    #[test]
    fn recommends_against_embedded_dictionary() {
        let list = WordList::embedded();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let history = parse_history(&["sleep:APPCA"]).unwrap();
        let advice = recommend_next(&advisor, &history, 5).unwrap();

        assert!(!advice.recommendations.is_empty());
        assert!(advice.possible_answers.iter().any(|w| w.text() == "LEVEL"));
    }

    #[test]
    fn conflicting_history_is_an_error() {
        let list = WordList::embedded();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let history = parse_history(&["crane:CAAAA", "slate:CAAAA"]).unwrap();
        assert!(recommend_next(&advisor, &history, 5).is_err());
    }
}
