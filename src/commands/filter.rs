//! Filter command
//!
//! Lists the dictionary words still consistent with a guess history, without
//! ranking guesses.

use crate::constraints::WordConstraints;
use crate::core::{GuessResult, Word};
use crate::solver::Advisor;
use crate::wordlists::WordSource;
use anyhow::{Context, Result};

/// Words left after applying a history
pub struct FilterResult<'a> {
    pub constraints: WordConstraints,
    pub words: Vec<&'a Word>,
    /// Size of the answer pool before filtering
    pub pool_size: usize,
}

/// Filter the advisor's answer pool by `history`
///
/// # Errors
///
/// Returns an error if the history is inconsistent or mixes word lengths.
pub fn filter_candidates<'a, S: WordSource + ?Sized>(
    advisor: &Advisor<'a, S>,
    history: &[GuessResult],
    word_length: usize,
) -> Result<FilterResult<'a>> {
    let (_, pool) = advisor.possible_answers(&[], word_length)?;
    let (constraints, words) = advisor
        .possible_answers(history, word_length)
        .context("Could not filter words with these guesses")?;

    Ok(FilterResult {
        constraints,
        words,
        pool_size: pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_history;
    use crate::solver::RecommendConfig;
    use crate::wordlists::WordList;

    fn list() -> WordList {
        let full = ["level", "lever", "leave", "spell", "hello"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        WordList::new(full, Vec::new())
    }

    #[test]
    fn filters_by_history() {
        let list = list();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let history = parse_history(&["sleep:APPCA"]).unwrap();
        let result = filter_candidates(&advisor, &history, 5).unwrap();

        let texts: Vec<&str> = result.words.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["LEVEL", "LEVER"]);
        assert_eq!(result.pool_size, 5);
        assert_eq!(result.constraints.correct_letters.get(&3), Some(&b'E'));
    }

    #[test]
    fn empty_history_keeps_whole_pool() {
        let list = list();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let result = filter_candidates(&advisor, &[], 5).unwrap();
        assert_eq!(result.words.len(), 5);
        assert!(result.constraints.is_empty());
    }

    #[test]
    fn wrong_length_history_is_an_error() {
        let list = list();
        let advisor = Advisor::new(&list, RecommendConfig::default());

        let history = parse_history(&["sleep:APPCA"]).unwrap();
        assert!(filter_candidates(&advisor, &history, 6).is_err());
    }
}
