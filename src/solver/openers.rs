//! Precomputed opening guesses
//!
//! Scoring the whole dictionary for the first guess is wasted work: the answer
//! pool is the same every game, so a fixed shortlist per word length is used.

/// Opening words for `length`, best first
///
/// Lengths without a shortlist give an empty slice.
///
/// # Examples
/// ```
/// use wordle_advisor::solver::opening_words;
///
/// assert_eq!(opening_words(5), ["TEARS", "RATES", "RAISE"]);
/// assert!(opening_words(2).is_empty());
/// ```
#[must_use]
pub const fn opening_words(length: usize) -> &'static [&'static str] {
    match length {
        3 => &["SEA", "EAT", "TEA"],
        4 => &["SALE", "TALE", "SEAT"],
        5 => &["TEARS", "RATES", "RAISE"],
        6 => &["RAISED", "MASTER", "SECTOR"],
        7 => &["PARTIES", "DETAILS", "CERTAIN"],
        8 => &["ARTICLES", "DOCTRINE", "REACTION"],
        9 => &["CENTURIES", "REACTIONS", "COUNTRIES"],
        10 => &["CATEGORIES", "SECURITIES", "DIRECTIONS"],
        11 => &["DESCRIPTION", "DESTRUCTION", "INSTRUCTION"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn every_opener_matches_its_length() {
        for length in 3..=11 {
            let words = opening_words(length);
            assert_eq!(words.len(), 3, "length {length}");
            for &text in words {
                let word = Word::new(text).unwrap();
                assert_eq!(word.len(), length);
            }
        }
    }

    #[test]
    fn unknown_lengths_have_no_openers() {
        assert!(opening_words(0).is_empty());
        assert!(opening_words(12).is_empty());
        assert!(opening_words(15).is_empty());
    }
}
