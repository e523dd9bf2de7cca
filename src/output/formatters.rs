//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as letter tiles coloured by feedback
#[must_use]
pub fn colored_guess(guess: &GuessResult) -> String {
    guess
        .word()
        .text()
        .chars()
        .zip(guess.statuses())
        .map(|(letter, &status)| tile(letter, status).to_string())
        .collect()
}

fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Count of green and yellow tiles, e.g. "2 correct, 1 present"
#[must_use]
pub fn tile_summary(pattern: Pattern) -> String {
    format!(
        "{} correct, {} present",
        pattern.count_correct(),
        pattern.count_present()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the most informative split possible
///
/// `candidates` answers can carry at most log₂(candidates) bits.
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Join words for display, eliding past `limit`
#[must_use]
pub fn word_preview(words: &[&Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(|w| w.text()).collect();
    let mut preview = shown.join(", ");

    if words.len() > limit {
        preview.push_str(&format!(", … (+{} more)", words.len() - limit));
    }

    preview
}
