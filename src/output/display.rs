//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar, tile_summary, word_preview};
use crate::commands::{AnalysisResult, BenchmarkResult, FilterResult, SolveResult};
use crate::constraints::WordConstraints;
use crate::core::GuessResult;
use crate::solver::{Advice, EntropyResult};
use crate::wordlists::WordList;
use colored::Colorize;

const PREVIEW_LIMIT: usize = 20;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn print_history(history: &[GuessResult]) {
    if history.is_empty() {
        return;
    }

    println!("\n🧩 {}", "Guesses:".bright_cyan().bold());
    for guess in history {
        println!("   {}  {}", colored_guess(guess), guess.pattern().to_emoji());
    }
}

fn print_constraints(constraints: &WordConstraints) {
    if constraints.is_empty() {
        return;
    }

    println!("\n🔎 {}", "Constraints:".bright_cyan().bold());
    for line in constraints.to_string().lines() {
        println!("   {line}");
    }
}

fn print_recommendations(recommendations: &[EntropyResult], candidates: usize) {
    println!("\n💡 {}", "Recommendations:".bright_cyan().bold());

    for (rank, result) in recommendations.iter().enumerate() {
        let marker = if result.is_possible_answer {
            "●".green()
        } else {
            "○".bright_black()
        };
        println!(
            "   {}. {} {}  [{}] {}  expected left {}",
            rank + 1,
            marker,
            result.word.text().bright_yellow().bold(),
            entropy_bar(result.entropy, candidates, 20).green(),
            format!("{:.3} bits", result.entropy).bright_yellow(),
            format!("{:.1}", result.expected_remaining).cyan()
        );
    }
    println!("   {} could be the answer", "●".green());
}

/// Print the advice for the next guess
pub fn print_advice(history: &[GuessResult], advice: &Advice<'_>) {
    print_header("GUESS ADVICE");
    print_history(history);
    print_constraints(&advice.constraints);

    let remaining = advice.possible_answers.len();
    if advice.is_exhausted() {
        println!(
            "\n{}",
            "❌ No words fit these guesses. Check the feedback you entered."
                .red()
                .bold()
        );
        return;
    }

    println!(
        "\n📊 {} possible answer{}: {}",
        remaining.to_string().bright_yellow().bold(),
        if remaining == 1 { "" } else { "s" },
        word_preview(&advice.possible_answers, PREVIEW_LIMIT)
    );

    if remaining == 1 {
        println!(
            "{}",
            format!("✅ The answer is {}", advice.possible_answers[0])
                .green()
                .bold()
        );
        return;
    }

    print_recommendations(&advice.recommendations, remaining);
}

/// Print the words left after filtering
pub fn print_filter_result(history: &[GuessResult], result: &FilterResult<'_>) {
    print_header("MATCHING WORDS");
    print_history(history);
    print_constraints(&result.constraints);

    println!(
        "\n📊 {} of {} words match",
        result.words.len().to_string().bright_yellow().bold(),
        result.pool_size
    );
    for chunk in result.words.chunks(10) {
        let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    print_header(&format!("ENTROPY ANALYSIS: {}", result.score.word));

    if !result.known_word {
        println!("\n{}", "⚠️  Not in the dictionary".yellow());
    }

    let bar = entropy_bar(result.score.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.score.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.score.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.score.max_partition()
    );
    println!(
        "   Patterns:    {} distinct",
        result.score.pattern_distribution.len()
    );

    let mut buckets: Vec<_> = result.score.pattern_distribution.iter().collect();
    buckets.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.value().cmp(&b.0.value())));

    println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
    for (pattern, count) in buckets.into_iter().take(8) {
        println!("   {}  {pattern}  {count:4}", pattern.to_emoji());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {}: {} {}", turn, step.word, step.pattern.to_emoji());

        if verbose {
            println!("  Tiles:      {}", tile_summary(step.pattern));
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        reduction.log2(),
                        reduction
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if result.total_words > 0 {
        println!(
            "   Solved:           {} {}",
            result.solved,
            format!(
                "({:.1}%)",
                result.solved as f64 / result.total_words as f64 * 100.0
            )
            .green()
        );
    }
    if result.failed > 0 {
        println!(
            "   Failed:           {} {}",
            result.failed,
            result.failed_words.join(", ").red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, guesses) in result.hardest_words.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.yellow());
        }
    }

    println!("\n🎯 {}", "First guesses:".bright_cyan().bold());
    let mut first: Vec<(&String, &usize)> = result.first_guesses.iter().collect();
    first.sort_by_key(|(_, count)| std::cmp::Reverse(**count));
    for (word, count) in first.into_iter().take(5) {
        println!("   {word}: {count} times");
    }
}

/// Print dictionary word counts per length
pub fn print_statistics(list: &WordList) {
    print_header("DICTIONARY");

    for metadata in [list.metadata(false), list.metadata(true)] {
        println!(
            "\n📚 {} ({}): {} words",
            metadata.description.bright_cyan().bold(),
            metadata.source,
            metadata.total_words
        );
    }

    let statistics = list.statistics();
    let largest = statistics.values().copied().max().unwrap_or(0);
    for (&length, &count) in &statistics {
        let bar = super::formatters::create_progress_bar(count as f64, largest as f64, 30);
        println!("   {length:2} letters: {} {count:5}", bar.green());
    }
}
