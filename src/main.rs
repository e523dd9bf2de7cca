//! Wordle Advisor - CLI
//!
//! Enter the feedback from a Wordle-style game and get ranked suggestions for
//! the next guess. Supports word lengths 3 to 11 with the embedded dictionary.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use wordle_advisor::{
    commands::{
        SolveConfig, analyze_word, filter_candidates, parse_history, recommend_next,
        resolve_word_length, run_benchmark, sample_targets, solve_word,
    },
    core::{MAX_WORD_LENGTH, Word},
    output::{
        print_advice, print_analysis_result, print_benchmark_result, print_filter_result,
        print_solve_result, print_statistics,
    },
    solver::{Advisor, RecommendConfig},
    wordlists::{WordList, WordSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Constraint-based word elimination and entropy-driven guess advice for Wordle-style games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    dictionary: DictionaryArgs,

    #[command(flatten)]
    tuning: TuningArgs,
}

#[derive(Args)]
struct DictionaryArgs {
    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Common-words file used with --common (default: embedded list)
    #[arg(long, global = true)]
    common_list: Option<String>,

    /// Draw possible answers from the common-words list only
    #[arg(long, global = true)]
    common: bool,
}

#[derive(Args)]
struct TuningArgs {
    /// Number of recommendations to show
    #[arg(long = "top", global = true, default_value = "5")]
    top_n: usize,

    /// Maximum dictionary words scored when many answers remain
    #[arg(long, global = true, default_value = "1000")]
    scan_budget: usize,

    /// Below this many answers, only answers are scored as guesses
    #[arg(long, global = true, default_value = "50")]
    pool_threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next guess from the feedback so far
    Recommend {
        /// Guesses as WORD:FEEDBACK, e.g. crane:AAPCA or crane:--yg-
        guesses: Vec<String>,

        /// Word length when no guesses are given yet
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// List the words still consistent with the feedback
    Filter {
        /// Guesses as WORD:FEEDBACK
        guesses: Vec<String>,

        /// Word length when no guesses are given yet
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Earlier guesses as WORD:FEEDBACK
        guesses: Vec<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the advisor on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length of the targets
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Seed for repeatable target selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show dictionary word counts per length
    Stats,
}

impl TuningArgs {
    fn config(&self, common_only: bool) -> RecommendConfig {
        RecommendConfig {
            top_n: self.top_n,
            small_pool_threshold: self.pool_threshold,
            scan_budget: self.scan_budget,
            common_only,
            ..RecommendConfig::default()
        }
    }
}

/// Load the dictionary from the -w/--common-list flags or the embedded lists
fn load_word_list(args: &DictionaryArgs) -> Result<WordList> {
    if args.wordlist.is_none() && args.common_list.is_none() {
        return Ok(WordList::embedded());
    }

    let embedded = WordList::embedded();
    let full = match &args.wordlist {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?
        }
        None => embedded_words(&embedded, false),
    };
    let common = match &args.common_list {
        Some(path) => {
            load_from_file(path).with_context(|| format!("Failed to read common list {path}"))?
        }
        None if args.wordlist.is_some() => full.clone(),
        None => embedded_words(&embedded, true),
    };

    let full_source = args.wordlist.as_deref().unwrap_or("embedded");
    let common_source = match (&args.common_list, &args.wordlist) {
        (Some(path), _) | (None, Some(path)) => path.as_str(),
        (None, None) => "embedded",
    };

    info!("loaded {} words ({} common)", full.len(), common.len());
    Ok(WordList::new(full, common).with_sources(full_source, common_source))
}

fn embedded_words(list: &WordList, common: bool) -> Vec<Word> {
    (1..=MAX_WORD_LENGTH)
        .flat_map(|length| {
            if common {
                list.common_words_of_length(length)
            } else {
                list.words_of_length(length)
            }
        })
        .cloned()
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let word_list = load_word_list(&cli.dictionary)?;
    let advisor = Advisor::new(&word_list, cli.tuning.config(cli.dictionary.common));

    match cli.command {
        Commands::Recommend { guesses, length } => {
            let history = parse_history(&guesses)?;
            let word_length = resolve_word_length(&history, length)?;
            let advice = recommend_next(&advisor, &history, word_length)?;
            print_advice(&history, &advice);
        }
        Commands::Filter { guesses, length } => {
            let history = parse_history(&guesses)?;
            let word_length = resolve_word_length(&history, length)?;
            let result = filter_candidates(&advisor, &history, word_length)?;
            print_filter_result(&history, &result);
        }
        Commands::Analyze { word, guesses } => {
            let history = parse_history(&guesses)?;
            let result = analyze_word(&word, &advisor, &history)?;
            print_analysis_result(&result);
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word), &advisor)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            let pool = if advisor.config().common_only {
                word_list.common_words_of_length(length)
            } else {
                word_list.words_of_length(length)
            };
            let targets = sample_targets(pool, count, seed);
            println!(
                "Running benchmark on {} random {length}-letter words...",
                targets.len()
            );
            let result = run_benchmark(&advisor, &targets, 6, true)?;
            print_benchmark_result(&result);
        }
        Commands::Stats => {
            print_statistics(&word_list);
        }
    }

    Ok(())
}
