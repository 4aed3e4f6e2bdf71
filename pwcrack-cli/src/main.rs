use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use pwcrack_cli::{Error, Summary, load_dictionary, load_targets, write_results};
use pwcrack_engine::{EngineConfig, Pipeline, StrategyKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwcrack")]
#[command(about = "Recover passwords behind SHA-1 digests using layered candidate strategies")]
struct Args {
    /// Target file: one `<identifier> <sha1-hex>` record per line
    #[arg(short, long, default_value = "passwords.txt")]
    passwords: PathBuf,

    /// Wordlist, one word per line, most common words first
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Where recovered `<identifier> <password>` lines are written
    #[arg(short, long, default_value = "cracked_passwords.txt")]
    output: PathBuf,

    /// Longest all-digit password to try [default: 8]
    #[arg(long)]
    max_digit_len: Option<u32>,

    /// Numbers 0..N are appended to and prepended to words [default: 10000]
    #[arg(long)]
    max_append: Option<u64>,

    /// First year added to the word+number list
    #[arg(long, default_value_t = 1980)]
    common_years_from: u32,

    /// Last year added to the word+number list
    #[arg(long, default_value_t = 2024)]
    common_years_to: u32,

    /// First year of the date strategy [default: 1950]
    #[arg(long)]
    date_years_from: Option<u32>,

    /// Last year of the date strategy [default: 2024]
    #[arg(long)]
    date_years_to: Option<u32>,

    /// Comma separated separators; an empty item means "no separator" [default: ",.,_,-"]
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    separators: Option<Vec<String>>,

    /// Leading dictionary words used for word pairs [default: 1000]
    #[arg(long)]
    pair_word_limit: Option<usize>,

    /// Leading dictionary words used for leetspeak [default: 500]
    #[arg(long)]
    leet_word_limit: Option<usize>,

    /// Worker threads for the combination strategies (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    workers: usize,

    /// Comma separated strategies to run, in order
    /// (pure-digits, common-dates, dictionary-words, transformations, word-digit, leetspeak, word-pairs)
    #[arg(long, value_delimiter = ',')]
    strategies: Option<Vec<StrategyKind>>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            max_digit_len: self.max_digit_len.unwrap_or(defaults.max_digit_len),
            max_append: self.max_append.unwrap_or(defaults.max_append),
            common_years: (self.common_years_from..=self.common_years_to).collect(),
            date_years: self.date_years_from.unwrap_or(*defaults.date_years.start())
                ..=self.date_years_to.unwrap_or(*defaults.date_years.end()),
            separators: self.separators.clone().unwrap_or(defaults.separators),
            pair_word_limit: self.pair_word_limit.unwrap_or(defaults.pair_word_limit),
            leet_word_limit: self.leet_word_limit.unwrap_or(defaults.leet_word_limit),
            workers: self.workers,
            strategies: self.strategies.clone().unwrap_or(defaults.strategies),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let started = Instant::now();

    let targets = load_targets(&args.passwords)?;
    let dictionary = load_dictionary(&args.dictionary)?;
    let loaded = targets.len();

    let pipeline = Pipeline::new(args.engine_config())?;
    info!(
        workers = pipeline.worker_count(),
        strategies = pipeline.config().strategies.len(),
        "starting recovery"
    );

    let outcome = pipeline.run(targets, &dictionary)?;

    let summary = Summary {
        elapsed: started.elapsed(),
        loaded,
        cracked: outcome.cracked.len(),
        remaining: outcome.remaining.len(),
    };
    println!("\n{summary}");

    if outcome.cracked.is_empty() {
        println!("\nNo passwords were cracked.");
        return Ok(());
    }

    println!("\n--- Cracked Passwords ---");
    for (identifier, plaintext) in outcome.cracked.sorted() {
        println!("User {identifier}: {plaintext}");
    }

    write_results(&args.output, &outcome.cracked)?;
    info!(path = %args.output.display(), "results saved");

    Ok(())
}
