use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fuzzymatch_core::{init_logger, FuzzyMatcher, MatchConfig};

#[derive(Parser)]
#[command(name = "fuzzymatch")]
#[command(about = "Fuzzy word-level matching of titles and names")]
struct Args {
    /// Log every step of the word matcher (needs RUST_LOG=trace)
    #[arg(long, global = true)]
    trace: bool,

    /// Log per-word decisions and match summaries (needs RUST_LOG=debug)
    #[arg(long, global = true)]
    debug: bool,

    /// JSON configuration file; command-line options override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two strings and print `ratio,distance`
    Compare {
        str1: String,
        str2: String,
        /// Maximum edits between two matching words
        #[arg(short, long)]
        threshold: Option<usize>,
    },
    /// Match a query against candidate labels, one per line
    Search {
        query: String,
        /// File of candidate labels (stdin when omitted)
        #[arg(short, long)]
        candidates: Option<PathBuf>,
        /// Maximum edits between two matching words
        #[arg(short, long)]
        threshold: Option<usize>,
        /// Minimum ratio for a candidate to be printed
        #[arg(short, long)]
        min_confidence: Option<f64>,
    },
}

fn load_config(path: Option<&Path>, trace: bool, debug: bool) -> anyhow::Result<MatchConfig> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            MatchConfig::from_json(&json)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => MatchConfig::default(),
    };
    config.trace |= trace;
    config.debug |= debug;
    Ok(config)
}

/// Command-line options win over the config file
fn apply_overrides(
    mut config: MatchConfig,
    threshold: Option<usize>,
    min_confidence: Option<f64>,
) -> MatchConfig {
    if let Some(threshold) = threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(min_confidence) = min_confidence {
        config.min_confidence = min_confidence;
    }
    config
}

/// One candidate per non-blank line, surrounding whitespace dropped
fn parse_candidates(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_candidates(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read candidates {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read candidates from stdin")?;
            text
        }
    };
    Ok(parse_candidates(&text))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger();

    let config = load_config(args.config.as_deref(), args.trace, args.debug)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Compare {
            str1,
            str2,
            threshold,
        } => {
            let matcher = FuzzyMatcher::with_config(apply_overrides(config, *threshold, None))?;
            writeln!(out, "{}", matcher.compare(str1, str2))?;
        }
        Command::Search {
            query,
            candidates,
            threshold,
            min_confidence,
        } => {
            let config = apply_overrides(config, *threshold, *min_confidence);
            let matcher = FuzzyMatcher::with_config(config)?;
            let candidates = read_candidates(candidates.as_deref())?;

            log::info!("searching {} candidates for {query:?}", candidates.len());
            for m in matcher.match_all(query, &candidates) {
                writeln!(out, "{}", serde_json::to_string(&m)?)?;
            }
        }
    }

    Ok(())
}
