//! word-ladder CLI
//!
//! Prints a shortest word ladder between two dictionary words.
//!
//! Exit status:
//! - `0`: a path was printed
//! - `1`: no path within the depth bound (a normal outcome)
//! - `2`: the word list or configuration could not be loaded

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use word_ladder::{Corpus, LadderConfig, Path, WordLadder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One word per line
    Text,
    /// A JSON object with the words and each step's relation
    Json,
}

#[derive(Parser)]
#[command(name = "word-ladder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shortest ladder between two words: one-letter changes and anagrams")]
#[command(long_about = "word-ladder - shortest transformation path between two words\n\n\
    Every step is a dictionary word that differs from the previous one by a\n\
    single letter, or is an anagram of it.\n\n\
    Examples:\n\
      word-ladder cold warm /usr/share/dict/words\n\
      word-ladder pot top words.txt --explain\n\
      word-ladder cat dog words.txt --max-distance 6 --format json")]
struct Cli {
    /// Word to start from
    start: String,

    /// Word to reach
    end: String,

    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Longest ladder, in steps, to search for [default: 10]
    #[arg(short, long, value_name = "N")]
    max_distance: Option<usize>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Annotate each step with its relation (text output)
    #[arg(short, long)]
    explain: bool,

    /// Log graph statistics after building
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Some(path)) => {
            print_path(&path, &cli);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> word_ladder::Result<Option<Path>> {
    let mut config = match &cli.config {
        Some(file) => LadderConfig::from_file(file)?,
        None => LadderConfig::default(),
    };
    if let Some(max_distance) = cli.max_distance {
        config = config.with_max_distance(max_distance);
        config.validate()?;
    }

    let started = Instant::now();
    let corpus = Corpus::load(&cli.dictionary)?;
    let ladder = WordLadder::new(&corpus, config);
    tracing::info!(
        words = corpus.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "graph ready"
    );
    if cli.stats {
        let stats = ladder.graph().stats();
        tracing::info!(
            nodes = stats.nodes,
            edges = stats.edges,
            length_buckets = stats.length_buckets,
            isolated = stats.isolated,
            "graph stats"
        );
    }

    let outcome = ladder.search(&cli.start, &cli.end);
    if outcome.is_found() {
        return Ok(outcome.into_path());
    }
    tracing::info!(outcome = ?outcome, "search finished without a path");
    println!(
        "Can't get from {} to {} within {} steps",
        cli.start,
        cli.end,
        ladder.config().max_distance
    );
    Ok(None)
}

fn print_path(path: &Path, cli: &Cli) {
    match cli.format {
        OutputFormat::Text if cli.explain => {
            println!("{}", path.start());
            for step in path.steps() {
                match step.relation {
                    Some(relation) => println!("{}  ({relation})", step.to),
                    None => println!("{}", step.to),
                }
            }
        }
        OutputFormat::Text => {
            for word in path.words() {
                println!("{word}");
            }
        }
        OutputFormat::Json => {
            let steps: Vec<_> = path.steps().collect();
            let doc = serde_json::json!({
                "start": path.start(),
                "end": path.end(),
                "length": path.len(),
                "words": path.words(),
                "steps": steps,
            });
            println!("{doc}");
        }
    }
}
