use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use serde_json::json;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trie_suggest::{FileFormat, SuggestConfig, Wordlist};

/// Look up words and prefix suggestions in a word list.
#[derive(StructOpt)]
struct Cli {
    /// The word list, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Column delimiter, for files with more than one field per line
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Which delimited column holds the word
    #[structopt(long, default_value = "0")]
    column: usize,
    /// Store lines as they are instead of lowercasing and stripping them
    #[structopt(long)]
    raw: bool,
    /// JSON file with suggestion settings
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[structopt(long)]
    json: bool,
    #[structopt(short, long)]
    verbose: bool,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Is the word in the list?
    Contains { word: String },
    /// Every word starting with the prefix
    Suggest { prefix: String },
    /// The closest suggestion for the prefix
    Best {
        prefix: String,
        /// Minimum similarity in percent
        #[structopt(short, long)]
        threshold: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => SuggestConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SuggestConfig::default(),
    };

    let format = match args.delimiter {
        Some(d) => FileFormat::builder().delimiter(d).word_column(args.column).normalize(!args.raw).build(),
        None => FileFormat::builder().normalize(!args.raw).build(),
    };
    let wl = Wordlist::from_file(&args.path, format)
        .with_context(|| format!("reading {}", args.path.display()))?;

    let start = Instant::now();
    match args.cmd {
        Command::Contains { word } => {
            let present = wl.contains(&word)?;
            if args.json {
                println!("{}", json!({ "word": word, "present": present }));
            } else {
                println!("{}", present);
            }
        }
        Command::Suggest { prefix } => {
            let suggestions = wl.suggest(&prefix, &config)?;
            if args.json {
                println!("{}", json!({ "prefix": prefix, "suggestions": suggestions }));
            } else {
                suggestions.iter().for_each(|x| println!("{}", x));
            }
        }
        Command::Best { prefix, threshold } => {
            let config = SuggestConfig {
                threshold_percent: threshold.unwrap_or(config.threshold_percent),
                ..config
            };
            let best = wl.best_match(&prefix, &config)?;
            if args.json {
                println!("{}", json!({
                    "prefix": prefix,
                    "threshold_percent": config.threshold_percent,
                    "best_match": best,
                }));
            } else {
                println!("{}", best);
            }
        }
    }
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "query done");
    Ok(())
}
