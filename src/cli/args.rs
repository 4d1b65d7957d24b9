use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, ParserMode};

#[derive(Parser)]
#[command(
    name = "newscheck",
    version,
    about = "Heuristic fake news screening for CSV datasets"
)]
#[command(after_help = "\
CSV FORMAT:
  The first row must be a header with a column whose name contains \"title\"
  and one whose name contains \"text\" (case-insensitive).

EXAMPLES:
  newscheck classify articles.csv             # Summary and first page
  newscheck classify articles.csv --page 3    # Third page of results
  newscheck export articles.csv --out reports # Dated CSV inside reports/
  newscheck score \"BREAKING: you won't believe this!!\"")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every article in a CSV file and show one page of results
    Classify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Page of results to show (1-based)
        #[arg(long, short, default_value = "1")]
        page: usize,
        /// Show a single result in full instead of a page
        #[arg(long, value_name = "ID")]
        detail: Option<usize>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Classify a CSV file and write the results as CSV
    Export {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output file, or a directory to hold the dated default name
        #[arg(long, short, value_name = "PATH")]
        out: Option<PathBuf>,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Score a single piece of text and explain the verdict
    Score {
        #[arg(required = true, value_name = "TEXT")]
        text: Vec<String>,
        /// Emit JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Fix the confidence jitter
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options shared by commands that process a file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Fix the confidence jitter for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// Use a quoting-aware CSV reader instead of the plain comma splitter
    #[arg(long)]
    pub strict_csv: bool,
    /// Skip the simulated processing delay
    #[arg(long)]
    pub no_delay: bool,
}

impl RunArgs {
    /// Overrides file-backed settings with command-line flags.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.processing.seed = Some(seed);
        }
        if self.strict_csv {
            config.ingest.parser = ParserMode::Strict;
        }
        if self.no_delay {
            config.processing.simulate_latency = false;
        }
    }
}
