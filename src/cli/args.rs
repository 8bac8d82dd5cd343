//! Command line argument parsing for the lexica CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::StemmerKind;

/// Lexica - stem English text and test it against Zipf, Benford and Heap
#[derive(Parser, Debug, Clone)]
#[command(name = "lexica")]
#[command(about = "Lexical normalization and corpus statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexicaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Analysis configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXICA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stemmer to use, overriding the configuration file
    #[arg(short, long)]
    pub stemmer: Option<StemmerKind>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexicaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the stem of each word
    Stem(StemArgs),

    /// Normalize a corpus into its stem sequence
    Normalize(NormalizeArgs),

    /// Report term statistics for one or more corpora
    Analyze(AnalyzeArgs),

    /// Count occurrences of chosen words in a corpus
    Count(CountArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Show the word after each Porter step
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for normalizing a corpus
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Corpus file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the tokens to this file instead of printing them
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for corpus analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Corpus files, optionally named as FILE=NAME
    #[arg(value_name = "FILE[=NAME]", required = true, value_parser = parse_corpus)]
    pub corpora: Vec<CorpusSpec>,

    /// Number of top terms to report
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Only read this many lines of each corpus
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Skip the comparison table
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for counting target words
#[derive(Parser, Debug, Clone)]
pub struct CountArgs {
    /// Corpus file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Words to count (comma-separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub words: Vec<String>,
}

/// A corpus file and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSpec {
    pub name: String,
    pub path: PathBuf,
}

/// Parse `FILE` or `FILE=NAME`. Without a name the file stem is used.
pub fn parse_corpus(value: &str) -> std::result::Result<CorpusSpec, String> {
    let (path, name) = match value.rsplit_once('=') {
        Some((path, name)) if !path.is_empty() && !name.is_empty() => {
            (PathBuf::from(path), name.to_string())
        }
        Some(_) => return Err(format!("expected FILE=NAME, got '{value}'")),
        None => {
            let path = PathBuf::from(value);
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| value.to_string());
            (path, name)
        }
    };
    Ok(CorpusSpec { name, path })
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
