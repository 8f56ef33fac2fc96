//! Command line argument parsing for the Boardwalk CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::table::Technique;

/// Boardwalk - selection-effort analysis for AAC grid boards
#[derive(Parser, Debug, Clone)]
#[command(name = "boardwalk")]
#[command(about = "A navigation-aware selection-effort engine for AAC grid boards")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BoardwalkArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BoardwalkArgs {
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

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Selection technique flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechniqueArg {
    Direct,
    Scanning,
}

impl From<TechniqueArg> for Technique {
    fn from(value: TechniqueArg) -> Self {
        match value {
            TechniqueArg::Direct => Technique::Direct,
            TechniqueArg::Scanning => Technique::Scanning,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score every reachable button of a board into effort records
    Score(ScoreArgs),

    /// Summarize a board's vocabulary and effort
    Summary(SummaryArgs),

    /// Compare two boards
    Compare(CompareArgs),

    /// Resolve a sentence against an effort table
    Sentence(SentenceArgs),
}

/// Arguments for scoring a board
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Board description file (JSON)
    #[arg(value_name = "BOARD_FILE")]
    pub board: PathBuf,

    /// Collapse duplicate words/phrases, keeping the first occurrence
    #[arg(long)]
    pub dedup: bool,
}

/// Arguments for summarizing a board
#[derive(Parser, Debug, Clone)]
pub struct SummaryArgs {
    /// Board description file (JSON)
    #[arg(value_name = "BOARD_FILE")]
    pub board: PathBuf,
}

/// Arguments for comparing two boards
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// First board description file (JSON)
    #[arg(value_name = "BOARD_FILE_1")]
    pub first: PathBuf,

    /// Second board description file (JSON)
    #[arg(value_name = "BOARD_FILE_2")]
    pub second: PathBuf,
}

/// Arguments for resolving a sentence
#[derive(Parser, Debug, Clone)]
pub struct SentenceArgs {
    /// Effort table file (JSON array of records)
    #[arg(value_name = "TABLE_FILE")]
    pub table: PathBuf,

    /// Phrase, sentence, or word to analyze
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    /// Input technique driving the score column
    #[arg(short, long, value_enum, default_value_t = TechniqueArg::Direct)]
    pub technique: TechniqueArg,

    /// Spelling keyboard page used for unmodeled words
    #[arg(long)]
    pub spelling_page: Option<String>,

    /// Override the fuzzy phrase-match acceptance threshold
    #[arg(long)]
    pub fuzzy_threshold: Option<f64>,
}
