//! Command implementations for the Boardwalk CLI.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::analyze::{compare, dedup_records, score_board, summarize};
use crate::board::Board;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::navigation::NavigationGraph;
use crate::sentence::{ResolverConfig, SentenceResolver};
use crate::table::{EffortRecord, EffortTable};

/// Execute a CLI command.
pub fn execute_command(args: BoardwalkArgs) -> Result<()> {
    match &args.command {
        Command::Score(score_args) => score(score_args.clone(), &args),
        Command::Summary(summary_args) => summary(summary_args.clone(), &args),
        Command::Compare(compare_args) => compare_boards(compare_args.clone(), &args),
        Command::Sentence(sentence_args) => sentence(sentence_args.clone(), &args),
    }
}

/// Load and validate a board description from a JSON file.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board> {
    let file = File::open(path)?;
    let board: Board = serde_json::from_reader(BufReader::new(file))?;
    board.validate()?;
    Ok(board)
}

/// Load effort records from a JSON file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<EffortRecord>> {
    let file = File::open(path)?;
    let records: Vec<EffortRecord> = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

fn score_records(board: &Board) -> Vec<EffortRecord> {
    let graph = NavigationGraph::from_board(board);
    score_board(board, &graph, &Default::default())
}

/// Score a board into effort records.
fn score(args: ScoreArgs, cli_args: &BoardwalkArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Scoring board: {}", args.board.display());
    }

    let board = load_board(&args.board)?;
    let mut records = score_records(&board);
    if args.dedup {
        records = dedup_records(records);
    }

    output_records(&records, cli_args)
}

/// Summarize a board.
fn summary(args: SummaryArgs, cli_args: &BoardwalkArgs) -> Result<()> {
    let board = load_board(&args.board)?;
    let records = score_records(&board);
    output_summary(&summarize(&records), cli_args)
}

/// Compare two boards.
fn compare_boards(args: CompareArgs, cli_args: &BoardwalkArgs) -> Result<()> {
    let first = load_board(&args.first)?;
    let second = load_board(&args.second)?;
    let comparison = compare(&score_records(&first), &score_records(&second));
    output_comparison(&comparison, cli_args)
}

/// Resolve a sentence against an effort table.
fn sentence(args: SentenceArgs, cli_args: &BoardwalkArgs) -> Result<()> {
    let table = EffortTable::from_records(load_records(&args.table)?);
    if cli_args.verbosity() > 1 {
        println!("Loaded {} table entries", table.len());
    }

    let mut config = ResolverConfig {
        spelling_page: args.spelling_page.clone(),
        ..Default::default()
    };
    if let Some(threshold) = args.fuzzy_threshold {
        config.fuzzy_threshold = threshold;
    }

    let resolver = SentenceResolver::with_config(&table, config);
    let resolution = resolver.resolve(&args.sentence, args.technique.into());
    output_resolution(&resolution, cli_args)
}
