//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analyze::{BoardComparison, BoardSummary};
use crate::cli::args::{BoardwalkArgs, OutputFormat};
use crate::error::Result;
use crate::sentence::SentenceResolution;
use crate::table::EffortRecord;

/// Output effort records in the selected format.
pub fn output_records(records: &[EffortRecord], args: &BoardwalkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(records, args),
        OutputFormat::Human => {
            for record in records {
                let effort = record
                    .effort_score
                    .as_f64()
                    .map(|e| format!("{e:.2}"))
                    .unwrap_or_else(|| "?".to_string());
                let scanning = record
                    .scanning_effort_score
                    .as_f64()
                    .map(|e| format!("{e:.2}"))
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "{:<24} effort {:>6}  scanning {:>6}  hits {:>2}  {}",
                    record.word_phrase, effort, scanning, record.hits, record.path
                );
            }
            if args.verbosity() > 0 {
                println!();
                println!("{} records", records.len());
            }
            Ok(())
        }
    }
}

/// Output a sentence resolution in the selected format.
pub fn output_resolution(resolution: &SentenceResolution, args: &BoardwalkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(resolution, args),
        OutputFormat::Human => {
            println!("Sentence: '{}'", resolution.sentence);
            println!();
            for step in &resolution.steps {
                println!("{:?}: '{}'", step.kind, step.unit);
                println!("  - Path: {}", step.path);
                println!("  - Effort: {}", step.effort);
                if let Some(stats) = &step.alternatives {
                    println!(
                        "  - Alternatives: {} (hits {}..{})",
                        stats.count, stats.min_hits, stats.max_hits
                    );
                }
            }
            println!();
            println!(
                "Total effort for '{}' selection: {}",
                resolution.technique, resolution.total_effort
            );
            Ok(())
        }
    }
}

/// Output a board summary in the selected format.
pub fn output_summary(summary: &BoardSummary, args: &BoardwalkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary, args),
        OutputFormat::Human => {
            print_summary(summary);
            Ok(())
        }
    }
}

/// Output a board comparison in the selected format.
pub fn output_comparison(comparison: &BoardComparison, args: &BoardwalkArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(comparison, args),
        OutputFormat::Human => {
            println!("Board 1:");
            print_summary(&comparison.first);
            println!();
            println!("Board 2:");
            print_summary(&comparison.second);
            println!();
            println!("Shared words: {}", comparison.shared_words);
            println!("Exclusive to board 1: {}", comparison.exclusive_first);
            println!("Exclusive to board 2: {}", comparison.exclusive_second);
            Ok(())
        }
    }
}

fn print_summary(summary: &BoardSummary) {
    println!("Total words: {}", summary.total_words);
    println!("Unique words: {}", summary.unique_words);
    println!("Phrases: {}", summary.phrases);
    println!("Total pages: {}", summary.total_pages);
    println!("Total buttons: {}", summary.total_buttons);
    println!("Average hits: {}", summary.average_hits);
    println!("Easiest entries: {}", summary.top_easiest.join(", "));
}

/// Serialize any result as (optionally pretty) JSON.
fn output_json<T: Serialize + ?Sized>(result: &T, args: &BoardwalkArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
