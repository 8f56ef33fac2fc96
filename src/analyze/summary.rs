//! Vocabulary summaries and board-to-board comparison.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::effort::round2;
use crate::table::EffortRecord;

/// How many of the lowest-effort entries a summary lists.
pub const TOP_EASIEST: usize = 20;

/// Aggregate statistics over one board's effort records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Total word occurrences across all entries.
    pub total_words: usize,
    /// Distinct words (case-insensitive).
    pub unique_words: usize,
    /// Entries whose text is a multi-word phrase.
    pub phrases: usize,
    /// Distinct pages contributing entries.
    pub total_pages: usize,
    /// Total scored buttons.
    pub total_buttons: usize,
    /// Mean hit count per button, rounded to two decimals.
    pub average_hits: f64,
    /// The lowest-effort words/phrases, easiest first.
    pub top_easiest: Vec<String>,
}

/// Summary of two boards plus their vocabulary overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardComparison {
    pub first: BoardSummary,
    pub second: BoardSummary,
    /// Words present in both vocabularies.
    pub shared_words: usize,
    /// Words only in the first board.
    pub exclusive_first: usize,
    /// Words only in the second board.
    pub exclusive_second: usize,
}

fn word_counts(records: &[EffortRecord]) -> AHashMap<String, usize> {
    let mut counts = AHashMap::new();
    for record in records {
        for word in record.word_phrase.split_whitespace() {
            *counts.entry(word.to_lowercase()).or_insert(0) += 1;
        }
    }
    counts
}

/// Summarize a board's effort records.
pub fn summarize(records: &[EffortRecord]) -> BoardSummary {
    let counts = word_counts(records);
    let phrases = records
        .iter()
        .filter(|r| r.word_phrase.split_whitespace().count() > 1)
        .count();

    let pages: AHashSet<&str> = records
        .iter()
        .map(|r| r.grid_name.as_deref().unwrap_or("Unknown"))
        .collect();

    let total_hits: usize = records.iter().map(|r| r.hits).sum();
    let average_hits = if records.is_empty() {
        0.0
    } else {
        round2(total_hits as f64 / records.len() as f64)
    };

    let mut by_effort: Vec<&EffortRecord> = records.iter().collect();
    by_effort.sort_by(|a, b| {
        let ea = a.effort_score.as_f64().unwrap_or(f64::INFINITY);
        let eb = b.effort_score.as_f64().unwrap_or(f64::INFINITY);
        ea.total_cmp(&eb)
    });
    let top_easiest = by_effort
        .iter()
        .take(TOP_EASIEST)
        .map(|r| r.word_phrase.clone())
        .collect();

    BoardSummary {
        total_words: counts.values().sum(),
        unique_words: counts.len(),
        phrases,
        total_pages: pages.len(),
        total_buttons: records.len(),
        average_hits,
        top_easiest,
    }
}

/// Compare two boards' effort records.
pub fn compare(first: &[EffortRecord], second: &[EffortRecord]) -> BoardComparison {
    let words_first: AHashSet<String> = word_counts(first).into_keys().collect();
    let words_second: AHashSet<String> = word_counts(second).into_keys().collect();
    let shared_words = words_first.intersection(&words_second).count();

    BoardComparison {
        first: summarize(first),
        second: summarize(second),
        shared_words,
        exclusive_first: words_first.len() - shared_words,
        exclusive_second: words_second.len() - shared_words,
    }
}

/// Records of `first` whose word/phrase key does not occur in `second`.
pub fn exclusive_records<'a>(
    first: &'a [EffortRecord],
    second: &[EffortRecord],
) -> Vec<&'a EffortRecord> {
    let keys: AHashSet<String> = second.iter().map(|r| r.key()).collect();
    first.iter().filter(|r| !keys.contains(&r.key())).collect()
}
