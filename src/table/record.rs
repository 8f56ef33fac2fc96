//! Effort-table records.

use serde::{Deserialize, Serialize};

/// The input technique whose score column drives a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technique {
    /// Direct pointing/touching.
    Direct,
    /// Row/column scanning with a single switch.
    Scanning,
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Technique::Direct => write!(f, "direct"),
            Technique::Scanning => write!(f, "scanning"),
        }
    }
}

/// A score field as supplied by a collaborator.
///
/// Effort tables travel through CSV, so a score cell may arrive as text that
/// is not a number. Malformed values stay representable and are degraded to
/// zero-effort error markers at resolution time instead of aborting a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    /// Interpret the field as a number, if possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Number(n) => Some(*n),
            ScoreValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Whether the field cannot be interpreted as a number.
    pub fn is_malformed(&self) -> bool {
        self.as_f64().is_none()
    }
}

impl Default for ScoreValue {
    fn default() -> Self {
        ScoreValue::Number(0.0)
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Number(value)
    }
}

fn default_count() -> usize {
    1
}

/// One row of the word/phrase effort table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortRecord {
    /// The word or phrase produced by the button (natural key).
    pub word_phrase: String,

    /// Navigation path description, e.g. "Home -> Food -> Drinks".
    pub path: String,

    /// Direct-selection effort score.
    pub effort_score: ScoreValue,

    /// Row/column scanning effort score.
    pub scanning_effort_score: ScoreValue,

    /// Block scanning effort score, when block data was available.
    #[serde(default)]
    pub block_scanning_effort_score: Option<ScoreValue>,

    /// Number of discrete selection actions to produce the entry.
    pub hits: usize,

    /// Page the button lives on.
    #[serde(default)]
    pub grid_name: Option<String>,

    /// Marks entries that represent a spelling keyboard page.
    #[serde(default)]
    pub spelling_page: bool,

    /// How many raw rows shared this key before deduplication.
    #[serde(default = "default_count")]
    pub count: usize,
}

impl EffortRecord {
    /// Create a record with well-formed scores.
    pub fn new<S: Into<String>, P: Into<String>>(
        word_phrase: S,
        path: P,
        effort_score: f64,
        scanning_effort_score: f64,
        hits: usize,
    ) -> Self {
        EffortRecord {
            word_phrase: word_phrase.into(),
            path: path.into(),
            effort_score: effort_score.into(),
            scanning_effort_score: scanning_effort_score.into(),
            block_scanning_effort_score: None,
            hits,
            grid_name: None,
            spelling_page: false,
            count: 1,
        }
    }

    /// The lookup key: trimmed and lowercased word/phrase.
    pub fn key(&self) -> String {
        normalize_key(&self.word_phrase)
    }

    /// The score column for the given technique.
    pub fn score(&self, technique: Technique) -> &ScoreValue {
        match technique {
            Technique::Direct => &self.effort_score,
            Technique::Scanning => &self.scanning_effort_score,
        }
    }
}

/// Normalize a word/phrase for case-insensitive lookup.
pub fn normalize_key(word_phrase: &str) -> String {
    word_phrase.trim().to_lowercase()
}
