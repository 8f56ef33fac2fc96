//! Sentence-to-effort resolution against a precomputed effort table.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::sentence::similarity;
use crate::table::{EffortRecord, EffortTable, Technique};

/// Path description emitted when a word has no entry and no spelling
/// fallback is available.
pub const DEFAULT_PATH: &str = "Default Path";

/// Path description emitted when a matched row has a malformed score.
pub const ERROR_PATH: &str = "Error Path";

/// Configuration for sentence resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum similarity ratio a whole-sentence fuzzy match must exceed.
    pub fuzzy_threshold: f64,
    /// Page name of the spelling keyboard used for unmodeled words.
    pub spelling_page: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            fuzzy_threshold: 0.8,
            spelling_page: None,
        }
    }
}

/// What kind of unit a resolution step accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The whole sentence matched a single table entry.
    Phrase,
    /// One word matched a table entry.
    Word,
    /// One spelled letter.
    Letter,
    /// Lookup miss with no fallback; zero-effort sentinel.
    DefaultPath,
    /// Matched row had a malformed score; zero-effort marker.
    ErrorPath,
}

/// Diagnostics about the alternative productions considered for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeStats {
    /// Number of table rows that also produce this word.
    pub count: usize,
    /// Smallest hit count among the alternatives.
    pub min_hits: usize,
    /// Largest hit count among the alternatives.
    pub max_hits: usize,
}

/// One selection step of a resolved sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionStep {
    /// The word, letter, or phrase this step produces.
    pub unit: String,
    pub kind: StepKind,
    /// Navigation path description for the selection.
    pub path: String,
    /// Effort contribution of this step.
    pub effort: f64,
    /// Whether the unit was produced by letter-by-letter spelling.
    pub spelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<AlternativeStats>,
}

/// The result of resolving one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResolution {
    /// The normalized (lowercased, trimmed) input sentence.
    pub sentence: String,
    pub technique: Technique,
    /// Sum of all step efforts.
    pub total_effort: f64,
    pub steps: Vec<ResolutionStep>,
}

impl SentenceResolution {
    /// Whether any word needed letter-by-letter spelling.
    pub fn used_spelling(&self) -> bool {
        self.steps.iter().any(|s| s.spelled)
    }
}

/// Resolves free text into selection steps against a read-only effort table.
pub struct SentenceResolver<'a> {
    table: &'a EffortTable,
    config: ResolverConfig,
}

impl<'a> SentenceResolver<'a> {
    /// Create a resolver with the default configuration.
    pub fn new(table: &'a EffortTable) -> Self {
        SentenceResolver {
            table,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with a custom configuration.
    pub fn with_config(table: &'a EffortTable, config: ResolverConfig) -> Self {
        SentenceResolver { table, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a sentence to a total effort and ordered selection steps.
    ///
    /// Strategies in priority order: exact phrase match, fuzzy phrase match,
    /// per-word lookup with minimum-effort alternative substitution, spelling
    /// fallback, zero-effort sentinels. No input aborts resolution.
    pub fn resolve(&self, sentence: &str, technique: Technique) -> SentenceResolution {
        let normalized = sentence.trim().to_lowercase();

        // Whole-sentence matches bypass per-word resolution entirely.
        if let Some(record) = self.table.get(&normalized) {
            return self.phrase_resolution(&normalized, record, technique);
        }
        if let Some(record) = self.fuzzy_match(&normalized) {
            debug!(
                "fuzzy-matched '{normalized}' to table entry '{}'",
                record.key()
            );
            return self.phrase_resolution(&normalized, record, technique);
        }

        let mut steps = Vec::new();
        for word in normalized.split_whitespace() {
            match self.table.get(word) {
                Some(record) => steps.push(self.word_step(word, record, technique)),
                None => steps.extend(self.fallback_steps(word, technique)),
            }
        }

        let total_effort = steps.iter().map(|s| s.effort).sum();
        SentenceResolution {
            sentence: normalized,
            technique,
            total_effort,
            steps,
        }
    }

    /// Best fuzzy whole-sentence candidate, if it exceeds the threshold.
    ///
    /// Ties on the maximum ratio resolve to the first record in table order.
    fn fuzzy_match(&self, normalized: &str) -> Option<&'a EffortRecord> {
        let mut best: Option<(&EffortRecord, f64)> = None;
        for record in self.table.records() {
            let ratio = similarity::ratio(normalized, &record.key());
            if best.map(|(_, r)| ratio > r).unwrap_or(true) {
                best = Some((record, ratio));
            }
        }
        match best {
            Some((record, ratio)) if ratio > self.config.fuzzy_threshold => Some(record),
            _ => None,
        }
    }

    /// Build the single-step resolution for a whole-sentence match.
    fn phrase_resolution(
        &self,
        normalized: &str,
        record: &EffortRecord,
        technique: Technique,
    ) -> SentenceResolution {
        let step = match record.score(technique).as_f64() {
            Some(effort) => ResolutionStep {
                unit: record.key(),
                kind: StepKind::Phrase,
                path: record.path.clone(),
                effort,
                spelled: false,
                alternatives: None,
            },
            None => self.error_step(record.key()),
        };
        SentenceResolution {
            sentence: normalized.to_string(),
            technique,
            total_effort: step.effort,
            steps: vec![step],
        }
    }

    /// Build the step for an exact word match, substituting the cheapest
    /// alternative production when one is strictly cheaper.
    fn word_step(
        &self,
        word: &str,
        record: &EffortRecord,
        technique: Technique,
    ) -> ResolutionStep {
        let alternatives = self.table.alternatives(word);
        let stats = if alternatives.len() > 1 {
            Some(AlternativeStats {
                count: alternatives.len(),
                min_hits: alternatives.iter().map(|r| r.hits).min().unwrap_or(0),
                max_hits: alternatives.iter().map(|r| r.hits).max().unwrap_or(0),
            })
        } else {
            None
        };

        let Some(primary) = record.score(technique).as_f64() else {
            warn!("malformed {technique} score for '{word}'");
            let mut step = self.error_step(word.to_string());
            step.alternatives = stats;
            return step;
        };

        let mut effort = primary;
        let mut path = record.path.clone();
        for alternative in &alternatives {
            if let Some(candidate) = alternative.score(technique).as_f64()
                && candidate < effort
            {
                effort = candidate;
                path = alternative.path.clone();
            }
        }

        ResolutionStep {
            unit: word.to_string(),
            kind: StepKind::Word,
            path,
            effort,
            spelled: false,
            alternatives: stats,
        }
    }

    /// Steps for a word with no table entry: spelling fallback when a
    /// spelling page is configured and modeled, a sentinel step otherwise.
    fn fallback_steps(&self, word: &str, technique: Technique) -> Vec<ResolutionStep> {
        if let Some(page) = &self.config.spelling_page {
            match self.table.get(page) {
                Some(base) => return self.spell_word(word, page, base, technique),
                None => warn!("spelling page '{page}' has no table entry, skipping fallback"),
            }
        }

        debug!("no table entry for '{word}', emitting default path");
        vec![ResolutionStep {
            unit: word.to_string(),
            kind: StepKind::DefaultPath,
            path: DEFAULT_PATH.to_string(),
            effort: 0.0,
            spelled: false,
            alternatives: None,
        }]
    }

    /// One step per letter of the word on the spelling keyboard.
    ///
    /// A letter's cost comes from its `{page}_{letter}` entry when modeled,
    /// else the spelling page's base effort; the page's own path (the cost of
    /// opening the keyboard) is attached to the first letter only.
    fn spell_word(
        &self,
        word: &str,
        page: &str,
        base: &EffortRecord,
        technique: Technique,
    ) -> Vec<ResolutionStep> {
        let base_effort = base.score(technique).as_f64().unwrap_or(0.0);

        let mut steps = Vec::new();
        for (i, letter) in word.graphemes(true).enumerate() {
            let key = format!("{page}_{letter}");
            let step = match self.table.get(&key) {
                Some(record) => match record.score(technique).as_f64() {
                    Some(effort) => ResolutionStep {
                        unit: letter.to_string(),
                        kind: StepKind::Letter,
                        path: record.path.clone(),
                        effort,
                        spelled: true,
                        alternatives: None,
                    },
                    None => {
                        let mut step = self.error_step(letter.to_string());
                        step.spelled = true;
                        step
                    }
                },
                None => ResolutionStep {
                    unit: letter.to_string(),
                    kind: StepKind::Letter,
                    path: if i == 0 { base.path.clone() } else { key },
                    effort: base_effort,
                    spelled: true,
                    alternatives: None,
                },
            };
            steps.push(step);
        }
        steps
    }

    /// A zero-effort marker step for a malformed table row.
    fn error_step(&self, unit: String) -> ResolutionStep {
        ResolutionStep {
            unit,
            kind: StepKind::ErrorPath,
            path: ERROR_PATH.to_string(),
            effort: 0.0,
            spelled: false,
            alternatives: None,
        }
    }
}
