//! Wrong-answer accounting and the sorted stats report.

use serde::{Deserialize, Serialize};

/// Wrong-answer count for one source word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCount {
    /// Source text of the word.
    pub word: String,
    /// Number of wrong answers given for it.
    pub count: u32,
}

/// Per-session wrong-answer counters, keyed by source text.
///
/// Entries keep the order in which each word was first missed. Counts only
/// ever go up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorStats {
    entries: Vec<ErrorCount>,
}

impl ErrorStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one wrong answer for `word` and return its new count.
    pub fn record(&mut self, word: &str) -> u32 {
        match self.entries.iter_mut().find(|e| e.word == word) {
            Some(entry) => {
                entry.count += 1;
                entry.count
            }
            None => {
                self.entries.push(ErrorCount {
                    word: word.to_string(),
                    count: 1,
                });
                1
            }
        }
    }

    /// Current count for `word` (0 if never missed).
    pub fn count(&self, word: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map_or(0, |e| e.count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total wrong answers across all words.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Build the sorted report.
    pub fn report(&self) -> StatsReport {
        if self.entries.is_empty() {
            return StatsReport::NoErrors;
        }
        let mut ranked = self.entries.clone();
        // Stable: ties keep first-miss order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        StatsReport::Ranked(ranked)
    }
}

/// Snapshot of the error stats, most-missed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsReport {
    /// No wrong answers so far.
    NoErrors,
    /// Non-empty, sorted by count descending.
    Ranked(Vec<ErrorCount>),
}

impl StatsReport {
    pub fn entries(&self) -> &[ErrorCount] {
        match self {
            StatsReport::NoErrors => &[],
            StatsReport::Ranked(entries) => entries,
        }
    }
}
