//! Best-scores table, persisted as one JSON value under a single key.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{KeyValueStore, StoreError};

pub const HIGH_SCORES_KEY: &str = "blockfall.high_scores";
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub lines: u32,
}

/// Top results, highest score first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the table; a missing or unreadable value gives an empty table.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(HIGH_SCORES_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<HighScores>(&raw) {
            Ok(mut table) => {
                table.normalize();
                table
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable high scores");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.set(HIGH_SCORES_KEY, &json)
    }

    /// Insert a finished game. Returns its 1-based rank if it made the table.
    ///
    /// Zero scores are not recorded. Ties rank below existing entries.
    pub fn record(&mut self, score: u32, lines: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let pos = self.entries.partition_point(|e| e.score >= score);
        if pos >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(pos, ScoreEntry { score, lines });
        self.entries.truncate(MAX_ENTRIES);
        debug!(score, lines, rank = pos + 1, "high score recorded");
        Some(pos + 1)
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize(&mut self) {
        self.entries.retain(|e| e.score > 0);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }
}
