//! Persistent high-score table stored as pretty JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use galaxian_core::state::RunSummary;

/// Entries kept on disk.
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u64,
    pub wave: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    /// Load a table. A missing file is an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let mut table: Self = serde_json::from_str(&json)
            .with_context(|| format!("failed parsing {}", path.display()))?;
        table.sort_and_trim();
        Ok(table)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed creating directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("failed encoding high scores")?;
        fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    /// Record a finished run. Returns its 0-based rank if it made the table.
    /// Ties keep the earlier entry ahead.
    pub fn record(&mut self, summary: &RunSummary) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| summary.score > e.score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(
            rank,
            HighScoreEntry {
                name: summary.name.clone(),
                score: summary.score,
                wave: summary.wave,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    fn sort_and_trim(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, score: u64) -> RunSummary {
        RunSummary {
            name: name.into(),
            score,
            wave: 1,
        }
    }

    #[test]
    fn test_record_orders_by_score() {
        let mut table = HighScoreTable::default();
        assert_eq!(table.record(&run("a", 100)), Some(0));
        assert_eq!(table.record(&run("b", 300)), Some(0));
        assert_eq!(table.record(&run("c", 200)), Some(1));
        let names: Vec<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_earlier_entry_ahead() {
        let mut table = HighScoreTable::default();
        table.record(&run("first", 500));
        assert_eq!(table.record(&run("second", 500)), Some(1));
    }

    #[test]
    fn test_table_is_capped() {
        let mut table = HighScoreTable::default();
        for i in 0..MAX_ENTRIES as u64 {
            table.record(&run("x", 1000 + i));
        }
        assert_eq!(table.record(&run("low", 5)), None);
        assert_eq!(table.record(&run("top", 5000)), Some(0));
        assert_eq!(table.entries().len(), MAX_ENTRIES);
        assert!(table.entries().iter().all(|e| e.score >= 1001));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = HighScoreTable::load(&dir.path().join("none.json")).unwrap();
        assert!(table.entries().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");
        let mut table = HighScoreTable::default();
        table.record(&run("Ace", 4200));
        table.record(&run("Bee", 900));
        table.save(&path).unwrap();

        let loaded = HighScoreTable::load(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();
        assert!(HighScoreTable::load(&path).is_err());
    }
}
