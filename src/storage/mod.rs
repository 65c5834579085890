//! # Storage Module - Saved Stats and High Scores
//!
//! Player totals and per-difficulty high scores live in two small JSON files:
//!
//! ```text
//! <data_dir>/
//! ├── player_stats.json   ← {"total_points": 0, "games_played": 0, "wins": 0}
//! └── high_scores.json    ← {"简单": 0, "中等": 0, "困难": 0, "地狱": 0}
//! ```
//!
//! ## Behavior
//!
//! - **Tolerant loads**: a missing or unparsable file yields the defaults, and
//!   the defaults are written back immediately so the next load sees them.
//! - **Whole-file saves**: every save truncates and rewrites the file.
//! - **File Locking**: shared lock while reading, exclusive lock while writing
//!   (`fs2` advisory locks).
//!
//! The game talks to storage only through the [`StatsStore`] trait so the
//! round logic never touches the filesystem directly.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::errors::StorageError;
use crate::game::difficulty;

/// Cumulative player totals across all rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub total_points: u64,
    #[serde(default)]
    pub games_played: u64,
    #[serde(default)]
    pub wins: u64,
}

impl PlayerStats {
    /// Win rate as a percentage; 0.0 before the first game.
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64 * 100.0
        }
    }
}

/// Best score per difficulty, keyed by tier name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable {
    scores: BTreeMap<String, f64>,
}

impl Default for HighScoreTable {
    fn default() -> Self {
        let mut table = HighScoreTable {
            scores: BTreeMap::new(),
        };
        table.fill_missing();
        table
    }
}

impl HighScoreTable {
    pub fn get(&self, tier_name: &str) -> f64 {
        self.scores.get(tier_name).copied().unwrap_or(0.0)
    }

    /// Store `score` if it beats the current entry. Returns whether it did.
    pub fn record(&mut self, tier_name: &str, score: f64) -> bool {
        if score > self.get(tier_name) {
            self.scores.insert(tier_name.to_string(), score);
            true
        } else {
            false
        }
    }

    /// Add a zero entry for every tier absent from the table. Returns whether anything was added.
    pub fn fill_missing(&mut self) -> bool {
        let mut added = false;
        for tier in difficulty::all() {
            if !self.scores.contains_key(tier.name) {
                self.scores.insert(tier.name.to_string(), 0.0);
                added = true;
            }
        }
        added
    }

    /// `(tier name, score)` pairs in difficulty order.
    pub fn in_tier_order(&self) -> Vec<(&'static str, f64)> {
        difficulty::all()
            .iter()
            .map(|t| (t.name, self.get(t.name)))
            .collect()
    }
}

/// Key-value persistence collaborator for session data.
pub trait StatsStore {
    /// Load stats, falling back to (and persisting) defaults.
    fn load_stats(&mut self) -> PlayerStats;
    fn save_stats(&mut self, stats: &PlayerStats) -> Result<(), StorageError>;
    /// Load high scores, falling back to (and persisting) defaults.
    fn load_high_scores(&mut self) -> HighScoreTable;
    fn save_high_scores(&mut self, scores: &HighScoreTable) -> Result<(), StorageError>;
}

/// [`StatsStore`] backed by two JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    stats_path: PathBuf,
    high_scores_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(stats_path: impl Into<PathBuf>, high_scores_path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            stats_path: stats_path.into(),
            high_scores_path: high_scores_path.into(),
        }
    }

    /// Store using the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let cfg = StorageConfig {
            data_dir: dir.as_ref().to_string_lossy().to_string(),
            ..StorageConfig::default()
        };
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &StorageConfig) -> Self {
        Self::new(cfg.stats_path(), cfg.high_scores_path())
    }

    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }

    pub fn high_scores_path(&self) -> &Path {
        &self.high_scores_path
    }

    /// Overwrite both files with defaults.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.save_stats(&PlayerStats::default())?;
        self.save_high_scores(&HighScoreTable::default())
    }
}

impl StatsStore for JsonFileStore {
    fn load_stats(&mut self) -> PlayerStats {
        load_or_default(&self.stats_path, "player stats")
    }

    fn save_stats(&mut self, stats: &PlayerStats) -> Result<(), StorageError> {
        write_json(&self.stats_path, stats)
    }

    fn load_high_scores(&mut self) -> HighScoreTable {
        let mut table: HighScoreTable = load_or_default(&self.high_scores_path, "high scores");
        if table.fill_missing() {
            debug!("storage: filled missing tiers in {:?}", self.high_scores_path);
        }
        table
    }

    fn save_high_scores(&mut self, scores: &HighScoreTable) -> Result<(), StorageError> {
        write_json(&self.high_scores_path, scores)
    }
}

fn load_or_default<T>(path: &Path, what: &str) -> T
where
    T: Default + Serialize + DeserializeOwned,
{
    match read_json(path) {
        Ok(value) => value,
        Err(e) => {
            match &e {
                StorageError::Io(io) if io.kind() == ErrorKind::NotFound => {
                    info!("storage: no {} at {:?}, using defaults", what, path)
                }
                _ => warn!("storage: unreadable {} at {:?} ({}), using defaults", what, path, e),
            }
            let defaults = T::default();
            if let Err(e) = write_json(path, &defaults) {
                warn!("storage: unable to write default {} to {:?}: {}", what, path, e);
            }
            defaults
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let mut f = File::open(path)?;
    FileExt::lock_shared(&f).map_err(|e| StorageError::Lock(e.to_string()))?;
    let mut s = String::new();
    let read = f.read_to_string(&mut s);
    let _ = FileExt::unlock(&f);
    read?;
    let cleaned = s.trim_start_matches('\0');
    Ok(serde_json::from_str(cleaned)?)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let data = serde_json::to_string_pretty(value)?;
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)?;
    FileExt::lock_exclusive(&f).map_err(|e| StorageError::Lock(e.to_string()))?;
    let written = f
        .set_len(0)
        .and_then(|_| f.write_all(data.as_bytes()))
        .and_then(|_| f.flush())
        .and_then(|_| f.sync_all());
    let _ = FileExt::unlock(&f);
    written?;
    debug!("storage: wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_files_yield_and_persist_defaults() {
        let tmp = tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(tmp.path());
        assert!(!store.stats_path().exists());

        assert_eq!(store.load_stats(), PlayerStats::default());
        assert!(store.stats_path().exists());
        assert_eq!(store.load_stats(), PlayerStats::default());

        let scores = store.load_high_scores();
        assert!(store.high_scores_path().exists());
        assert_eq!(scores, HighScoreTable::default());
        assert_eq!(scores.in_tier_order().len(), 4);
    }

    #[test]
    fn corrupt_file_is_replaced_with_defaults() {
        let tmp = tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(tmp.path());
        fs::write(store.stats_path(), "{not json").unwrap();
        assert_eq!(store.load_stats(), PlayerStats::default());
        let on_disk: PlayerStats =
            serde_json::from_str(&fs::read_to_string(store.stats_path()).unwrap()).unwrap();
        assert_eq!(on_disk, PlayerStats::default());
    }

    #[test]
    fn save_then_load() {
        let tmp = tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(tmp.path());
        let stats = PlayerStats {
            total_points: 420,
            games_played: 7,
            wins: 3,
        };
        store.save_stats(&stats).unwrap();
        assert_eq!(store.load_stats(), stats);

        let mut scores = HighScoreTable::default();
        assert!(scores.record("困难", 512.5));
        store.save_high_scores(&scores).unwrap();
        assert_eq!(store.load_high_scores().get("困难"), 512.5);
    }

    #[test]
    fn partial_high_score_file_gets_missing_tiers() {
        let tmp = tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(tmp.path());
        fs::write(store.high_scores_path(), r#"{"简单": 153.3}"#).unwrap();
        let scores = store.load_high_scores();
        assert_eq!(scores.get("简单"), 153.3);
        assert_eq!(scores.get("地狱"), 0.0);
        assert_eq!(scores.in_tier_order()[3], ("地狱", 0.0));
    }

    #[test]
    fn legacy_stats_without_all_fields() {
        let tmp = tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(tmp.path());
        fs::write(store.stats_path(), r#"{"total_points": 90}"#).unwrap();
        let stats = store.load_stats();
        assert_eq!(stats.total_points, 90);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn high_scores_never_decrease() {
        let mut scores = HighScoreTable::default();
        assert!(scores.record("简单", 100.0));
        assert!(!scores.record("简单", 99.0));
        assert!(!scores.record("简单", 100.0));
        assert_eq!(scores.get("简单"), 100.0);
    }

    #[test]
    fn win_rate() {
        assert_eq!(PlayerStats::default().win_rate(), 0.0);
        let stats = PlayerStats {
            total_points: 0,
            games_played: 4,
            wins: 1,
        };
        assert_eq!(stats.win_rate(), 25.0);
    }

    #[test]
    fn unwritable_location_reports_error() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "file, not a dir").unwrap();
        let mut store = JsonFileStore::in_dir(&blocker);
        assert!(store.save_stats(&PlayerStats::default()).is_err());
        // Load still succeeds with defaults even though the rewrite fails.
        assert_eq!(store.load_stats(), PlayerStats::default());
    }
}
