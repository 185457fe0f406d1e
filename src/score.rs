use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "tick-snake";
const SCORE_FILE_NAME: &str = "high_scores.json";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Maximum number of entries kept in the table.
pub const MAX_HIGH_SCORES: usize = 10;

/// Label used when no player name is configured.
pub const DEFAULT_PLAYER: &str = "Player";

/// Failure while reading or writing the high-score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high-score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high-score file is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

/// One row of the high-score table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: String,
    pub player: String,
}

/// Ranked top-10 list, highest score first.
///
/// Serialized as `{"scores": [...]}`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    scores: Vec<HighScoreEntry>,
}

/// Returns the platform-correct high-score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

impl HighScores {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `score` for `player`, stamped with the current local time.
    pub fn add_score(&mut self, score: u32, player: &str) {
        let date = Local::now().format(DATE_FORMAT).to_string();
        self.add_entry(HighScoreEntry {
            score,
            date,
            player: player.to_owned(),
        });
    }

    /// Inserts a prepared entry, then re-ranks and truncates the table.
    ///
    /// Equal scores keep insertion order.
    pub fn add_entry(&mut self, entry: HighScoreEntry) {
        self.scores.push(entry);
        self.normalize();
    }

    /// Returns the best score, or 0 when the table is empty.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.scores.first().map_or(0, |entry| entry.score)
    }

    /// Returns the entries from best to worst.
    #[must_use]
    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Writes the table to `path`. Failures are logged and otherwise ignored.
    pub fn save(&self, path: &Path) {
        match self.try_save(path) {
            Ok(()) => debug!("saved {} high scores to {}", self.len(), path.display()),
            Err(err) => error!("failed to save high scores to {}: {err}", path.display()),
        }
    }

    /// Reads a table from `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty table.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(scores) => scores,
            Err(ScoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no high-score file at {}", path.display());
                Self::new()
            }
            Err(err) => {
                warn!("ignoring high scores in {}: {err}", path.display());
                Self::new()
            }
        }
    }

    fn try_save(&self, path: &Path) -> Result<(), ScoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn try_load(path: &Path) -> Result<Self, ScoreError> {
        let raw = fs::read_to_string(path)?;
        let mut scores: Self = serde_json::from_str(&raw)?;
        scores.normalize();
        Ok(scores)
    }

    fn normalize(&mut self) {
        // `sort_by` is stable, so ties stay in insertion order.
        self.scores.sort_by(|a, b| b.score.cmp(&a.score));
        self.scores.truncate(MAX_HIGH_SCORES);
    }
}
