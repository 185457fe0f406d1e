use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::score::{scores_path, DEFAULT_PLAYER};
use crate::snake::INITIAL_SNAKE_LENGTH;

/// Default side length of the square board.
pub const DEFAULT_BOARD_SIZE: u16 = 20;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Smallest board that fits the centered starting snake.
pub const MIN_BOARD_SIZE: u16 = (INITIAL_SNAKE_LENGTH as u16 - 1) * 2;

/// Rejected startup configuration.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size {0} is too small, the minimum is {}", MIN_BOARD_SIZE)]
    BoardTooSmall(u16),
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Startup settings, built once and handed to the engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    pub board_size: u16,
    pub tick_interval: Duration,
    pub high_score_path: PathBuf,
    /// Label stored with every recorded score.
    pub player_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            high_score_path: scores_path(),
            player_name: DEFAULT_PLAYER.to_owned(),
        }
    }
}

impl GameConfig {
    /// Creates a default configuration that persists scores at `high_score_path`.
    #[must_use]
    pub fn with_high_score_path(high_score_path: impl Into<PathBuf>) -> Self {
        Self {
            high_score_path: high_score_path.into(),
            ..Self::default()
        }
    }

    /// Checks the values the engine cannot run without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }

        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(())
    }
}
