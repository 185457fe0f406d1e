use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::food::{spawn_position, FOOD_REWARD};
use crate::input::Direction;
use crate::score::HighScores;
use crate::state::GameState;

/// What a single call to [`GameEngine::advance`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was paused or already over; nothing changed.
    Skipped,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food and grew.
    Ate,
    /// The head left the board.
    WallCollision,
    /// The head ran into the body.
    SelfCollision,
    /// The snake filled the board.
    Victory,
}

impl TickOutcome {
    /// Returns true when the game is still running after this tick.
    #[must_use]
    pub fn continues(self) -> bool {
        matches!(self, Self::Moved | Self::Ate)
    }
}

/// Owns the simulation state and the high-score table.
///
/// The engine has no notion of time: a caller-owned scheduler invokes
/// [`GameEngine::tick`] once per interval.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    high_scores: HighScores,
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Validates `config`, loads the persisted high scores and starts a game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::build(config, StdRng::from_entropy())
    }

    /// Creates an engine with deterministic food placement.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_scores = HighScores::load(&config.high_score_path);
        info!(
            "starting {0}x{0} game, {1} stored high scores",
            config.board_size,
            high_scores.len()
        );

        let mut engine = Self {
            state: GameState::new(config.board_size),
            high_scores,
            config,
            rng,
        };
        engine.reset_game();
        Ok(engine)
    }

    /// Sets the heading for the next tick.
    ///
    /// Ignored while paused or over, and when `direction` would reverse the
    /// current heading.
    pub fn change_direction(&mut self, direction: Direction) {
        if !self.state.is_running() {
            return;
        }

        if self.state.direction.is_opposite(direction) {
            debug!("rejected reversal from {:?} to {direction:?}", self.state.direction);
            return;
        }

        self.state.direction = direction;
    }

    /// Flips the pause flag. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        if self.state.is_game_over {
            return;
        }

        self.state.is_paused = !self.state.is_paused;
        debug!("paused: {}", self.state.is_paused);
    }

    /// Starts a new game on the same board and places the first food.
    pub fn reset_game(&mut self) {
        self.state.reset();
        self.state.food = spawn_position(&mut self.rng, self.state.board_size(), &self.state.snake);
        debug!("game reset, food at {:?}", self.state.food);
    }

    /// Advances one step. Returns false when nothing moved or the game ended.
    pub fn tick(&mut self) -> bool {
        self.advance().continues()
    }

    /// Advances one step and reports what happened.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Skipped;
        }

        let new_head = self.state.snake.head().offset(self.state.direction);

        // Wall first, then body. The body check includes the current tail.
        if !new_head.is_within_bounds(self.state.board_size()) {
            return self.finish(TickOutcome::WallCollision);
        }

        if self.state.snake.occupies(new_head) {
            return self.finish(TickOutcome::SelfCollision);
        }

        self.state.snake.push_head(new_head);

        if self.state.food != Some(new_head) {
            self.state.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.state.score += FOOD_REWARD;
        self.state.food = spawn_position(&mut self.rng, self.state.board_size(), &self.state.snake);
        if self.state.food.is_none() {
            return self.finish(TickOutcome::Victory);
        }

        TickOutcome::Ate
    }

    fn finish(&mut self, outcome: TickOutcome) -> TickOutcome {
        self.state.is_game_over = true;
        self.state.is_won = outcome == TickOutcome::Victory;
        info!(
            "game over ({outcome:?}) with score {} and length {}",
            self.state.score,
            self.state.snake.len()
        );

        if self.state.score > 0 {
            self.high_scores
                .add_score(self.state.score, &self.config.player_name);
            self.high_scores.save(&self.config.high_score_path);
        }

        outcome
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for collaborators that outlive a borrow.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Best recorded score, or 0.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_scores.high_score()
    }

    #[must_use]
    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
