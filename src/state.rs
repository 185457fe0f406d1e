use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Complete mutable simulation state for one session.
///
/// The engine is the only writer; renderers receive `&GameState` or a clone.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    /// Set together with `is_game_over` when the snake filled the board.
    pub is_won: bool,
    board_size: u16,
}

impl GameState {
    /// Creates a freshly reset state for a `board_size` x `board_size` board.
    #[must_use]
    pub fn new(board_size: u16) -> Self {
        Self {
            snake: Snake::centered(board_size),
            food: None,
            direction: Direction::Right,
            score: 0,
            is_game_over: false,
            is_paused: false,
            is_won: false,
            board_size,
        }
    }

    /// Reinitializes everything except the board size. Food is left empty.
    pub fn reset(&mut self) {
        *self = Self::new(self.board_size);
    }

    #[must_use]
    pub fn board_size(&self) -> u16 {
        self.board_size
    }

    /// Returns the number of cells on the board.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        usize::from(self.board_size) * usize::from(self.board_size)
    }

    /// Returns true while ticks should advance the simulation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.is_game_over && !self.is_paused
    }
}
