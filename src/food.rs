use rand::Rng;

use crate::snake::{Position, Snake};

/// Points granted for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Random draws attempted before falling back to enumerating free cells.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Samples the whole board and rejects occupied cells. On a crowded board the
/// sampler gives up after a fixed number of misses and draws from the list of
/// free cells instead, which keeps the distribution uniform. Returns `None`
/// only when the snake covers every cell.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    board_size: u16,
    snake: &Snake,
) -> Option<Position> {
    let size = i32::from(board_size);
    let total_cells = usize::from(board_size) * usize::from(board_size);
    if size == 0 || snake.len() >= total_cells {
        return None;
    }

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free_cells: Vec<Position> = (0..size)
        .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
        .filter(|position| !snake.occupies(*position))
        .collect();

    if free_cells.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..free_cells.len());
    Some(free_cells[index])
}
