//! Food placement by rejection sampling.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Position, GRID_CELLS, GRID_SIZE, MAX_FOOD_ATTEMPTS};

/// Pick a uniformly random cell that is not occupied by `snake`.
///
/// Samples the whole grid up to [`MAX_FOOD_ATTEMPTS`] times. When the snake
/// covers so much of the grid that sampling keeps missing, the free cells are
/// enumerated and one is drawn from them instead, so the result stays uniform.
/// Returns `None` only when every cell is occupied.
pub fn place_food(snake: &[Position], rng: &mut SimpleRng) -> Option<Position> {
    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = Position::new(
            rng.next_range(GRID_SIZE as u32) as i8,
            rng.next_range(GRID_SIZE as u32) as i8,
        );
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: ArrayVec<Position, GRID_CELLS> = (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
        .filter(|p| !snake.contains(p))
        .collect();

    if free.is_empty() {
        return None;
    }
    let pick = rng.next_range(free.len() as u32) as usize;
    free.get(pick).copied()
}
