use log::debug;
use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Rejected draws tolerated before placement falls back to a grid scan.
const REJECTION_ATTEMPTS_PER_CELL: usize = 64;

/// Source of candidate food cells.
pub trait FoodSource {
    /// Returns a candidate cell inside `bounds`. It may be occupied.
    fn sample(&mut self, bounds: GridSize) -> Position;
}

/// Uniform candidates drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomCells<R> {
    rng: R,
}

impl<R: Rng> RandomCells<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FoodSource for RandomCells<R> {
    fn sample(&mut self, bounds: GridSize) -> Position {
        Position {
            x: self.rng.gen_range(0..i32::from(bounds.width)),
            y: self.rng.gen_range(0..i32::from(bounds.height)),
        }
    }
}

/// Replays a fixed list of candidates, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedCells {
    cells: Vec<Position>,
    next: usize,
}

impl ScriptedCells {
    /// Panics when `cells` is empty.
    #[must_use]
    pub fn new(cells: Vec<Position>) -> Self {
        assert!(!cells.is_empty(), "scripted food source needs at least one cell");
        Self { cells, next: 0 }
    }
}

impl FoodSource for ScriptedCells {
    fn sample(&mut self, _bounds: GridSize) -> Position {
        let cell = self.cells[self.next];
        self.next = (self.next + 1) % self.cells.len();
        cell
    }
}

/// Picks a free cell for food by rejection sampling.
///
/// Returns `None` when the snake covers the whole grid. A source that keeps
/// proposing occupied or out-of-range cells is abandoned after a bounded
/// number of draws in favour of the first free cell in row-major order.
pub fn place_food<S: FoodSource + ?Sized>(
    source: &mut S,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let total_cells = bounds.total_cells();
    if snake.len() >= total_cells {
        return None;
    }

    for _ in 0..total_cells.saturating_mul(REJECTION_ATTEMPTS_PER_CELL) {
        let candidate = source.sample(bounds);
        if candidate.is_within_bounds(bounds) && !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    debug!("food source exhausted its attempts, scanning for a free cell");
    first_free_cell(bounds, snake)
}

fn first_free_cell(bounds: GridSize, snake: &Snake) -> Option<Position> {
    (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
        .find(|position| !snake.occupies(*position))
}
