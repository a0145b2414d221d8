use rand::Rng;

use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::snake::{Segment, Snake};

/// Food item currently active on the board.
///
/// Occupies exactly one grid cell, identified by its top-left corner in
/// logical units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Segment,
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Segment) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random grid cell not occupied by the snake.
    ///
    /// Rejection-samples without a retry cap. Occupied cells are a small
    /// fraction of the board at ordinary snake lengths, so resampling
    /// terminates quickly; a board-filling snake would make this spin, which
    /// is accepted at this scale.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Self {
        loop {
            let position = Segment {
                x: rng.gen_range(0..GRID_WIDTH) * CELL_SIZE,
                y: rng.gen_range(0..GRID_HEIGHT) * CELL_SIZE,
            };

            if !snake.occupies(position) {
                return Self { position };
            }
        }
    }
}
