use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, INITIAL_SNAKE_LENGTH, SNAKE_CAPACITY,
};
use crate::input::Direction;

/// One fixed-size square unit of the snake's body.
///
/// Coordinates are the top-left corner in logical units; the side length is
/// always [`CELL_SIZE`], so it is not stored per segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    /// Returns true when the segment lies inside the board.
    #[must_use]
    pub fn is_within_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }
}

/// Mutable snake state: a bounded, ordered run of segments plus the movement
/// delta applied to the head each tick.
///
/// Storage is a preallocated array indexed by an explicit length counter; the
/// capacity equals the cell count of the board, so no reallocation can ever
/// be needed.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: [Segment; SNAKE_CAPACITY],
    len: usize,
    dx: i32,
    dy: i32,
}

impl Snake {
    /// Creates a snake in the initial round configuration.
    #[must_use]
    pub fn new() -> Self {
        let mut snake = Self {
            segments: [Segment { x: 0, y: 0 }; SNAKE_CAPACITY],
            len: 0,
            dx: 0,
            dy: 0,
        };
        snake.reset();
        snake
    }

    /// Creates a snake from explicit segments (first is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty or longer than [`SNAKE_CAPACITY`].
    #[must_use]
    pub fn from_segments(segments: &[Segment], direction: Direction) -> Self {
        assert!(
            !segments.is_empty() && segments.len() <= SNAKE_CAPACITY,
            "segment count must be in 1..={SNAKE_CAPACITY}",
        );

        let mut snake = Self::new();
        snake.len = segments.len();
        snake.segments[..segments.len()].copy_from_slice(segments);
        (snake.dx, snake.dy) = direction.delta();
        snake
    }

    /// Resets to the initial round configuration: three segments trailing
    /// leftward from the board center, moving right.
    pub fn reset(&mut self) {
        self.len = INITIAL_SNAKE_LENGTH;
        self.dx = CELL_SIZE;
        self.dy = 0;

        for (i, segment) in self.segments[..INITIAL_SNAKE_LENGTH].iter_mut().enumerate() {
            *segment = Segment {
                x: BOARD_WIDTH / 2 - i as i32 * CELL_SIZE,
                y: BOARD_HEIGHT / 2,
            };
        }
    }

    /// Applies one movement step: every segment takes its predecessor's
    /// position and the head moves by the current delta.
    ///
    /// The shift iterates tail toward head so each segment is read before it
    /// is overwritten; the order is a correctness requirement, not a style
    /// choice.
    pub fn advance(&mut self) {
        for i in (1..self.len).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0].x += self.dx;
        self.segments[0].y += self.dy;
    }

    /// Appends a duplicate of the current tail segment.
    ///
    /// Silently ignored at capacity; the duplicate separates naturally on
    /// the next [`advance`](Self::advance).
    pub fn grow(&mut self) {
        if self.len < SNAKE_CAPACITY {
            self.segments[self.len] = self.segments[self.len - 1];
            self.len += 1;
        }
    }

    /// Requests a direction change.
    ///
    /// A turn is accepted only onto the perpendicular axis. This also rejects
    /// same-axis reversals, which would fold the head straight into the first
    /// body segment.
    pub fn steer(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        if (dy != 0 && self.dy == 0) || (dx != 0 && self.dx == 0) {
            self.dx = dx;
            self.dy = dy;
        }
    }

    /// Returns the head segment.
    #[must_use]
    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    /// Returns the body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.len]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Segment) -> bool {
        self.segments().contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.segments()[1..].contains(&head)
    }

    /// Returns the current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when there are no segments. Never the case for a snake
    /// built through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current per-tick displacement (dx, dy).
    #[must_use]
    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
