use ratatui::style::Color;

/// Board width in logical units.
pub const BOARD_WIDTH: i32 = 512;

/// Board height in logical units.
pub const BOARD_HEIGHT: i32 = 512;

/// Side length of one grid cell (and one snake segment) in logical units.
pub const CELL_SIZE: i32 = 16;

/// Number of grid columns.
pub const GRID_WIDTH: i32 = BOARD_WIDTH / CELL_SIZE;

/// Number of grid rows.
pub const GRID_HEIGHT: i32 = BOARD_HEIGHT / CELL_SIZE;

/// Maximum snake length: one segment per grid cell.
pub const SNAKE_CAPACITY: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Segment count of a freshly initialized snake.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Simulation step interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Timeout for one input poll inside the outer loop, in milliseconds.
///
/// Keeps the loop responsive to key events and redraws without busy-spinning
/// a full core between simulation steps.
pub const INPUT_POLL_INTERVAL_MS: u64 = 5;

/// Solid block glyph for snake segments.
pub const GLYPH_SNAKE: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
}

/// Classic green-on-black arcade palette.
pub const THEME_CLASSIC: Theme = Theme {
    snake: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
};

#[cfg(test)]
mod tests {
    use super::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, SNAKE_CAPACITY};

    #[test]
    fn grid_geometry_is_consistent() {
        assert_eq!(BOARD_WIDTH % CELL_SIZE, 0);
        assert_eq!(BOARD_HEIGHT % CELL_SIZE, 0);
        assert_eq!(GRID_WIDTH, 32);
        assert_eq!(GRID_HEIGHT, 32);
        assert_eq!(SNAKE_CAPACITY, 1024);
    }
}
