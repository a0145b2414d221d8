use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::{CELL_SIZE, GLYPH_FOOD, GLYPH_SNAKE, Theme};
use crate::game::GameState;
use crate::snake::Segment;

/// Renders the full frame from immutable state.
///
/// Called every outer-loop iteration regardless of run state, so the display
/// stays live while paused.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        // A mid-collision head can sit outside the board for one frame;
        // skip it rather than wrapping or panicking.
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(theme.snake));
    }
}

/// Maps a logical-unit board position onto a terminal cell inside `inner`,
/// one terminal cell per grid cell.
fn logical_to_terminal(inner: Rect, position: Segment) -> Option<(u16, u16)> {
    if !position.is_within_board() {
        return None;
    }

    let col = u16::try_from(position.x / CELL_SIZE).ok()?;
    let row = u16::try_from(position.y / CELL_SIZE).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
