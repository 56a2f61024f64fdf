use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BORDER_COLOR, BoardSize, CELL_COLUMNS, GLYPH_CELL};
use crate::scene::Scene;
use crate::snake::Cell;

/// Renders one frame of `scene`, centred in the terminal.
pub fn render(frame: &mut Frame<'_>, scene: &Scene) {
    let area = frame.area();
    let (width, height) = field_size(scene.board);

    if area.width < width || area.height < height {
        render_too_small(frame, area, width, height);
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [play_area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);

    let block = Block::bordered()
        .border_style(Style::new().fg(BORDER_COLOR))
        .style(Style::new().bg(scene.background));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let buffer = frame.buffer_mut();
    for (cell, color) in scene.painted_cells() {
        let Some((x, y)) = board_to_terminal(inner, scene.board, cell) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(color).bg(scene.background));
    }
}

/// Terminal size of the bordered play field.
#[must_use]
pub fn field_size(board: BoardSize) -> (u16, u16) {
    let cols = u16::try_from(board.cols()).unwrap_or(u16::MAX);
    let rows = u16::try_from(board.rows()).unwrap_or(u16::MAX);
    (
        cols.saturating_mul(CELL_COLUMNS).saturating_add(2),
        rows.saturating_add(2),
    )
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
    ];
    let [row] = Layout::vertical([Constraint::Length(2)])
        .flex(Flex::Center)
        .areas(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::Yellow)),
        row,
    );
}

fn board_to_terminal(inner: Rect, board: BoardSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_on_board(board) {
        return None;
    }

    let col = u16::try_from(cell.x / board.cell_size()).ok()?;
    let row = u16::try_from(cell.y / board.cell_size()).ok()?;

    let x = inner.x.saturating_add(col.saturating_mul(CELL_COLUMNS));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
