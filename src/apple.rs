use rand::Rng;
use ratatui::style::Color;

use crate::config::{APPLE_COLOR, BoardSize};
use crate::snake::{Cell, Snake};

/// Where a new apple may be placed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ApplePlacement {
    /// Any cell on the board, including cells under the snake.
    #[default]
    Uniform,
    /// Only cells the snake does not occupy. Falls back to [`Self::Uniform`]
    /// when the snake covers the whole board.
    FreeCell,
}

/// The apple currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    /// Creates an apple at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates an apple at a random cell chosen by `placement`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        board: BoardSize,
        snake: &Snake,
        placement: ApplePlacement,
    ) -> Self {
        let mut apple = Self::at(board.cell_at(0, 0));
        apple.randomize_position(rng, board, snake, placement);
        apple
    }

    /// Moves the apple to a new random cell chosen by `placement`.
    pub fn randomize_position<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: BoardSize,
        snake: &Snake,
        placement: ApplePlacement,
    ) {
        self.position = match placement {
            ApplePlacement::Uniform => random_cell(rng, board),
            ApplePlacement::FreeCell => {
                free_cell(rng, board, snake).unwrap_or_else(|| random_cell(rng, board))
            }
        };
    }

    /// Fixed apple color.
    #[must_use]
    pub fn color(self) -> Color {
        APPLE_COLOR
    }
}

/// Picks a cell uniformly over the whole board.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: BoardSize) -> Cell {
    let col = rng.gen_range(0..board.cols());
    let row = rng.gen_range(0..board.rows());
    board.cell_at(col, row)
}

/// Picks a cell uniformly over the cells `snake` leaves free, or `None` when
/// the board is full.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, board: BoardSize, snake: &Snake) -> Option<Cell> {
    let mut candidates = Vec::with_capacity(board.total_cells().saturating_sub(snake.len()));
    candidates.extend(board.cells().filter(|cell| !snake.occupies(*cell)));

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
