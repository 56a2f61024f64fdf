use ratatui::style::Color;

use crate::error::BoardError;
use crate::snake::Cell;

/// Side length of one grid cell, in board units.
pub const CELL_SIZE: i32 = 20;

/// Board width in board units (32 cells).
pub const BOARD_WIDTH: i32 = 640;

/// Board height in board units (24 cells).
pub const BOARD_HEIGHT: i32 = 480;

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE: u32 = 10;

/// Highest tick rate accepted on the command line.
pub const MAX_TICK_RATE: u32 = 60;

/// Solid color of every snake segment.
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Solid color of the apple.
pub const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

/// Color the play field is cleared to before each frame.
pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);

/// Border color around the play field.
pub const BORDER_COLOR: Color = Color::DarkGray;

/// Glyph pair used to draw one cell; a terminal character is roughly twice as
/// tall as it is wide, so a cell spans two columns.
pub const GLYPH_CELL: &str = "██";

/// Terminal columns occupied by one cell.
pub const CELL_COLUMNS: u16 = 2;

/// Board geometry in board units.
///
/// Width and height are always positive multiples of `cell_size`, which keeps
/// every cell produced by movement and apple placement grid-aligned.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardSize {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl BoardSize {
    /// The 640×480 board with 20-unit cells.
    pub const STANDARD: Self = Self {
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
        cell_size: CELL_SIZE,
    };

    /// Validates and builds a board.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any dimension is not positive, or if the width or
    /// height is not a whole number of cells.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 || cell_size <= 0 {
            return Err(BoardError::ZeroDimension {
                width,
                height,
                cell_size,
            });
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(BoardError::Unaligned {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    #[must_use]
    pub fn width(self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of cell columns.
    #[must_use]
    pub fn cols(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::try_from(self.cols() * self.rows()).unwrap_or(0)
    }

    /// Returns the cell at grid column `col` and row `row`.
    #[must_use]
    pub fn cell_at(self, col: i32, row: i32) -> Cell {
        Cell {
            x: col * self.cell_size,
            y: row * self.cell_size,
        }
    }

    /// The grid-aligned centre cell, where the snake spawns.
    #[must_use]
    pub fn centre(self) -> Cell {
        self.cell_at(self.cols() / 2, self.rows() / 2)
    }

    /// Iterates over every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| self.cell_at(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::BoardSize;
    use crate::error::BoardError;
    use crate::snake::Cell;

    #[test]
    fn standard_board_is_32_by_24() {
        let board = BoardSize::STANDARD;

        assert_eq!(board.cols(), 32);
        assert_eq!(board.rows(), 24);
        assert_eq!(board.total_cells(), 768);
        assert_eq!(board.cells().count(), 768);
    }

    #[test]
    fn spawn_cell_is_board_centre() {
        assert_eq!(BoardSize::STANDARD.centre(), Cell { x: 320, y: 240 });
    }

    #[test]
    fn new_rejects_unaligned_board() {
        assert_eq!(
            BoardSize::new(650, 480, 20),
            Err(BoardError::Unaligned {
                width: 650,
                height: 480,
                cell_size: 20,
            })
        );
    }

    #[test]
    fn new_rejects_empty_board() {
        assert!(matches!(
            BoardSize::new(0, 480, 20),
            Err(BoardError::ZeroDimension { .. })
        ));
        assert!(matches!(
            BoardSize::new(640, 480, 0),
            Err(BoardError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn new_accepts_standard_dimensions() {
        assert_eq!(BoardSize::new(640, 480, 20), Ok(BoardSize::STANDARD));
    }
}
