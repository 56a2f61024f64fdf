//! Render data handed from the game state to a drawing backend.
//!
//! A backend draws every cell of every sprite as a filled
//! `cell_size × cell_size` square at the cell's board coordinates, on top of a
//! field cleared to `background`, in sprite order.

use ratatui::style::Color;

use crate::config::BoardSize;
use crate::snake::Cell;

/// The kinds of things that appear on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Entity {
    Snake,
    Apple,
}

/// A run of same-colored cells belonging to one entity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sprite {
    pub entity: Entity,
    /// For the snake, head first.
    pub cells: Vec<Cell>,
    pub color: Color,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub board: BoardSize,
    pub background: Color,
    pub sprites: Vec<Sprite>,
}

impl Scene {
    /// Iterates over every `(cell, color)` pair in draw order.
    pub fn painted_cells(&self) -> impl Iterator<Item = (Cell, Color)> + '_ {
        self.sprites
            .iter()
            .flat_map(|sprite| sprite.cells.iter().map(move |cell| (*cell, sprite.color)))
    }
}
