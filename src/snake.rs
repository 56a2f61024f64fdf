use std::collections::VecDeque;
use std::ops::Add;

use ratatui::style::Color;

use crate::config::{BoardSize, SNAKE_COLOR};
use crate::input::{Direction, direction_change_is_valid};

/// Grid-aligned board position, in board units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Returns true when the cell lies on the board.
    #[must_use]
    pub fn is_on_board(self, board: BoardSize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board.width() && self.y < board.height()
    }

    /// Brings a cell that stepped off the board back onto the opposite edge.
    ///
    /// At most one axis is corrected per call, checked in the order x-high,
    /// x-low, y-high, y-low. A single-axis step can only leave the board
    /// across one edge, so this is a full wrap for movement.
    #[must_use]
    pub fn wrapped(self, board: BoardSize) -> Self {
        let Self { x, y } = self;
        if x >= board.width() {
            Self { x: 0, y }
        } else if x < 0 {
            Self {
                x: board.width() - board.cell_size(),
                y,
            }
        } else if y >= board.height() {
            Self { x, y: 0 }
        } else if y < 0 {
            Self {
                x,
                y: board.height() - board.cell_size(),
            }
        } else {
            self
        }
    }
}

impl Add for Cell {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Direction a fresh or reset snake travels in.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Snake body and movement latch.
///
/// `body` holds the head at the front. It never grows past `target_len`;
/// eating raises `target_len` and the body catches up one cell per move.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    target_len: usize,
    spawn: Cell,
}

impl Snake {
    /// Creates a one-cell snake at `spawn` heading right.
    #[must_use]
    pub fn new(spawn: Cell) -> Self {
        Self {
            body: VecDeque::from([spawn]),
            direction: INITIAL_DIRECTION,
            next_direction: None,
            target_len: 1,
            spawn,
        }
    }

    /// Creates a snake from explicit body segments (front is head) that resets
    /// to `spawn`.
    ///
    /// The target length is the number of segments. An empty segment list
    /// yields a one-cell snake at `spawn`.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction, spawn: Cell) -> Self {
        let mut body = VecDeque::from(segments);
        if body.is_empty() {
            body.push_back(spawn);
        }

        Self {
            target_len: body.len(),
            body,
            direction,
            next_direction: None,
            spawn,
        }
    }

    /// Latches a direction for the next move.
    ///
    /// Reversals of the current direction are dropped. Between two moves the
    /// last accepted request wins.
    pub fn set_direction(&mut self, requested: Direction) {
        if direction_change_is_valid(self.direction, requested) {
            self.next_direction = Some(requested);
        }
    }

    /// Applies one movement step.
    pub fn move_forward(&mut self, board: BoardSize) {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }

        let new_head = (self.head() + self.direction.displacement(board.cell_size())).wrapped(board);
        self.body.push_front(new_head);

        while self.body.len() > self.target_len {
            let _ = self.body.pop_back();
        }
    }

    /// Raises the target length by one cell.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// Returns the snake to a single cell at its spawn point, heading right.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.spawn);
        self.target_len = 1;
        self.direction = INITIAL_DIRECTION;
        self.next_direction = None;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        // The body is never empty: construction and reset both leave one cell.
        self.body.front().copied().unwrap_or(self.spawn)
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction latched for the next move, if any.
    #[must_use]
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Fixed snake color.
    #[must_use]
    pub fn color(&self) -> Color {
        SNAKE_COLOR
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
