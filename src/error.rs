use std::io;

use thiserror::Error;

/// Invalid board geometry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height}, cell size {cell_size})")]
    ZeroDimension {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("board {width}x{height} is not a whole number of {cell_size}-unit cells")]
    Unaligned {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}

/// Fatal errors surfaced by the game binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Board(#[from] BoardError),
}
