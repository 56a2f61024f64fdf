use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Cell;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the one-cell displacement for this direction, in board units.
    #[must_use]
    pub fn displacement(self, cell_size: i32) -> Cell {
        match self {
            Self::Up => Cell { x: 0, y: -cell_size },
            Self::Down => Cell { x: 0, y: cell_size },
            Self::Left => Cell { x: -cell_size, y: 0 },
            Self::Right => Cell { x: cell_size, y: 0 },
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates a key press into a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };
    Some(input)
}

/// Reads terminal events and turns them into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for the next meaningful input.
    ///
    /// Returns `Ok(None)` when the timeout elapses or the event that arrived
    /// does not map to a game input (resize, mouse, unbound key).
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rstest::rstest;

    use super::{Direction, GameInput, direction_change_is_valid, map_key};
    use crate::snake::Cell;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[rstest]
    #[case(Direction::Up, Cell { x: 0, y: -20 })]
    #[case(Direction::Down, Cell { x: 0, y: 20 })]
    #[case(Direction::Left, Cell { x: -20, y: 0 })]
    #[case(Direction::Right, Cell { x: 20, y: 0 })]
    fn displacement_is_one_cell(#[case] direction: Direction, #[case] expected: Cell) {
        assert_eq!(direction.displacement(20), expected);
    }

    #[test]
    fn opposite_displacements_cancel() {
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let forward = direction.displacement(20);
            let back = direction.opposite().displacement(20);
            assert_eq!(forward + back, Cell { x: 0, y: 0 });
        }
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));
        assert!(!direction_change_is_valid(
            Direction::Right,
            Direction::Left
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[rstest]
    #[case(KeyCode::Up, Some(GameInput::Direction(Direction::Up)))]
    #[case(KeyCode::Down, Some(GameInput::Direction(Direction::Down)))]
    #[case(KeyCode::Left, Some(GameInput::Direction(Direction::Left)))]
    #[case(KeyCode::Right, Some(GameInput::Direction(Direction::Right)))]
    #[case(KeyCode::Char('w'), Some(GameInput::Direction(Direction::Up)))]
    #[case(KeyCode::Char('D'), Some(GameInput::Direction(Direction::Right)))]
    #[case(KeyCode::Esc, Some(GameInput::Quit))]
    #[case(KeyCode::Char('q'), Some(GameInput::Quit))]
    #[case(KeyCode::Enter, None)]
    #[case(KeyCode::Char('x'), None)]
    fn keys_map_to_inputs(#[case] code: KeyCode, #[case] expected: Option<GameInput>) {
        assert_eq!(map_key(KeyEvent::new(code, KeyModifiers::NONE)), expected);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(GameInput::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(key), None);
    }
}
