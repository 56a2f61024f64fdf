use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::{Apple, ApplePlacement};
use crate::config::{BACKGROUND_COLOR, BoardSize};
use crate::input::{Direction, GameInput};
use crate::scene::{Entity, Scene, Sprite};
use crate::snake::Snake;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub ate_apple: bool,
    pub reset: bool,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub tick_count: u64,
    board: BoardSize,
    placement: ApplePlacement,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(board: BoardSize, placement: ApplePlacement) -> Self {
        Self::with_rng(board, placement, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(board: BoardSize, seed: u64, placement: ApplePlacement) -> Self {
        Self::with_rng(board, placement, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: BoardSize, placement: ApplePlacement, mut rng: StdRng) -> Self {
        let snake = Snake::new(board.centre());
        let apple = Apple::spawn(&mut rng, board, &snake, placement);

        Self {
            snake,
            apple,
            tick_count: 0,
            board,
            placement,
            rng,
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.snake.set_direction(direction),
            GameInput::Quit => {}
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.tick_count += 1;
        self.snake.move_forward(self.board);

        if self.snake.head() == self.apple.position {
            self.snake.grow();
            self.apple
                .randomize_position(&mut self.rng, self.board, &self.snake, self.placement);
            outcome.ate_apple = true;
        }

        if self.snake.head_overlaps_body() {
            self.snake.reset();
            outcome.reset = true;
        }

        outcome
    }

    /// Builds the render data for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            board: self.board,
            background: BACKGROUND_COLOR,
            sprites: vec![
                Sprite {
                    entity: Entity::Snake,
                    cells: self.snake.segments().copied().collect(),
                    color: self.snake.color(),
                },
                Sprite {
                    entity: Entity::Apple,
                    cells: vec![self.apple.position],
                    color: self.apple.color(),
                },
            ],
        }
    }

    #[must_use]
    pub fn board(&self) -> BoardSize {
        self.board
    }
}

/// Latches `inputs` in order, then runs one tick on an owned state.
#[must_use]
pub fn step<I>(mut state: GameState, inputs: I) -> GameState
where
    I: IntoIterator<Item = Direction>,
{
    for direction in inputs {
        state.apply_input(GameInput::Direction(direction));
    }
    let _ = state.tick();
    state
}
