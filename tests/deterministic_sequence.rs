use wrap_snake::apple::{Apple, ApplePlacement};
use wrap_snake::config::BoardSize;
use wrap_snake::game::{GameState, step};
use wrap_snake::input::{Direction, GameInput};
use wrap_snake::snake::{Cell, Snake};

#[test]
fn stepwise_eat_wrap_and_self_collision() {
    let mut state = GameState::new_with_seed(BoardSize::STANDARD, 42, ApplePlacement::FreeCell);

    state.snake = Snake::from_segments(
        vec![Cell { x: 600, y: 100 }],
        Direction::Right,
        Cell { x: 320, y: 240 },
    );
    state.apple = Apple::at(Cell { x: 620, y: 100 });

    // Eat at the right edge.
    let outcome = state.tick();
    assert!(outcome.ate_apple);
    assert_eq!(state.snake.head(), Cell { x: 620, y: 100 });
    assert_eq!(state.snake.target_len(), 2);
    assert!(!state.snake.occupies(state.apple.position));

    // Wrap to the left edge and catch up to the new target length.
    state.apple = Apple::at(Cell { x: 0, y: 0 });
    state.tick();
    assert_eq!(state.snake.head(), Cell { x: 0, y: 100 });
    assert_eq!(state.snake.len(), 2);

    // Grow to five so a tight turn bites the body.
    state.snake.grow();
    state.snake.grow();
    state.snake.grow();
    for _ in 0..3 {
        state.tick();
    }
    assert_eq!(state.snake.len(), 5);
    assert_eq!(state.snake.head(), Cell { x: 60, y: 100 });

    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Left));
    state.tick();
    state.apply_input(GameInput::Direction(Direction::Up));
    let outcome = state.tick();

    assert!(outcome.reset);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Cell { x: 320, y: 240 });
    assert_eq!(state.snake.direction(), Direction::Right);
    assert_eq!(state.apple.position, Cell { x: 0, y: 0 });
    assert_eq!(state.tick_count, 8);
}

#[test]
fn pure_step_matches_in_place_ticks() {
    let inputs = [
        Some(Direction::Down),
        None,
        Some(Direction::Left),
        None,
        Some(Direction::Up),
        Some(Direction::Right),
    ];

    let mut stepped = GameState::new_with_seed(BoardSize::STANDARD, 7, ApplePlacement::Uniform);
    let mut ticked = stepped.clone();

    for input in inputs.iter().cycle().take(300) {
        stepped = step(stepped, *input);
        if let Some(direction) = input {
            ticked.apply_input(GameInput::Direction(*direction));
        }
        ticked.tick();

        assert_eq!(stepped.snake.head(), ticked.snake.head());
        assert_eq!(stepped.apple, ticked.apple);
    }
}
