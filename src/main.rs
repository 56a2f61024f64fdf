use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use wrap_snake::apple::ApplePlacement;
use wrap_snake::config::{
    BOARD_HEIGHT, BOARD_WIDTH, BoardSize, CELL_SIZE, DEFAULT_TICK_RATE, MAX_TICK_RATE,
};
use wrap_snake::error::AppError;
use wrap_snake::game::GameState;
use wrap_snake::input::{GameInput, InputHandler};
use wrap_snake::terminal_runtime::TerminalSession;

/// Snake on a 32x24 wrap-around grid. Arrow keys or WASD steer; q or Esc quits.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Simulation speed in ticks per second.
    #[arg(
        long = "tick-rate",
        default_value_t = DEFAULT_TICK_RATE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TICK_RATE)),
    )]
    tick_rate: u32,

    /// Seed for apple placement, for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Never place an apple on a cell the snake occupies.
    #[arg(long = "avoid-snake")]
    avoid_snake: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The session is dropped inside `run`, so errors print to a restored terminal.
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("wrap-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let board = BoardSize::new(BOARD_WIDTH, BOARD_HEIGHT, CELL_SIZE)?;
    let placement = if cli.avoid_snake {
        ApplePlacement::FreeCell
    } else {
        ApplePlacement::Uniform
    };
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed, placement),
        None => GameState::new(board, placement),
    };

    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let tick_interval = Duration::from_secs(1) / cli.tick_rate;
    let mut next_tick = Instant::now() + tick_interval;

    session.draw(&state.scene())?;

    loop {
        let now = Instant::now();
        if now >= next_tick {
            let _ = state.tick();
            session.draw(&state.scene())?;
            next_tick = next_tick_after(next_tick, now, tick_interval);
            continue;
        }

        match input.poll_input(next_tick - now)? {
            Some(GameInput::Quit) => break,
            Some(game_input) => state.apply_input(game_input),
            None => {}
        }
    }

    Ok(())
}

/// Schedules the next tick on the fixed grid, skipping missed slots instead
/// of bursting to catch up.
fn next_tick_after(previous: Instant, now: Instant, interval: Duration) -> Instant {
    let next = previous + interval;
    if next <= now { now + interval } else { next }
}
