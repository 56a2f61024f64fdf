use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::renderer;
use crate::scene::Scene;

/// Concrete terminal type used by the game loop.
pub type GameTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode, alternate-screen terminal for one game session.
///
/// The terminal is restored on drop and, via a panic hook installed by
/// [`TerminalSession::enter`], before a panic message is printed.
pub struct TerminalSession {
    terminal: GameTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to the alternate screen and hides the cursor.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame of `scene`.
    pub fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, scene))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
