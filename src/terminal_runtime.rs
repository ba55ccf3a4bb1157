use std::io::{self, Stdout};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Theme;
use crate::error::AppError;
use crate::game::GameState;
use crate::renderer;

/// Raw-mode alternate screen holding the game for one session.
///
/// Dropping the session puts the terminal back the way it was found.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Takes over the terminal. Any step that fails rolls back the ones
    /// before it.
    pub fn enter() -> Result<Self, AppError> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| restore())?;
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    /// Draws one frame of `state`.
    pub fn draw_game<S>(&mut self, state: &GameState<S>, theme: &Theme) -> Result<(), AppError> {
        self.terminal
            .draw(|frame| renderer::render(frame, state, theme))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        debug!("terminal session closed");
    }
}

/// Chains a hook that leaves raw mode before the default panic output,
/// so the message lands on a usable screen.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore();
        default_hook(panic_info);
    }));
}

/// Leaves raw mode and the alternate screen, logging what could not be undone.
fn restore() {
    if let Err(error) = disable_raw_mode() {
        warn!("failed to leave raw mode: {error}");
    }

    if let Err(error) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
        warn!("failed to leave alternate screen: {error}");
    }
}
