//! Terminal lifecycle with RAII cleanup.
//!
//! ```no_run
//! use listick::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut term = TerminalManager::new()?;
//!     let terminal = term.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fmt::Display;
use std::io::{self, Stdout};

use crate::error::UiError;

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
///
/// Creating one enables raw mode and enters TUI mode; dropping it restores
/// the terminal. The panic hook from [`setup_panic_hook`] covers panics that
/// skip `Drop`.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    pub fn new() -> Result<Self, UiError> {
        enable_raw_mode().map_err(init_failed)?;
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<(), UiError> {
        self.guard.cleanup();
        self.terminal.show_cursor().map_err(restore_failed)
    }
}

fn init_failed(err: impl Display) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}

fn restore_failed(err: impl Display) -> UiError {
    UiError::TerminalRestoreFailed {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_failures_map_to_ui_errors() {
        let err = init_failed(io::Error::new(io::ErrorKind::Unsupported, "not a tty"));
        assert_eq!(
            err,
            UiError::TerminalInitFailed {
                message: "not a tty".into()
            }
        );
        assert!(!err.is_recoverable());

        let err = restore_failed(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.error_code(), "E_UI_TERM_RESTORE");
    }
}
