//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Alternate screen, so the shell's content comes back on exit
/// - Bracketed paste, for pasting into form fields
/// - Mouse capture, for carousel clicks, hover and swipes
/// - Focus change reporting, which drives carousel visibility
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture,
        EnableFocusChange
    )
}

/// Leave TUI mode and restore the terminal.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(
        writer,
        DisableFocusChange,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
