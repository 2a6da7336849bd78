//! Status Indicator Component
//!
//! One-line submission status under a form: spinner while sending, then a
//! success or error message.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::forms::SubmitStatus;
use crate::ui::theme::{COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Frames per spinner step at the 16 ms tick.
const TICKS_PER_FRAME: u64 = 6;

/// Spinner character for a tick count.
pub fn spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Status line for `status`, or `None` when idle.
pub fn render_submit_status(
    status: &SubmitStatus,
    success_text: &str,
    tick: u64,
) -> Option<Line<'static>> {
    match status {
        SubmitStatus::Idle => None,
        SubmitStatus::Submitting => Some(Line::from(vec![
            Span::styled(format!("{} ", spinner_char(tick)), Style::default().fg(COLOR_PENDING)),
            Span::styled("Sending...", Style::default().fg(COLOR_PENDING)),
        ])),
        SubmitStatus::Success => Some(Line::from(vec![
            Span::styled("\u{2713} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                success_text.to_string(),
                Style::default()
                    .fg(COLOR_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
        SubmitStatus::Error(message) => Some(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ])),
    }
}
