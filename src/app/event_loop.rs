//! The main loop: frame ticks, terminal events and submission results.

use std::io;
use std::time::Instant;

use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

use super::App;
use crate::error::{ListickResult, UiError};
use crate::ui;

/// Run the site until the user quits.
///
/// The frame tick comes from one interval created up front, so a burst of
/// input (mouse motion reports every cell crossed) cannot hold it back.
pub async fn run<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: S,
) -> ListickResult<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    // Owned here so select! can borrow it alongside `app`
    let mut message_rx = app.message_rx.take();

    let mut ticker = tokio::time::interval(app.site.tick_rate());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Draw only when something changed. Cleared first so a change made
        // while drawing asks for another frame.
        if app.needs_redraw {
            app.needs_redraw = false;
            terminal
                .draw(|f| ui::render(f, &mut *app))
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })?;
        }

        tokio::select! {
            // Autoplay, transitions, form timers
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }

            // Keyboard, mouse, focus, resize and paste
            event = events.next() => {
                match event {
                    Some(Ok(event)) => app.handle_event(event, Instant::now()),
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => {
                        tracing::warn!("Terminal event stream closed");
                        return Err(UiError::EventStreamClosed.into());
                    }
                }
            }

            // Form submission results
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg, Instant::now());
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
