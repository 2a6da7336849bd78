//! Message handling for the App.

use std::time::Instant;

use super::{App, AppMessage, Focus};

impl App {
    /// Apply the result of a background submission.
    pub fn handle_message(&mut self, msg: AppMessage, now: Instant) {
        self.mark_dirty();
        match msg {
            AppMessage::NewsletterResult(result) => {
                if result.is_ok() && self.focus == Focus::Newsletter {
                    self.focus = Focus::Page;
                }
                self.newsletter.finish(result, now);
            }
            AppMessage::ContactResult(result) => {
                if let Ok(id) = &result {
                    tracing::info!(id = %id, "Contact request stored");
                    if self.focus == Focus::Contact {
                        self.focus = Focus::Page;
                    }
                }
                self.contact.finish(result, now);
            }
        }
    }
}
