//! Click action handler.
//!
//! Processes click actions dispatched from the hit area registry and turns
//! them into App state changes.

use std::time::Instant;

use super::hit_area::ClickAction;
use crate::app::{App, Focus};

/// Handle a click action by updating App state.
///
/// Called from the event loop when a left click lands on a registered hit
/// area.
pub fn handle_click_action(app: &mut App, action: ClickAction, now: Instant) {
    app.mark_dirty();

    match action {
        ClickAction::NavigatePage(page) => {
            app.navigate_to(page, now);
            tracing::debug!("Click: NavigatePage({})", page.title());
        }

        // =====================================================================
        // Carousel
        // =====================================================================
        ClickAction::CarouselPrev => {
            app.carousel_previous(now);
            tracing::debug!("Click: CarouselPrev");
        }
        ClickAction::CarouselNext => {
            app.carousel_next(now);
            tracing::debug!("Click: CarouselNext");
        }
        ClickAction::CarouselDot(index) => {
            app.carousel_go_to(index, now);
            tracing::debug!("Click: CarouselDot({})", index);
        }
        ClickAction::ToggleAutoplay => {
            app.toggle_autoplay(now);
            tracing::debug!("Click: ToggleAutoplay");
        }

        // =====================================================================
        // Newsletter
        // =====================================================================
        ClickAction::FocusNewsletter => {
            app.focus = Focus::Newsletter;
            tracing::debug!("Click: FocusNewsletter");
        }
        ClickAction::SubmitNewsletter => {
            app.submit_newsletter();
            tracing::debug!("Click: SubmitNewsletter");
        }

        // =====================================================================
        // Contact
        // =====================================================================
        ClickAction::FocusContactField(field) => {
            app.focus = Focus::Contact;
            app.contact.set_focus(field);
            tracing::debug!("Click: FocusContactField({:?})", field);
        }
        ClickAction::CycleCountry => {
            app.focus = Focus::Contact;
            app.contact.next_country();
            tracing::debug!("Click: CycleCountry -> {}", app.contact.country().iso2);
        }
        ClickAction::SubmitContact => {
            app.focus = Focus::Contact;
            app.submit_contact_form();
            tracing::debug!("Click: SubmitContact");
        }
        ClickAction::SendAnother => {
            app.send_another();
            tracing::debug!("Click: SendAnother");
        }

        ClickAction::ToggleMotion => {
            app.toggle_reduced_motion();
            tracing::debug!("Click: ToggleMotion");
        }
    }
}
