//! Form submissions and carousel controls for the App.
//!
//! Submissions run on a spawned task and report back through
//! [`AppMessage`](super::AppMessage); everything else mutates state in place.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::adapters::user_agent;
use crate::carousel::Direction;
use crate::forms::{submit_contact, subscribe};
use crate::ui::interaction::rect_contains;

use super::{App, AppMessage, Focus};

impl App {
    // ========================================================================
    // Forms
    // ========================================================================

    /// Validate the footer email and start the signup.
    pub fn submit_newsletter(&mut self) {
        self.mark_dirty();
        let email = match self.newsletter.begin_submit() {
            Ok(email) => email,
            Err(err) => {
                tracing::debug!(code = err.error_code(), "Newsletter not submitted: {}", err);
                return;
            }
        };

        let store = self.store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = subscribe(store.as_ref(), &email, &user_agent()).await;
            let _ = tx.send(AppMessage::NewsletterResult(result));
        });
    }

    /// Validate the contact form and start the submission.
    pub fn submit_contact_form(&mut self) {
        self.mark_dirty();
        let request = match self.contact.begin_submit() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(code = err.error_code(), "Contact form not submitted: {}", err);
                return;
            }
        };

        let store = self.store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = submit_contact(store.as_ref(), request).await;
            let _ = tx.send(AppMessage::ContactResult(result));
        });
    }

    /// Close the thank-you panel and return to an empty form.
    pub fn send_another(&mut self) {
        self.contact.reset();
        self.focus = Focus::Contact;
        self.mark_dirty();
    }

    // ========================================================================
    // Carousel
    // ========================================================================

    pub fn carousel_next(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            if carousel.next(now) {
                tracing::debug!(index = carousel.index(), "Carousel next");
                self.mark_dirty();
            }
        }
    }

    pub fn carousel_previous(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            if carousel.previous(now) {
                tracing::debug!(index = carousel.index(), "Carousel previous");
                self.mark_dirty();
            }
        }
    }

    pub fn carousel_go_to(&mut self, index: usize, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            match carousel.go_to(index, now) {
                Ok(true) => self.mark_dirty(),
                Ok(false) => {}
                Err(err) => tracing::debug!("Ignoring dot {}: {}", index, err),
            }
        }
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            let enabled = carousel.toggle_autoplay(now);
            tracing::debug!(enabled, "Autoplay toggled");
            self.mark_dirty();
        }
    }

    /// Flip the reduced-motion preference. Mounted carousels hear the change
    /// on their next tick.
    pub fn toggle_reduced_motion(&mut self) {
        let reduced = self.platform.motion.toggle();
        self.site.reduced_motion = reduced;
        self.mark_dirty();
    }

    /// Terminal focus changes drive carousel visibility.
    ///
    /// Losing focus also drops a drag in progress, since the release will
    /// not be reported.
    pub fn set_terminal_focus(&mut self, focused: bool) {
        if focused {
            self.platform.visibility.focus_gained();
        } else {
            self.platform.visibility.focus_lost();
            if let Some(carousel) = self.carousel.as_mut() {
                carousel.pointer_cancel();
            }
        }
    }

    fn carousel_rect(&self) -> Option<Rect> {
        self.carousel.as_ref().and(self.carousel_area)
    }

    /// Track the pointer entering or leaving the carousel.
    pub fn update_carousel_hover(&mut self, column: u16, row: u16, now: Instant) {
        let inside = self
            .carousel_rect()
            .is_some_and(|rect| rect_contains(rect, column, row));
        if inside == self.hovering_carousel {
            return;
        }
        self.hovering_carousel = inside;
        if let Some(carousel) = self.carousel.as_mut() {
            let changed = if inside {
                carousel.hover_enter(now)
            } else {
                carousel.hover_leave(now)
            };
            if changed {
                self.mark_dirty();
            }
        }
    }

    /// Re-check hover against where the carousel was just drawn.
    ///
    /// A resize or page change can move the carousel under a pointer that
    /// has not moved, and no motion event will report it.
    pub fn refresh_carousel_hover(&mut self, now: Instant) {
        if let Some((column, row)) = self.pointer {
            self.update_carousel_hover(column, row, now);
        }
    }

    /// Mouse pressed. Starts a swipe when inside the carousel.
    pub fn carousel_pointer_down(&mut self, column: u16, row: u16) {
        let Some(rect) = self.carousel_rect() else {
            return;
        };
        if !rect_contains(rect, column, row) {
            return;
        }
        if let Some(carousel) = self.carousel.as_mut() {
            let x = carousel.config().column_to_px(column);
            carousel.pointer_down(x);
        }
    }

    /// Mouse released. Completes a swipe wherever the pointer ends up.
    pub fn carousel_pointer_up(&mut self, column: u16, now: Instant) -> Option<Direction> {
        let carousel = self.carousel.as_mut()?;
        if !carousel.is_swiping() {
            return None;
        }
        let x = carousel.config().column_to_px(column);
        let direction = carousel.pointer_up(x, now);
        if let Some(direction) = direction {
            tracing::debug!(?direction, index = carousel.index(), "Carousel swipe");
            self.mark_dirty();
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_support::app_on;
    use super::super::Page;
    use super::*;
    use crate::forms::{SubmitStatus, CONTACT_COLLECTION, NEWSLETTER_COLLECTION};

    fn place_carousel(app: &mut App) {
        app.carousel_area = Some(Rect::new(10, 5, 40, 12));
    }

    #[test]
    fn test_swipe_right_goes_backward() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        place_carousel(&mut app);

        // 8 px per column: 7 columns = 56 px
        app.carousel_pointer_down(20, 8);
        let direction = app.carousel_pointer_up(27, now);
        assert_eq!(direction, Some(Direction::Backward));
        let carousel = app.carousel.as_ref().unwrap();
        assert_eq!(carousel.index(), carousel.len() - 1);
    }

    #[test]
    fn test_short_drag_is_a_tap() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        place_carousel(&mut app);

        // 4 columns = 32 px, under the 40 px threshold
        app.carousel_pointer_down(20, 8);
        assert_eq!(app.carousel_pointer_up(16, now), None);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 0);
    }

    #[test]
    fn test_press_outside_carousel_does_not_swipe() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        place_carousel(&mut app);

        app.carousel_pointer_down(2, 2);
        assert_eq!(app.carousel_pointer_up(30, now), None);
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        place_carousel(&mut app);
        let interval = app.site.home_carousel.interval();

        app.update_carousel_hover(15, 6, now);
        assert!(app.hovering_carousel);
        assert!(app.carousel.as_ref().unwrap().is_paused());

        app.tick(now + interval * 3);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 0);

        let left_at = now + interval * 3;
        app.update_carousel_hover(0, 0, left_at);
        assert!(!app.hovering_carousel);
        app.tick(left_at + interval);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 1);
    }

    #[test]
    fn test_hover_follows_carousel_moved_under_still_pointer() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);

        // No pointer seen yet
        place_carousel(&mut app);
        app.refresh_carousel_hover(now);
        assert!(!app.hovering_carousel);

        app.pointer = Some((15, 6));
        app.refresh_carousel_hover(now);
        assert!(app.hovering_carousel);
        assert!(app.carousel.as_ref().unwrap().is_paused());

        // Relaid out below the pointer
        app.carousel_area = Some(Rect::new(10, 20, 40, 12));
        app.refresh_carousel_hover(now);
        assert!(!app.hovering_carousel);
        assert!(app.carousel.as_ref().unwrap().is_playing());
    }

    #[test]
    fn test_focus_loss_pauses_autoplay() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        let interval = app.site.home_carousel.interval();

        app.set_terminal_focus(false);
        app.tick(now + Duration::from_millis(1));
        assert!(app.carousel.as_ref().unwrap().is_paused());
        app.tick(now + interval * 2);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 0);

        app.set_terminal_focus(true);
        let back = now + interval * 2;
        app.tick(back);
        app.tick(back + interval);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 1);
    }

    #[test]
    fn test_reduced_motion_toggle_stops_autoplay() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Home, now);
        app.toggle_reduced_motion();
        app.tick(now + Duration::from_millis(16));
        let carousel = app.carousel.as_ref().unwrap();
        assert!(!carousel.autoplay_enabled());

        app.toggle_reduced_motion();
        app.tick(now + Duration::from_millis(32));
        assert!(!app.carousel.as_ref().unwrap().autoplay_enabled());
    }

    #[test]
    fn test_dot_jump_and_controls() {
        let now = Instant::now();
        let (mut app, _) = app_on(Page::Features, now);
        app.carousel_go_to(3, now);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 3);
        app.carousel_go_to(99, now);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 3);
        app.carousel_previous(now);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 2);
        app.carousel_next(now);
        assert_eq!(app.carousel.as_ref().unwrap().index(), 3);
    }

    #[tokio::test]
    async fn test_newsletter_submission_round_trip() {
        let now = Instant::now();
        let (mut app, store) = app_on(Page::Home, now);
        app.newsletter.email.insert_str("Reader@Example.com");

        app.submit_newsletter();
        assert_eq!(*app.newsletter.status(), SubmitStatus::Submitting);

        let msg = app.message_rx.as_mut().unwrap().recv().await.unwrap();
        app.handle_message(msg, now);
        assert_eq!(*app.newsletter.status(), SubmitStatus::Success);
        assert_eq!(store.ids(NEWSLETTER_COLLECTION), vec!["reader@example∙com"]);
    }

    #[tokio::test]
    async fn test_invalid_newsletter_email_never_spawns() {
        let (mut app, store) = app_on(Page::Home, Instant::now());
        app.newsletter.email.insert_str("not-an-email");
        app.submit_newsletter();
        assert!(app.newsletter.status().error_message().is_some());
        assert!(store.ids(NEWSLETTER_COLLECTION).is_empty());
    }

    #[tokio::test]
    async fn test_contact_submission_round_trip() {
        let now = Instant::now();
        let (mut app, store) = app_on(Page::Contact, now);
        app.contact.name.insert_str("Rima");
        app.contact.email.insert_str("rima@example.com");
        app.contact.phone.insert_str("81 699 932");
        app.contact.message.insert_str("Hello");

        app.submit_contact_form();
        let msg = app.message_rx.as_mut().unwrap().recv().await.unwrap();
        app.handle_message(msg, now);

        assert!(app.contact.is_submitted());
        assert_eq!(store.ids(CONTACT_COLLECTION), vec!["1 - Rima"]);

        app.send_another();
        assert!(!app.contact.is_submitted());
        assert_eq!(app.focus, Focus::Contact);
    }
}
