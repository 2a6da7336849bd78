//! Navigation methods for the App.

use std::time::Instant;

use crate::carousel::Carousel;
use crate::content::{feature_slides, home_slides};
use crate::forms::ContactField;

use super::{App, Focus, Page};

/// Rows moved per scroll step.
pub const SCROLL_STEP: u16 = 3;

impl App {
    /// Build the carousel hosted by `page`, if any.
    ///
    /// A carousel that cannot be built is logged and left out; the page
    /// still renders.
    pub(crate) fn mount_carousel(&self, page: Page, now: Instant) -> Option<Carousel> {
        let (slides, config) = match page {
            Page::Home => (home_slides(), self.site.home_carousel.clone()),
            Page::Features => (feature_slides(), self.site.features_carousel.clone()),
            _ => return None,
        };
        match Carousel::new(slides, config, &self.platform.ports(), now) {
            Ok(carousel) => Some(carousel),
            Err(err) => {
                tracing::warn!(page = page.title(), "Carousel not mounted: {}", err);
                None
            }
        }
    }

    /// Switch pages. Leaving a page drops its carousel.
    pub fn navigate_to(&mut self, page: Page, now: Instant) {
        if page == self.page {
            return;
        }
        tracing::debug!(from = self.page.title(), to = page.title(), "Navigate");

        // Drop first so the old subscriptions are gone before new ones register.
        self.carousel = None;
        self.carousel_area = None;
        self.hovering_carousel = false;

        self.page = page;
        self.scroll = 0;
        self.max_scroll = 0;
        self.focus = Focus::Page;
        self.carousel = self.mount_carousel(page, now);
        self.mark_dirty();
    }

    pub fn next_page(&mut self, now: Instant) {
        self.navigate_to(self.page.next(), now);
    }

    pub fn prev_page(&mut self, now: Instant) {
        self.navigate_to(self.page.prev(), now);
    }

    /// Cycle focus: page, then the contact form (on the contact page), then
    /// the newsletter field.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Page if self.page == Page::Contact && !self.contact.is_submitted() => {
                self.contact.set_focus(ContactField::Name);
                Focus::Contact
            }
            Focus::Page => Focus::Newsletter,
            Focus::Contact => Focus::Newsletter,
            Focus::Newsletter => Focus::Page,
        };
        self.mark_dirty();
    }

    /// Leave text entry.
    pub fn release_focus(&mut self) {
        if self.focus != Focus::Page {
            self.focus = Focus::Page;
            self.mark_dirty();
        }
    }

    pub fn scroll_down(&mut self, rows: u16) {
        let target = self.scroll.saturating_add(rows).min(self.max_scroll);
        if target != self.scroll {
            self.scroll = target;
            self.mark_dirty();
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        let target = self.scroll.saturating_sub(rows);
        if target != self.scroll {
            self.scroll = target;
            self.mark_dirty();
        }
    }
}
