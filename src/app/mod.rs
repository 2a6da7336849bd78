//! Application state and logic for the Li-Stick terminal site.
//!
//! - [`types`] - [`Page`] and [`Focus`]
//! - [`messages`] - [`AppMessage`] results from background submissions
//! - [`navigation`] - page changes and carousel mounting
//! - [`actions`] - form submissions and carousel controls
//! - [`input`] - key, mouse and paste handling
//! - [`handlers`] - async message handling
//! - [`event_loop`] - the frame/event/message loop the binary runs

mod actions;
pub mod event_loop;
mod handlers;
mod input;
mod messages;
mod navigation;
mod types;

use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

pub use messages::AppMessage;
pub use types::{Focus, Page};

use crate::adapters::TerminalPlatform;
use crate::carousel::Carousel;
use crate::content::ROTATE_EVERY_SECS;
use crate::forms::{ContactForm, NewsletterForm};
use crate::startup::{SiteConfig, StoreKind};
use crate::traits::DocumentStore;
use crate::ui::interaction::HitAreaRegistry;

/// Represents the state of the application
pub struct App {
    pub page: Page,
    pub focus: Focus,
    pub should_quit: bool,
    /// Redraw on the next frame
    pub needs_redraw: bool,
    /// Carousel of the current page; mounted on entry, dropped on leave
    pub carousel: Option<Carousel>,
    pub newsletter: NewsletterForm,
    pub contact: ContactForm,
    pub hit_registry: HitAreaRegistry,
    /// Where the carousel was last drawn
    pub carousel_area: Option<Rect>,
    pub hovering_carousel: bool,
    /// Last reported mouse position
    pub pointer: Option<(u16, u16)>,
    pub platform: TerminalPlatform,
    pub site: SiteConfig,
    pub store: Arc<dyn DocumentStore>,
    pub store_kind: StoreKind,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Scroll offset of the page body
    pub scroll: u16,
    /// Set during render
    pub max_scroll: u16,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub tick_count: u64,
    pub started_at: Instant,
    rotation_step: u64,
}

impl App {
    pub fn new(
        site: SiteConfig,
        store: Arc<dyn DocumentStore>,
        store_kind: StoreKind,
        initial_page: Page,
    ) -> Self {
        Self::new_at(site, store, store_kind, initial_page, Instant::now())
    }

    /// Construct with an explicit start time.
    pub fn new_at(
        site: SiteConfig,
        store: Arc<dyn DocumentStore>,
        store_kind: StoreKind,
        initial_page: Page,
        now: Instant,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let platform = TerminalPlatform::new(site.reduced_motion);

        let mut app = Self {
            page: initial_page,
            focus: Focus::default(),
            should_quit: false,
            needs_redraw: true,
            carousel: None,
            newsletter: NewsletterForm::new(),
            contact: ContactForm::new(),
            hit_registry: HitAreaRegistry::new(),
            carousel_area: None,
            hovering_carousel: false,
            pointer: None,
            platform,
            site,
            store,
            store_kind,
            message_rx: Some(message_rx),
            message_tx,
            scroll: 0,
            max_scroll: 0,
            terminal_width: 80,
            terminal_height: 24,
            tick_count: 0,
            started_at: now,
            rotation_step: 0,
        };
        app.carousel = app.mount_carousel(initial_page, now);
        app
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Seconds since start, for the rotating hero word.
    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started_at).as_secs()
    }

    /// Advance time-driven state. Called every frame.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        let mut changed = false;
        if let Some(carousel) = self.carousel.as_mut() {
            changed |= carousel.tick(now);
        }
        changed |= self.newsletter.tick(now);
        changed |= self.contact.tick(now);

        // Spinner and thank-you countdown animate every frame.
        changed |= self.newsletter.status().is_submitting()
            || self.contact.status().is_submitting()
            || self.contact.is_submitted();

        let step = self.elapsed_secs(now) / ROTATE_EVERY_SECS;
        if step != self.rotation_step {
            self.rotation_step = step;
            changed = true;
        }

        if changed {
            self.mark_dirty();
        }
    }
}
