//! Common test utilities for integration tests.
//!
//! Fixtures for building an [`App`] on an in-memory store, carousels on a
//! scriptable platform, and plain-text snapshots of rendered frames.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{test_app, draw_lines};
//!
//! let (mut app, store) = test_app(Page::Home, Instant::now());
//! let lines = draw_lines(&mut app, 120, 40, now);
//! ```

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use listick::adapters::mock::{FakePlatform, InMemoryStore};
use listick::app::{App, Page};
use listick::carousel::{Carousel, CarouselConfig, Slide};
use listick::startup::{SiteConfig, StoreKind};
use listick::ui;
use ratatui::{backend::TestBackend, Terminal};

/// An app on `page` that writes to an in-memory store.
///
/// The store handle shares state with the one inside the app.
pub fn test_app(page: Page, now: Instant) -> (App, InMemoryStore) {
    test_app_with(SiteConfig::default(), page, now)
}

/// Like [`test_app`] with custom settings.
pub fn test_app_with(site: SiteConfig, page: Page, now: Instant) -> (App, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = App::new_at(
        site,
        Arc::new(store.clone()),
        StoreKind::Local {
            dir: PathBuf::from("/tmp/listick-integration"),
        },
        page,
        now,
    );
    (app, store)
}

/// `n` valid slides titled "Slide 0".."Slide n-1".
pub fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| {
            Slide::new(format!("assets/slide{}.png", i))
                .with_title(format!("Slide {}", i))
                .with_alt(format!("Slide {} photo", i))
        })
        .collect()
}

/// A carousel of `n` slides with the given interval, mounted on `platform`.
pub fn carousel(n: usize, interval_ms: u64, platform: &FakePlatform, now: Instant) -> Carousel {
    let config = CarouselConfig::default().with_interval_ms(interval_ms);
    Carousel::new(slides(n), config, &platform.ports(), now).unwrap()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Render one frame at `now` and return its rows as strings.
pub fn draw_lines(app: &mut App, width: u16, height: u16, now: Instant) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render_at(frame, app, now)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

/// Column of the first occurrence of `needle` in `line`, in cells.
pub fn column_of(line: &str, needle: &str) -> Option<u16> {
    line.find(needle)
        .map(|byte| line[..byte].chars().count() as u16)
}
