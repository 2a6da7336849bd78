//! UI rendering for the Li-Stick site
//!
//! Every frame is laid out as:
//!
//! ```text
//! ┌ header: brand + page tabs ──────────────┐
//! │ body: hero, carousel, scrolling content │
//! ├ footer: newsletter, contact details ────┤
//! └ status bar: key hints, motion toggle ───┘
//! ```
//!
//! ## Responsive Layout System
//!
//! Render functions receive a [`LayoutContext`] built from the frame size and
//! use it for every sizing decision: whether the brand line shows, how tall
//! the carousel is, whether split panels stack, whether form fields are boxed.
//!
//! ## Hit Areas
//!
//! The [`HitAreaRegistry`](interaction::HitAreaRegistry) is cleared at the start
//! of each frame and refilled as components draw, so mouse handling always
//! matches what is on screen.

pub mod carousel_view;
pub mod components;
mod footer;
mod header;
pub mod interaction;
pub mod layout;
mod pages;
mod status_bar;
pub mod theme;

use std::time::Instant;

use ratatui::{layout::Rect, Frame};

pub use carousel_view::{render_carousel, CarouselWidget};
pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use pages::wrapped_height;

use crate::app::App;
use footer::render_footer;
use header::render_header;
use pages::render_page;
use status_bar::render_status_bar;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole site for the current page.
pub fn render(frame: &mut Frame, app: &mut App) {
    render_at(frame, app, Instant::now());
}

/// Render with an explicit clock, for deterministic frames.
pub fn render_at(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    app.hit_registry.clear();
    app.terminal_width = area.width;
    app.terminal_height = area.height;
    let ctx = LayoutContext::new(area.width, area.height);

    let header_height = ctx.header_height().min(area.height);
    let status_height = u16::from(area.height > header_height);
    let footer_height = ctx
        .footer_height()
        .min(area.height - header_height - status_height);
    let body_height = area.height - header_height - status_height - footer_height;

    let header = Rect { height: header_height, ..area };
    let body = Rect {
        y: header.bottom(),
        height: body_height,
        ..area
    };
    let footer = Rect {
        y: body.bottom(),
        height: footer_height,
        ..area
    };
    let status = Rect {
        y: footer.bottom(),
        height: status_height,
        ..area
    };

    // Body first so chrome hit areas win where they touch.
    render_page(frame, body, app, now, &ctx);
    render_header(frame, header, app, &ctx);
    render_footer(frame, footer, app, &ctx);
    render_status_bar(frame, status, app, &ctx);

    app.refresh_carousel_hover(now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_on;
    use crate::app::Page;
    use crate::ui::interaction::ClickAction;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16, now: Instant) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render_at(frame, app, now)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_render_records_terminal_size() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Home, now);
        draw(&mut app, 100, 30, now);
        assert_eq!((app.terminal_width, app.terminal_height), (100, 30));
    }

    #[test]
    fn test_render_home_screen() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Home, now);
        let rows = draw(&mut app, 120, 40, now);

        assert!(rows[0].contains("Li-Stick"));
        assert!(rows[1].contains("▶ 1 Home"));
        assert!(rows[39].contains("q quit"));
        assert!(rows.join("\n").contains("Stay updated"));
        assert!(app.carousel_area.is_some());
    }

    #[test]
    fn test_every_page_at_every_size() {
        let now = Instant::now();
        for page in Page::ALL {
            for (w, h) in [(40, 10), (60, 16), (80, 24), (120, 40), (200, 60), (1, 1)] {
                let (mut app, _store) = app_on(page, now);
                draw(&mut app, w, h, now);
            }
        }
    }

    #[test]
    fn test_registry_is_rebuilt_each_frame() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Home, now);
        draw(&mut app, 120, 40, now);
        let home_areas = app.hit_registry.len();

        app.navigate_to(Page::About, now);
        draw(&mut app, 120, 40, now);
        assert!(app.hit_registry.len() < home_areas);
        assert_eq!(app.hit_registry.hit_test(5, 20), None);
    }

    #[test]
    fn test_tab_click_navigates() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Home, now);
        let rows = draw(&mut app, 120, 40, now);

        let byte = rows[1].find("Contact").unwrap();
        let x = rows[1][..byte].chars().count() as u16;
        let action = app.hit_registry.hit_test(x, 1).unwrap();
        assert_eq!(action, ClickAction::NavigatePage(Page::Contact));

        crate::ui::interaction::handle_click_action(&mut app, action, now);
        assert_eq!(app.page, Page::Contact);
        assert!(app.carousel.is_none());
    }
}
