//! Page bodies
//!
//! Every page opens with a hero block. Text below it scrolls with
//! `app.scroll`; each render recomputes `app.max_scroll` from the wrapped
//! height of the content. Home and Features also draw their carousel and
//! record its area for hover and swipe hit-testing.

mod about;
mod contact;
mod features;
mod future_plans;
mod home;
mod impact;

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};
use crate::content::{rotating_word, Hero};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_HIGHLIGHT, COLOR_TEXT};

/// Draw the body of the current page into `area`.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    app.carousel_area = None;
    if area.height == 0 || area.width == 0 {
        app.max_scroll = 0;
        return;
    }
    match app.page {
        Page::Home => home::render(frame, area, app, now, ctx),
        Page::About => about::render(frame, area, app, now, ctx),
        Page::Features => features::render(frame, area, app, now, ctx),
        Page::Impact => impact::render(frame, area, app, now, ctx),
        Page::FuturePlans => future_plans::render(frame, area, app, now, ctx),
        Page::Contact => contact::render(frame, area, app, now, ctx),
    }
}

// ============================================================================
// Shared Building Blocks
// ============================================================================

/// Draw a hero block at the top of `area` and return the rows below it.
pub(crate) fn render_hero(
    frame: &mut Frame,
    area: Rect,
    hero: &Hero,
    elapsed_secs: u64,
    ctx: &LayoutContext,
) -> Rect {
    let height = ctx.hero_height().min(area.height);
    let hero_area = Rect { height, ..area };

    let mut lines = Vec::new();
    if !ctx.is_compact() {
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", hero.badge),
            Style::default().fg(COLOR_ACCENT),
        )));
    }

    let mut title = vec![Span::styled(
        hero.title,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if let Some(highlight) = hero.highlight {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            highlight,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(word) = rotating_word(hero, elapsed_secs) {
        title.push(Span::raw(" "));
        title.push(Span::styled(
            word,
            Style::default()
                .fg(COLOR_HIGHLIGHT)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(title));

    if !ctx.is_extra_small() {
        lines.push(Line::from(Span::styled(hero.subtitle, Style::default().fg(COLOR_TEXT))));
    }

    let inner = Rect {
        x: hero_area.x + 1,
        width: hero_area.width.saturating_sub(2),
        ..hero_area
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

    Rect {
        y: area.y + height,
        height: area.height - height,
        ..area
    }
}

/// Bold section heading preceded by a blank line.
pub(crate) fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
}

/// Plain body text.
pub(crate) fn body(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(COLOR_TEXT)))
}

/// Bullet with a highlighted title and dim description.
pub(crate) fn card(marker: &str, title: &str, desc: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                title.to_string(),
                Style::default().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(format!("  {}", desc), Style::default().fg(COLOR_TEXT))),
    ]
}

/// Rows `lines` take once word-wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line], width: u16) -> usize {
    let width = width as usize;
    if width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            let mut rows = 1;
            let mut col = 0;
            for word in text.split_whitespace() {
                let w = word.width();
                let needed = if col == 0 { w } else { col + 1 + w };
                if needed <= width {
                    col = needed;
                } else if w > width {
                    // Long words break mid-word.
                    rows += usize::from(col > 0) + (w - 1) / width;
                    col = w % width;
                } else {
                    rows += 1;
                    col = w;
                }
            }
            rows
        })
        .sum()
}

/// Scrollable text region. Updates `app.max_scroll` and clamps `app.scroll`.
pub(crate) fn render_scroll_body(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    lines: Vec<Line<'static>>,
) {
    if area.height == 0 || area.width < 3 {
        app.max_scroll = 0;
        return;
    }
    let text_area = Rect {
        x: area.x + 1,
        width: area.width - 2,
        ..area
    };
    let total = wrapped_height(&lines, text_area.width).min(u16::MAX as usize) as u16;
    app.max_scroll = total.saturating_sub(area.height);
    app.scroll = app.scroll.min(app.max_scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll, 0)),
        text_area,
    );

    let indicator_x = area.right() - 1;
    let buf = frame.buffer_mut();
    if app.scroll > 0 {
        buf.set_string(indicator_x, area.y, "↑", Style::default().fg(COLOR_DIM));
    }
    if app.scroll < app.max_scroll {
        buf.set_string(indicator_x, area.bottom() - 1, "↓", Style::default().fg(COLOR_DIM));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_on;
    use crate::content::{FEATURES_HERO, HOME_HERO};
    use ratatui::{backend::TestBackend, Terminal};

    pub(super) fn draw_page(app: &mut App, width: u16, height: u16, now: Instant) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let ctx = LayoutContext::new(width, height);
        app.hit_registry.clear();
        terminal
            .draw(|frame| render_page(frame, frame.area(), app, now, &ctx))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("one two three"), Line::default(), Line::from("x")];
        assert_eq!(wrapped_height(&lines, 80), 3);
        assert_eq!(wrapped_height(&lines, 7), 4);
        assert_eq!(wrapped_height(&[Line::from("abcdefghij")], 4), 3);
        assert_eq!(wrapped_height(&lines, 0), 3);
    }

    #[test]
    fn test_hero_rotates_words() {
        let render_at = |secs: u64| {
            let mut terminal = Terminal::new(TestBackend::new(120, 10)).unwrap();
            let ctx = LayoutContext::new(120, 40);
            terminal
                .draw(|frame| {
                    render_hero(frame, frame.area(), &HOME_HERO, secs, &ctx);
                })
                .unwrap();
            let buffer = terminal.backend().buffer().clone();
            (0..10u16)
                .map(|y| {
                    (0..120u16)
                        .map(|x| buffer[(x, y)].symbol().to_string())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert!(render_at(0).contains("Safety"));
        assert!(render_at(3).contains("Guidance"));
        assert!(render_at(0).contains("[ LiStick ]"));
    }

    #[test]
    fn test_hero_returns_remaining_rows() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let ctx = LayoutContext::new(120, 40);
        let mut rest = Rect::default();
        terminal
            .draw(|frame| {
                rest = render_hero(frame, Rect::new(0, 4, 80, 20), &FEATURES_HERO, 0, &ctx);
            })
            .unwrap();
        assert_eq!(rest, Rect::new(0, 9, 80, 15));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::FuturePlans, now);
        app.scroll = 500;
        draw_page(&mut app, 80, 20, now);
        assert!(app.max_scroll > 0);
        assert_eq!(app.scroll, app.max_scroll);
    }

    #[test]
    fn test_every_page_renders() {
        let now = Instant::now();
        for page in Page::ALL {
            let (mut app, _store) = app_on(page, now);
            let screen = draw_page(&mut app, 100, 30, now).join("\n");
            assert!(!screen.trim().is_empty(), "{:?} rendered nothing", page);
            assert_eq!(app.carousel_area.is_some(), page.has_carousel(), "{:?}", page);
        }
    }
}
