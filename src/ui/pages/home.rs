//! Home page: hero, product gallery, problem statement and highlights.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{body, card, render_hero, render_scroll_body, section};
use crate::app::App;
use crate::content::{
    FEATURE_HIGHLIGHTS, HOME_HERO, PROBLEM_QUOTE, PROBLEM_STATS, PROBLEM_TEXT, PROBLEM_TITLE,
    SHOWCASE_TEXT, SHOWCASE_TITLE,
};
use crate::ui::carousel_view::render_carousel;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HIGHLIGHT};

/// Rows kept for the text below a carousel.
pub(super) const MIN_TEXT_ROWS: u16 = 3;

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let rest = render_hero(frame, area, &HOME_HERO, app.elapsed_secs(now), ctx);
    let rest = render_page_carousel(frame, rest, app, now, ctx);
    render_scroll_body(frame, rest, app, story_lines());
}

/// Draw the mounted carousel at the top of `area` and return what is left.
pub(super) fn render_page_carousel(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) -> Rect {
    let rows = ctx.carousel_height(area.height.saturating_sub(MIN_TEXT_ROWS));
    let Some(carousel) = app.carousel.as_ref() else {
        return area;
    };
    if rows == 0 {
        return area;
    }
    let carousel_area = Rect { height: rows, ..area };
    render_carousel(frame, carousel_area, carousel, &mut app.hit_registry, now, ctx);
    app.carousel_area = Some(carousel_area);

    // One blank row between the carousel and the text.
    let used = (rows + 1).min(area.height);
    Rect {
        y: area.y + used,
        height: area.height - used,
        ..area
    }
}

fn story_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    section(&mut lines, PROBLEM_TITLE);
    lines.push(body(PROBLEM_TEXT));
    lines.push(Line::from(Span::styled(
        PROBLEM_QUOTE,
        Style::default().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::default());
    for stat in PROBLEM_STATS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>12}  ", stat.value),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(stat.label, Style::default().fg(COLOR_DIM)),
        ]));
    }

    section(&mut lines, SHOWCASE_TITLE);
    lines.push(body(SHOWCASE_TEXT));
    for highlight in FEATURE_HIGHLIGHTS {
        lines.push(Line::default());
        lines.extend(card("◆", highlight.title, highlight.desc));
    }
    lines
}
