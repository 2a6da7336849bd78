//! Future plans page: the roadmap as a numbered list.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{render_hero, render_scroll_body};
use crate::app::App;
use crate::content::{FUTURE_HERO, ROADMAP};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let rest = render_hero(frame, area, &FUTURE_HERO, app.elapsed_secs(now), ctx);

    let mut lines = Vec::new();
    for (i, item) in ROADMAP.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let mut heading = vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                item.title,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ];
        if !ctx.is_narrow() {
            heading.push(Span::styled(
                format!("  [{}]", item.badge),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(
            format!("    {}", item.subtitle),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", item.desc),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    render_scroll_body(frame, rest, app, lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_on;
    use crate::app::Page;
    use crate::ui::pages::tests::draw_page;

    #[test]
    fn test_roadmap_starts_at_first_item() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::FuturePlans, now);
        let screen = draw_page(&mut app, 120, 30, now).join("\n");

        assert!(screen.contains(" 1. Vision-Based Obstacle Detection  [Core MVP]"));
        assert!(app.max_scroll > 0);
    }

    #[test]
    fn test_scrolled_roadmap_reaches_last_item() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::FuturePlans, now);
        app.scroll = u16::MAX;
        let screen = draw_page(&mut app, 120, 30, now).join("\n");

        assert!(screen.contains("Modular Premium Editions"));
        assert!(!screen.contains("Vision-Based Obstacle Detection"));
    }
}
