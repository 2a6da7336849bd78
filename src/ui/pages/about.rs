//! About page: origin story and team.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{body, render_hero, render_scroll_body, section};
use crate::app::App;
use crate::content::{ABOUT_HERO, STORY, TEAM};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let rest = render_hero(frame, area, &ABOUT_HERO, app.elapsed_secs(now), ctx);

    let mut lines = Vec::new();
    section(&mut lines, "Our Story");
    for (i, paragraph) in STORY.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(body(paragraph));
    }

    section(&mut lines, "Meet the Team");
    for member in TEAM {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                member.name,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", member.role), Style::default().fg(COLOR_ACCENT)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", member.subtitle),
            Style::default().fg(COLOR_DIM),
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
    fn test_about_lists_story_and_team() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::About, now);
        let screen = draw_page(&mut app, 120, 40, now).join("\n");

        assert!(screen.contains("Our Story"));
        assert!(screen.contains("Meet the Team"));
        for member in TEAM {
            assert!(screen.contains(member.name), "missing {}", member.name);
        }
        assert!(app.carousel_area.is_none());
    }
}
