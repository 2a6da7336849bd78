//! Features page: the hardware modules, one per slide.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use super::home::render_page_carousel;
use super::{body, render_hero, render_scroll_body};
use crate::app::App;
use crate::content::{FEATURES_DESCRIPTION, FEATURES_HERO};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::COLOR_DIM;

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let rest = render_hero(frame, area, &FEATURES_HERO, app.elapsed_secs(now), ctx);
    let rest = render_page_carousel(frame, rest, app, now, ctx);

    let lines = vec![
        body(FEATURES_DESCRIPTION),
        Line::from(Span::styled(
            "←/→ browse modules · space pauses autoplay · drag to swipe",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    render_scroll_body(frame, rest, app, lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_on;
    use crate::app::Page;
    use crate::ui::pages::tests::draw_page;

    #[test]
    fn test_features_split_carousel() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Features, now);
        let screen = draw_page(&mut app, 120, 40, now).join("\n");

        assert!(screen.contains("Built-in Intelligence"));
        assert!(screen.contains("Emergency Button"));
        assert!(screen.contains("• Top of the handle"));
        assert!(screen.contains("1 / 6"));
        assert!(screen.contains(FEATURES_DESCRIPTION));
    }

    #[test]
    fn test_features_follow_carousel_position() {
        let now = Instant::now();
        let (mut app, _store) = app_on(Page::Features, now);
        app.carousel_next(now);
        let screen = draw_page(&mut app, 120, 40, now).join("\n");

        assert!(screen.contains("Freeze Button"));
        assert!(screen.contains("2 / 6"));
    }
}
