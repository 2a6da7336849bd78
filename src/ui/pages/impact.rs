//! Impact page: the sustainable development goals Li-Stick contributes to.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use super::{body, render_hero, render_scroll_body, section};
use crate::app::App;
use crate::content::{IMPACT_CTA, IMPACT_HERO, SDGS};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_HIGHLIGHT, COLOR_TEXT};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let rest = render_hero(frame, area, &IMPACT_HERO, app.elapsed_secs(now), ctx);

    let mut lines = Vec::new();
    section(&mut lines, "Sustainable Development Goals");
    for sdg in SDGS {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("SDG {:>2} ", sdg.id),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                sdg.title,
                Style::default().fg(COLOR_HIGHLIGHT).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", sdg.desc),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    section(&mut lines, IMPACT_CTA.title);
    lines.push(body(IMPACT_CTA.desc));
    lines.push(Line::from(Span::styled(
        "Press 6 to get in touch.",
        Style::default().fg(COLOR_ACCENT),
    )));

    render_scroll_body(frame, rest, app, lines);
}
