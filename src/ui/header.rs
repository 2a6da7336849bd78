//! Site header
//!
//! Brand line over the page tabs, closed by a thin rule.
//!
//! ```text
//! ◆ Li-Stick                               smart cane for safer mobility
//!  ▶ 1 Home    2 About    3 Features    4 Impact    5 Future Plans    6 Contact
//! ─────────────────────────────────────────────────────────────────────────────
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};
use crate::ui::components::{render_tab_selector, TabItem};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const BRAND: &str = "Li-Stick";
const TAGLINE: &str = "smart cane for safer mobility";

/// Tab items for every page, keyed `1`..`6`.
fn page_tabs() -> Vec<TabItem<'static>> {
    Page::ALL
        .iter()
        .zip('1'..='9')
        .map(|(page, key)| TabItem::with_short_label(page.title(), page.short_title()).key(key))
        .collect()
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mut y = area.y;
    if !ctx.is_compact() && area.height >= 3 {
        let mut spans = vec![
            Span::styled(" ◆ ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                BRAND,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ];
        let used = 3 + BRAND.width() as u16;
        let tagline_width = TAGLINE.width() as u16;
        if area.width > used + tagline_width + 2 {
            let gap = area.width - used - tagline_width - 1;
            spans.push(Span::raw(" ".repeat(gap as usize)));
            spans.push(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(area.x, y, area.width, 1));
        y += 1;
    }

    let tab_row = Rect::new(area.x, y, area.width, 1);
    let items = page_tabs();
    let selected = app.page.index();

    // Tab positions do not depend on hover, so find the hovered one first.
    let plain = render_tab_selector(&items, selected, None, ctx);
    let hovered = app.hit_registry.hovered_rect().and_then(|rect| {
        (rect.y == tab_row.y)
            .then(|| plain.spans.iter().position(|r| tab_row.x + r.start == rect.x))
            .flatten()
    });
    let tabs = render_tab_selector(&items, selected, hovered, ctx);
    frame.render_widget(Paragraph::new(tabs.line), tab_row);

    for (page, range) in Page::ALL.iter().zip(tabs.spans.iter()) {
        let x = tab_row.x + range.start;
        if x >= tab_row.right() {
            break;
        }
        let width = (range.end - range.start).min(tab_row.right() - x);
        app.hit_registry.register(
            Rect::new(x, tab_row.y, width, 1),
            ClickAction::NavigatePage(*page),
        );
    }
    y += 1;

    if y < area.bottom() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(COLOR_BORDER),
            ))),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}
