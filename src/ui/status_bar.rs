//! Bottom status bar: key hints on the left, motion toggle and store on the right.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::startup::StoreKind;
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HOVER};

/// Key hints for the current focus.
pub fn key_hints(app: &App, ctx: &LayoutContext) -> &'static str {
    match app.focus {
        Focus::Newsletter | Focus::Contact => "esc leave form · tab next",
        Focus::Page if ctx.is_compact() => "q quit · 1-6 pages · ←/→ slides",
        Focus::Page if app.page.has_carousel() => {
            "q quit · 1-6 pages · ←/→ slides · space autoplay · m motion · i email"
        }
        Focus::Page => "q quit · 1-6 pages · tab next page · ↑/↓ scroll · m motion · i email",
    }
}

fn motion_label(reduced: bool) -> &'static str {
    if reduced {
        "[motion: reduced]"
    } else {
        "[motion: full]"
    }
}

fn store_label(kind: &StoreKind) -> &'static str {
    match kind {
        StoreKind::Firestore { .. } => "firestore",
        StoreKind::Local { .. } => "offline",
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = Rect { height: 1, ..area };

    let motion = motion_label(app.platform.motion.get());
    let store = store_label(&app.store_kind);
    let right_width = (motion.width() + 1 + store.width() + 1) as u16;

    let hints = key_hints(app, ctx);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", hints),
            Style::default().fg(COLOR_DIM),
        ))),
        Rect {
            width: row.width.saturating_sub(right_width),
            ..row
        },
    );

    if row.width < right_width + 10 {
        return;
    }
    let motion_rect = Rect::new(row.right() - right_width, row.y, motion.width() as u16, 1);
    let motion_style = if app.hit_registry.is_hovered(motion_rect) {
        Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(motion, motion_style),
            Span::raw(" "),
            Span::styled(store, Style::default().fg(COLOR_DIM)),
        ])),
        Rect {
            x: motion_rect.x,
            width: right_width,
            ..row
        },
    );
    app.hit_registry.register(motion_rect, ClickAction::ToggleMotion);
}
