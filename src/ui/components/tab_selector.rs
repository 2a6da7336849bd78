//! Tab Selector Component
//!
//! The header navigation row. Uses a `▶` marker for the selected tab and
//! short labels on compact terminals. Returns the column span of every tab
//! so the caller can register click areas.

use std::ops::Range;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HOVER};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Key hint shown before the label, e.g. `1`
    pub key: Option<char>,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            key: None,
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self {
            key: None,
            label,
            short_label,
        }
    }

    pub fn key(mut self, key: char) -> Self {
        self.key = Some(key);
        self
    }
}

/// A rendered tab row.
#[derive(Debug, Clone)]
pub struct TabLine {
    pub line: Line<'static>,
    /// Column range of each tab, relative to the start of the line
    pub spans: Vec<Range<u16>>,
}

/// Render a horizontal tab selector.
///
/// `hovered` highlights a tab under the mouse.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    hovered: Option<usize>,
    ctx: &LayoutContext,
) -> TabLine {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut ranges = Vec::with_capacity(items.len());
    let mut col: u16 = 0;

    let push = |spans: &mut Vec<Span<'static>>, text: String, style: Style, col: &mut u16| {
        *col = col.saturating_add(text.width() as u16);
        spans.push(Span::styled(text, style));
    };

    push(&mut spans, " ".into(), Style::default(), &mut col);

    for (idx, item) in items.iter().enumerate() {
        let is_selected = idx == selected;
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let start = col;

        let marker = if is_selected { "▶ " } else { "  " };
        let marker_style = Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD);
        push(&mut spans, marker.into(), marker_style, &mut col);

        if let Some(key) = item.key.filter(|_| !ctx.is_extra_small()) {
            push(&mut spans, format!("{} ", key), Style::default().fg(COLOR_DIM), &mut col);
        }

        let text_style = if is_selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if hovered == Some(idx) {
            Style::default().fg(COLOR_HOVER)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        push(&mut spans, label.to_string(), text_style, &mut col);
        ranges.push(start..col);

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "  " };
            push(&mut spans, spacing.into(), Style::default(), &mut col);
        }
    }

    TabLine {
        line: Line::from(spans),
        spans: ranges,
    }
}
