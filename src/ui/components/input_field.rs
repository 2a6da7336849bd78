//! Input Field Component
//!
//! A text input with label, rounded border, visible cursor and inline error.
//! The compact variant renders `Label: value` on a single row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::forms::FormField;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HOVER, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub field: &'a FormField,
    pub focused: bool,
    pub hovered: bool,
    /// Single row, no border
    pub inline: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, field: &'a FormField) -> Self {
        Self {
            label,
            field,
            focused: false,
            hovered: false,
            inline: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed: label + box (3), or 1 inline, plus 1 for an error.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let base = if config.inline { 1 } else { 4 };
    base + u16::from(config.error.is_some())
}

/// Spans for the visible part of the value, keeping the cursor in view.
fn value_spans(config: &InputFieldConfig, width: u16) -> Vec<Span<'static>> {
    let field = config.field;
    let text_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    if field.value().is_empty() && !config.focused {
        if let Some(placeholder) = config.placeholder {
            return vec![Span::styled(placeholder.to_string(), Style::default().fg(COLOR_DIM))];
        }
    }

    if !config.focused {
        return vec![Span::styled(field.value().to_string(), text_style)];
    }

    let chars: Vec<char> = field.value().chars().collect();
    let cursor = field.cursor().min(chars.len());

    // Drop leading characters until the text before the cursor plus the
    // cursor cell fits.
    let budget = width.saturating_sub(1) as usize;
    let mut start = 0;
    let mut before_width = field.cursor_width();
    while before_width > budget && start < cursor {
        before_width -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let before: String = chars[start..cursor].iter().collect();
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let mut spans = vec![Span::styled(before, text_style)];
    match chars.get(cursor) {
        Some(c) => {
            spans.push(Span::styled(c.to_string(), cursor_style));
            let after: String = chars[cursor + 1..].iter().collect();
            spans.push(Span::styled(after, text_style));
        }
        None => spans.push(Span::styled("\u{2588}", text_style)),
    }
    spans
}

/// Render the field. Returns the rect that should respond to clicks.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    _ctx: &LayoutContext,
) -> Rect {
    if area.width == 0 || area.height == 0 {
        return Rect::default();
    }

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else if config.hovered {
        Style::default().fg(COLOR_HOVER)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let (input_rect, error_y) = if config.inline {
        let label = format!("{}: ", config.label);
        let label_width = (label.width() as u16).min(area.width);
        let value_width = area.width - label_width;
        let mut spans = vec![Span::styled(label, label_style)];
        spans.extend(value_spans(config, value_width));
        let row = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(COLOR_INPUT_BG)),
            row,
        );
        (row, area.y + 1)
    } else {
        let label_area = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(config.label, label_style))),
            label_area,
        );

        let input_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1).min(3),
            ..area
        };
        let border_color = if config.focused {
            Color::White
        } else if config.hovered {
            COLOR_HOVER
        } else {
            COLOR_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(COLOR_INPUT_BG));
        let inner_width = input_area.width.saturating_sub(2);
        frame.render_widget(
            Paragraph::new(Line::from(value_spans(config, inner_width))).block(block),
            input_area,
        );
        (Rect { y: area.y, height: 1 + input_area.height, ..area }, input_area.bottom())
    };

    if let Some(error) = config.error {
        if error_y < area.bottom() {
            let error_area = Rect {
                y: error_y,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
                ])),
                error_area,
            );
        }
    }

    input_rect
}
