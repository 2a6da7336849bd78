//! Contact page: request form, then a thank-you panel after a successful send.
//!
//! The form uses boxed inputs when there is room and drops to one row per
//! field otherwise. The body does not scroll.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::render_hero;
use crate::app::{App, Focus};
use crate::content::{CONTACT_HERO, THANK_YOU_TEXT, THANK_YOU_TITLE};
use crate::forms::{ContactField, FormField};
use crate::ui::components::{
    calculate_input_field_height, render_input_field, render_panel, render_submit_status,
    InputFieldConfig, PanelConfig,
};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_HOVER, COLOR_TEXT};

const SEND_LABEL: &str = "[ Send message ]";
const SEND_ANOTHER_LABEL: &str = "[ Send another message ]";
const MESSAGE_SENT: &str = "Message sent";

/// Widest the form gets.
const MAX_FORM_WIDTH: u16 = 72;

/// Rows for the boxed form: four inputs, country selector, button, status.
const BOXED_FORM_ROWS: u16 = 4 * 4 + 2 + 1 + 1;

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    app.scroll = 0;
    app.max_scroll = 0;
    let rest = render_hero(frame, area, &CONTACT_HERO, app.elapsed_secs(now), ctx);
    if rest.height == 0 {
        return;
    }
    if app.contact.is_submitted() {
        render_thank_you(frame, rest, app, now, ctx);
    } else {
        render_form(frame, rest, app, ctx);
    }
}

fn field_value(app: &App, field: ContactField) -> Option<&FormField> {
    match field {
        ContactField::Name => Some(&app.contact.name),
        ContactField::Email => Some(&app.contact.email),
        ContactField::Phone => Some(&app.contact.phone),
        ContactField::Message => Some(&app.contact.message),
        ContactField::Country | ContactField::Submit => None,
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your full name",
        ContactField::Email => "you@example.com",
        ContactField::Phone => "70 123 456",
        ContactField::Message => "How can we help?",
        ContactField::Country | ContactField::Submit => "",
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let inline = area.height < BOXED_FORM_ROWS;
    let width = area.width.saturating_sub(2).min(MAX_FORM_WIDTH);
    if width < 16 {
        return;
    }
    let x = area.x + 1;
    let mut y = area.y;
    let editing = app.focus == Focus::Contact;
    let active = app.contact.focus();

    for field in [
        ContactField::Name,
        ContactField::Email,
        ContactField::Country,
        ContactField::Phone,
        ContactField::Message,
    ] {
        if y >= area.bottom() {
            return;
        }
        let focused = editing && active == field;
        if field == ContactField::Country {
            let country_area = Rect::new(x, y, width, area.bottom() - y);
            y += render_country(frame, country_area, app, focused, inline);
            continue;
        }
        let Some(value) = field_value(app, field) else {
            continue;
        };
        let label = if field == ContactField::Phone {
            format!("{} ({})", field.label(), app.contact.country().dial_code)
        } else {
            field.label().to_string()
        };
        let config = InputFieldConfig::new(&label, value)
            .inline(inline)
            .focused(focused)
            .placeholder(placeholder(field));
        let height = calculate_input_field_height(&config).min(area.bottom() - y);
        let field_area = Rect::new(x, y, width, height);
        let config = config.hovered(app.hit_registry.is_hovered(field_area));
        let click_rect = render_input_field(frame, field_area, &config, ctx);
        app.hit_registry.register(click_rect, ClickAction::FocusContactField(field));
        y += height;
    }

    if y < area.bottom() {
        let submit_focused = editing && active == ContactField::Submit;
        render_submit_row(frame, Rect::new(x, y, width, 1), app, submit_focused);
        y += 1;
    }

    if y < area.bottom() {
        let line = render_submit_status(app.contact.status(), MESSAGE_SENT, app.tick_count)
            .unwrap_or_else(|| {
                let hint = if editing {
                    "Tab next field · ←/→ change country · Enter send · Esc leave"
                } else {
                    "Press Enter or click a field to write to us"
                };
                Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM)))
            });
        frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));
    }
}

/// Country selector. Returns the rows used.
fn render_country(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    focused: bool,
    inline: bool,
) -> u16 {
    let country = app.contact.country();
    let rows = if inline { 1 } else { 2 }.min(area.height);
    let rect = Rect { height: rows, ..area };
    let hovered = app.hit_registry.is_hovered(rect);

    let label_style = if focused {
        Style::default().fg(COLOR_HEADER)
    } else if hovered {
        Style::default().fg(COLOR_HOVER)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let arrow_style = if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let selector = vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(
            format!("{} ({})", country.name, country.dial_code),
            Style::default().fg(COLOR_TEXT),
        ),
        Span::styled(" ▶", arrow_style),
    ];

    let label = ContactField::Country.label();
    let lines = if rows == 2 {
        vec![
            Line::from(Span::styled(label, label_style)),
            Line::from(selector),
        ]
    } else {
        let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];
        spans.extend(selector);
        vec![Line::from(spans)]
    };
    frame.render_widget(Paragraph::new(lines), rect);
    app.hit_registry.register(rect, ClickAction::CycleCountry);
    rows
}

fn render_submit_row(frame: &mut Frame, area: Rect, app: &mut App, focused: bool) {
    let button = Rect::new(area.x, area.y, (SEND_LABEL.width() as u16).min(area.width), 1);
    let style = if app.contact.status().is_submitting() {
        Style::default().fg(COLOR_DIM)
    } else if focused {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if app.hit_registry.is_hovered(button) {
        Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(SEND_LABEL, style))), button);
    app.hit_registry.register(button, ClickAction::SubmitContact);
}

fn render_thank_you(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    now: Instant,
    ctx: &LayoutContext,
) {
    let config = PanelConfig::new(THANK_YOU_TITLE, 6);
    let inner = render_panel(frame, area, ctx, &config);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let seconds = app.contact.seconds_remaining(now);
    let text = vec![
        Line::from(Span::styled(THANK_YOU_TEXT, Style::default().fg(COLOR_TEXT))),
        Line::default(),
        Line::from(Span::styled(
            format!("Back to the form in {}s", seconds),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let text_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );

    let width = (SEND_ANOTHER_LABEL.width() as u16).min(inner.width);
    let button = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.bottom() - 1,
        width,
        1,
    );
    let style = if app.hit_registry.is_hovered(button) {
        Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(SEND_ANOTHER_LABEL, style))),
        button,
    );
    app.hit_registry.register(button, ClickAction::SendAnother);
}
