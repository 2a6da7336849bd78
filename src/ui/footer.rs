//! Site footer
//!
//! Newsletter signup on the left, contact details on the right when there is
//! room, copyright underneath.
//!
//! ```text
//! ──────────────────────────────────────────────────────────────────────────
//!  Stay updated                                    ✉ hello@li-stick.com
//!  Email: you@example.com          [ Subscribe ]   ☏ +961 81 699 932
//!  ✓ Subscribed! Thanks for joining.               ⌂ Beirut, Lebanon
//!  © Li-Stick. All rights reserved.
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, COPYRIGHT};
use crate::ui::components::{render_input_field, render_submit_status, InputFieldConfig};
use crate::ui::interaction::ClickAction;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_HOVER, COLOR_TEXT,
};

pub const NEWSLETTER_SUCCESS: &str = "Subscribed! Thanks for joining.";

const SUBSCRIBE_LABEL: &str = "[ Subscribe ]";

/// Widest the email input gets.
const MAX_INPUT_WIDTH: u16 = 48;

/// Width reserved for the contact column.
const DETAILS_WIDTH: u16 = 34;

pub fn render_footer(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = |i: u16| Rect::new(area.x, area.y + i, area.width, 1);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(COLOR_BORDER),
        ))),
        row(0),
    );
    if area.height < 2 {
        return;
    }

    let show_details = ctx.should_show_footer_details() && area.height >= 4;
    let form_width = if show_details {
        area.width.saturating_sub(DETAILS_WIDTH)
    } else {
        area.width
    };

    let compact = area.height < 5;
    let (form_y, status_y) = if compact { (1, 2) } else { (2, 3) };

    if !compact {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " Stay updated",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ))),
            row(1),
        );
    }

    render_signup_row(frame, Rect { width: form_width, ..row(form_y) }, app, ctx);

    // Status replaces the copyright on compact footers.
    let status = render_submit_status(app.newsletter.status(), NEWSLETTER_SUCCESS, app.tick_count);
    if status_y < area.height {
        let line = match status {
            Some(line) => {
                let mut spans = vec![Span::raw(" ")];
                spans.extend(line.spans);
                Line::from(spans)
            }
            None if compact => copyright_line(),
            None if app.focus == Focus::Newsletter => Line::from(Span::styled(
                " Enter to subscribe, Esc to leave the field",
                Style::default().fg(COLOR_DIM),
            )),
            None => Line::from(Span::styled(
                " Press i to type your email",
                Style::default().fg(COLOR_DIM),
            )),
        };
        frame.render_widget(Paragraph::new(line), Rect { width: form_width, ..row(status_y) });
    }

    if !compact && area.height >= 5 {
        frame.render_widget(Paragraph::new(copyright_line()), row(4));
    }

    if show_details {
        let x = area.x + form_width;
        let details = [
            ("✉ ", CONTACT_EMAIL),
            ("☏ ", CONTACT_PHONE),
            ("⌂ ", CONTACT_LOCATION),
        ];
        for (i, (icon, text)) in details.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(*icon, Style::default().fg(COLOR_ACCENT)),
                    Span::styled(*text, Style::default().fg(COLOR_TEXT)),
                ])),
                Rect::new(x, y, DETAILS_WIDTH.min(area.right() - x), 1),
            );
        }
    }
}

/// Inline email input followed by the subscribe button.
fn render_signup_row(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let button_width = SUBSCRIBE_LABEL.width() as u16;
    if area.width < button_width + 12 {
        return;
    }
    let input_width = (area.width - button_width - 3).min(MAX_INPUT_WIDTH);
    let input_area = Rect::new(area.x + 1, area.y, input_width, 1);
    let button_area = Rect::new(input_area.right() + 1, area.y, button_width, 1);

    let focused = app.focus == Focus::Newsletter;
    let config = InputFieldConfig::new("Email", &app.newsletter.email)
        .inline(true)
        .focused(focused)
        .hovered(app.hit_registry.is_hovered(input_area))
        .placeholder("you@example.com");
    let click_rect = render_input_field(frame, input_area, &config, ctx);

    let button_style = if app.newsletter.status().is_submitting() {
        Style::default().fg(COLOR_DIM)
    } else if app.hit_registry.is_hovered(button_area) {
        Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(SUBSCRIBE_LABEL, button_style))),
        button_area,
    );

    app.hit_registry.register(click_rect, ClickAction::FocusNewsletter);
    app.hit_registry.register(button_area, ClickAction::SubmitNewsletter);
}

fn copyright_line() -> Line<'static> {
    Line::from(Span::styled(format!(" {}", COPYRIGHT), Style::default().fg(COLOR_DIM)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app_on;
    use crate::app::Page;
    use crate::forms::SubmitStatus;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let ctx = LayoutContext::new(width, height);
        let footer_height = ctx.footer_height();
        app.hit_registry.clear();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, width, footer_height);
                render_footer(frame, area, app, &ctx);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..footer_height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_full_footer_layout() {
        let (mut app, _store) = app_on(Page::Home, Instant::now());
        let rows = draw(&mut app, 140, 40);

        assert!(rows[1].contains("Stay updated"));
        assert!(rows[2].contains("Email: you@example.com"));
        assert!(rows[2].contains(SUBSCRIBE_LABEL));
        assert!(rows[1].contains(CONTACT_EMAIL));
        assert!(rows[3].contains(CONTACT_LOCATION));
        assert!(rows[4].contains(COPYRIGHT));
    }

    #[test]
    fn test_details_hidden_on_medium_terminals() {
        let (mut app, _store) = app_on(Page::Home, Instant::now());
        let rows = draw(&mut app, 100, 40);
        assert!(!rows.join("\n").contains(CONTACT_PHONE));
    }

    #[test]
    fn test_signup_controls_are_clickable() {
        let (mut app, _store) = app_on(Page::Home, Instant::now());
        let rows = draw(&mut app, 100, 40);

        let byte = rows[2].find(SUBSCRIBE_LABEL).unwrap();
        let button_x = rows[2][..byte].chars().count() as u16;
        assert_eq!(app.hit_registry.hit_test(button_x + 2, 2), Some(ClickAction::SubmitNewsletter));
        assert_eq!(app.hit_registry.hit_test(3, 2), Some(ClickAction::FocusNewsletter));
    }

    #[test]
    fn test_error_status_replaces_hint() {
        let (mut app, _store) = app_on(Page::Home, Instant::now());
        app.newsletter.email.insert_str("nope");
        let _ = app.newsletter.begin_submit();
        assert!(matches!(app.newsletter.status(), SubmitStatus::Error(_)));

        let rows = draw(&mut app, 100, 40);
        assert!(rows[3].contains('✗'));
        assert!(!rows[3].contains("Press i"));
    }

    #[test]
    fn test_compact_footer_shows_copyright_when_idle() {
        let (mut app, _store) = app_on(Page::Home, Instant::now());
        let rows = draw(&mut app, 70, 20);
        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains("Email:"));
        assert!(rows[2].contains(COPYRIGHT));
    }
}
