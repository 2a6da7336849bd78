//! Panel Component
//!
//! A centered, rounded frame that clears what is behind it. Used for the
//! contact thank-you message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_HEADER};

/// Configuration for rendering a panel
#[derive(Debug, Clone)]
pub struct PanelConfig<'a> {
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 64,
        }
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn panel_width(ctx: &LayoutContext, config: &PanelConfig, area_width: u16) -> u16 {
    let width = if ctx.is_narrow() {
        area_width.saturating_sub(2)
    } else {
        ctx.bounded_width(60, config.min_width, config.max_width)
    };
    width.min(area_width)
}

/// Draw the frame centered in `area` and return its inner content area.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &PanelConfig,
) -> Rect {
    let width = panel_width(ctx, config, area.width);
    let height = (config.content_height + 2).min(area.height);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_panel_is_centered_in_area() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(10, 5, 80, 20);
                let ctx = LayoutContext::new(100, 30);
                let inner = render_panel(frame, area, &ctx, &PanelConfig::new("Thanks", 4));
                assert_eq!(inner.height, 4);
                assert_eq!(inner.width, 58);
                assert_eq!(inner.x, 10 + (80 - 60) / 2 + 1);
                assert_eq!(inner.y, 5 + (20 - 6) / 2 + 1);
            })
            .unwrap();
    }

    #[test]
    fn test_panel_fits_tiny_area() {
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = LayoutContext::new(20, 4);
                let inner = render_panel(frame, frame.area(), &ctx, &PanelConfig::new("T", 10));
                assert!(inner.width <= 18);
                assert!(inner.height <= 2);
            })
            .unwrap();
    }
}
