//! Carousel rendering.
//!
//! [`CarouselWidget`] draws one slide at a time inside a framed "image"
//! panel, with `◀`/`▶` controls on the sides and a row of position dots and
//! the autoplay label underneath. [`render_carousel`] draws it and registers
//! the controls as hit areas.
//!
//! ```text
//! ╭───────────────────────────────────────────────╮
//! │ ◀  ╭─────────────────────────────────────╮  ▶ │
//! │    │                 ▣                   │    │
//! │    │   Li-Stick showcase: Seamless ...   │    │
//! │    │        assets/images/pic2.jpg       │    │
//! │    │  Seamless guidance                  │    │
//! │    │  Buzzer and audio                   │    │
//! │    ╰─────────────────────────────────────╯    │
//! │ 2 / 3          ○ ● ○        ⏸ Autoplay: On   │
//! ```

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::carousel::{Carousel, CarouselLayout, ImageFit, Slide};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_DOT_ACTIVE, COLOR_DOT_INACTIVE, COLOR_FRAME_BG, COLOR_HEADER,
    COLOR_HIGHLIGHT, COLOR_HOVER, COLOR_PLAYING, COLOR_TEXT,
};

/// Width of the side arrow strips.
const ARROW_WIDTH: u16 = 3;

/// Narrowest image frame worth drawing.
const MIN_FRAME_WIDTH: u16 = 40;

/// Title shown by the split layout when a slide has none.
pub const DEFAULT_SPLIT_TITLE: &str = "Feature";

/// Where each part of the carousel goes within its area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayoutRects {
    pub prev: Rect,
    pub next: Rect,
    /// Framed image panel
    pub image: Rect,
    /// Split layout text panel
    pub text: Option<Rect>,
    /// One rect per slide
    pub dots: Vec<Rect>,
    pub toggle: Option<Rect>,
    /// `n / count` label
    pub counter: Option<Rect>,
}

/// Label for the play/pause control.
///
/// Reflects the effective playing state: enabled and not paused.
pub fn autoplay_label(carousel: &Carousel) -> &'static str {
    if carousel.is_playing() {
        "⏸ Autoplay: On"
    } else if carousel.autoplay_enabled() {
        "▶ Autoplay: Paused"
    } else {
        "▶ Autoplay: Off"
    }
}

/// `n / count`, 1-based.
pub fn position_label(carousel: &Carousel) -> String {
    format!("{} / {}", carousel.index() + 1, carousel.len())
}

/// Draws the current slide of a carousel.
pub struct CarouselWidget<'a> {
    carousel: &'a Carousel,
    now: Instant,
    ctx: LayoutContext,
    hovered: Option<Rect>,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(carousel: &'a Carousel, now: Instant, ctx: LayoutContext) -> Self {
        Self {
            carousel,
            now,
            ctx,
            hovered: None,
        }
    }

    /// Highlight the control whose rect equals `hovered`.
    pub fn hovered(mut self, hovered: Option<Rect>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Compute control and panel positions for `area`.
    pub fn layout(&self, area: Rect) -> CarouselLayoutRects {
        let config = self.carousel.config();
        let controls_y = area.bottom().saturating_sub(1);
        let stage = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        let arrow_width = ARROW_WIDTH.min(stage.width / 2);
        let prev = Rect {
            width: arrow_width,
            ..stage
        };
        let next = Rect {
            x: stage.right() - arrow_width,
            width: arrow_width,
            ..stage
        };
        let content = Rect {
            x: stage.x + arrow_width,
            width: stage.width.saturating_sub(arrow_width * 2),
            ..stage
        };

        let (image, text) = match config.layout {
            CarouselLayout::Gallery => (self.fit_frame(content, content.height), None),
            CarouselLayout::Split if self.ctx.should_stack_panels() => {
                let image_height = (content.height / 2).max(3).min(content.height);
                let image_area = Rect {
                    height: image_height,
                    ..content
                };
                let text = Rect {
                    y: content.y + image_height,
                    height: content.height - image_height,
                    ..content
                };
                (image_area, Some(text))
            }
            CarouselLayout::Split => {
                let (left, _) = self.ctx.split_widths(content.width);
                let frame_width = config
                    .aspect
                    .columns_for_rows(content.height)
                    .max(MIN_FRAME_WIDTH)
                    .min(left);
                let image_area = Rect {
                    width: frame_width,
                    ..content
                };
                let gap = 2.min(content.width - frame_width);
                let text = Rect {
                    x: content.x + frame_width + gap,
                    width: content.width - frame_width - gap,
                    ..content
                };
                (image_area, Some(text))
            }
        };

        // Controls row: counter on the left, dots centered, toggle on the right.
        let count = self.carousel.len() as u16;
        let dots_width = count.saturating_mul(2).saturating_sub(1);
        let dots_x = area.x + area.width.saturating_sub(dots_width) / 2;
        let dots = (0..count)
            .map(|i| Rect::new(dots_x + i * 2, controls_y, 1, 1))
            .filter(|r| r.right() <= area.right())
            .collect();

        let label_width = autoplay_label(self.carousel).width() as u16;
        let toggle = (config.show_autoplay_toggle
            && area.width >= dots_width + (label_width + 2) * 2)
            .then(|| {
                Rect::new(
                    area.right() - label_width - 1,
                    controls_y,
                    label_width,
                    1,
                )
            });

        let counter_width = position_label(self.carousel).width() as u16;
        let counter = (text.is_none() && area.width >= dots_width + (counter_width + 2) * 2)
            .then(|| Rect::new(area.x + 1, controls_y, counter_width, 1));

        CarouselLayoutRects {
            prev,
            next,
            image,
            text,
            dots,
            toggle,
            counter,
        }
    }

    /// Size the image frame inside `content` for the configured fit.
    ///
    /// `Cover` fills the content; `Contain` keeps the aspect ratio and
    /// centers the frame.
    fn fit_frame(&self, content: Rect, rows: u16) -> Rect {
        let config = self.carousel.config();
        if config.fit == ImageFit::Cover {
            return content;
        }
        let width = config
            .aspect
            .columns_for_rows(rows)
            .max(MIN_FRAME_WIDTH)
            .min(content.width);
        Rect {
            x: content.x + (content.width - width) / 2,
            width,
            ..content
        }
    }

    fn control_style(&self, rect: Rect) -> Style {
        if self.hovered == Some(rect) {
            Style::default().fg(COLOR_HOVER).add_modifier(Modifier::BOLD)
        } else if self.carousel.len() > 1 {
            Style::default().fg(COLOR_HEADER)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    }

    /// Content area shifted by the transition offset.
    fn shifted(&self, area: Rect) -> Rect {
        let offset = self
            .carousel
            .transition()
            .map_or(0, |t| t.offset(self.now, area.width));
        let shift = offset.unsigned_abs().min(u32::from(area.width)) as u16;
        if offset > 0 {
            Rect {
                x: area.x + shift,
                width: area.width - shift,
                ..area
            }
        } else {
            Rect {
                width: area.width - shift,
                ..area
            }
        }
    }

    fn render_frame(&self, slide: &Slide, area: Rect, overlay: bool, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER))
            .style(Style::default().bg(COLOR_FRAME_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut overlay_lines: Vec<Line<'static>> = Vec::new();
        if overlay {
            if let Some(title) = slide.title() {
                overlay_lines.push(Line::from(Span::styled(
                    format!(" {}", title),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                )));
            }
            if let Some(caption) = slide.caption() {
                overlay_lines.push(Line::from(Span::styled(
                    format!(" {}", caption),
                    Style::default().fg(COLOR_TEXT),
                )));
            }
        }
        // The image text gets at least half of the frame.
        let overlay_rows = (overlay_lines.len() as u16).min(inner.height / 2);
        let picture = Rect {
            height: inner.height - overlay_rows,
            ..inner
        };

        let image_lines = vec![
            Line::from(Span::styled("▣", Style::default().fg(COLOR_HIGHLIGHT))),
            Line::from(Span::styled(
                slide.alt_text().to_string(),
                Style::default().fg(COLOR_TEXT).add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(slide.image.clone(), Style::default().fg(COLOR_DIM))),
        ];
        let image_rows = (image_lines.len() as u16).min(picture.height);
        let picture = Rect {
            y: picture.y + (picture.height - image_rows) / 2,
            height: image_rows,
            ..picture
        };
        Paragraph::new(image_lines)
            .alignment(Alignment::Center)
            .render(self.shifted(picture), buf);

        if overlay_rows > 0 {
            let overlay_area = Rect {
                y: inner.bottom() - overlay_rows,
                height: overlay_rows,
                ..inner
            };
            Paragraph::new(overlay_lines).render(self.shifted(overlay_area), buf);
        }
    }

    fn render_text_panel(&self, slide: &Slide, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut lines = vec![Line::from(Span::styled(
            slide.title().unwrap_or(DEFAULT_SPLIT_TITLE).to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))];
        if let Some(caption) = slide.caption() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                caption.to_string(),
                Style::default().fg(COLOR_TEXT),
            )));
        }
        if !slide.bullets.is_empty() {
            lines.push(Line::from(""));
            for bullet in &slide.bullets {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(COLOR_HIGHLIGHT)),
                    Span::styled(bullet.clone(), Style::default().fg(COLOR_TEXT)),
                ]));
            }
        }

        let body = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(self.shifted(body), buf);

        let counter_area = Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(Span::styled(
            position_label(self.carousel),
            Style::default().fg(COLOR_DIM),
        )))
        .render(counter_area, buf);
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < ARROW_WIDTH * 2 + 1 {
            return;
        }
        let rects = self.layout(area);
        let slide = self.carousel.current();

        // Side arrows, vertically centered.
        let mid = rects.prev.y + rects.prev.height / 2;
        if rects.prev.height > 0 {
            buf.set_string(rects.prev.x + 1, mid, "◀", self.control_style(rects.prev));
            buf.set_string(rects.next.x + 1, mid, "▶", self.control_style(rects.next));
        }

        let overlay = rects.text.is_none();
        if rects.image.height >= 2 {
            self.render_frame(slide, rects.image, overlay, buf);
        }
        if let Some(text) = rects.text {
            self.render_text_panel(slide, text, buf);
        }

        for (i, dot) in rects.dots.iter().enumerate() {
            let (symbol, color) = if i == self.carousel.index() {
                ("●", COLOR_DOT_ACTIVE)
            } else {
                ("○", COLOR_DOT_INACTIVE)
            };
            let style = if self.hovered == Some(*dot) {
                Style::default().fg(COLOR_HOVER)
            } else {
                Style::default().fg(color)
            };
            buf.set_string(dot.x, dot.y, symbol, style);
        }

        if let Some(toggle) = rects.toggle {
            let style = if self.hovered == Some(toggle) {
                Style::default().fg(COLOR_HOVER)
            } else if self.carousel.is_playing() {
                Style::default().fg(COLOR_PLAYING)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            buf.set_string(toggle.x, toggle.y, autoplay_label(self.carousel), style);
        }

        if let Some(counter) = rects.counter {
            buf.set_string(
                counter.x,
                counter.y,
                position_label(self.carousel),
                Style::default().fg(COLOR_DIM),
            );
        }
    }
}

/// Draw `carousel` into `area` and register its controls.
pub fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    carousel: &Carousel,
    registry: &mut HitAreaRegistry,
    now: Instant,
    ctx: &LayoutContext,
) {
    let widget = CarouselWidget::new(carousel, now, *ctx).hovered(registry.hovered_rect());
    let rects = widget.layout(area);
    frame.render_widget(widget, area);

    registry.register(rects.prev, ClickAction::CarouselPrev);
    registry.register(rects.next, ClickAction::CarouselNext);
    for (i, dot) in rects.dots.iter().enumerate() {
        registry.register(*dot, ClickAction::CarouselDot(i));
    }
    if let Some(toggle) = rects.toggle {
        registry.register(toggle, ClickAction::ToggleAutoplay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FakePlatform;
    use crate::carousel::{AspectRatio, CarouselConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn gallery(slides: Vec<Slide>, now: Instant) -> Carousel {
        let config = CarouselConfig::default()
            .with_fit(ImageFit::Cover)
            .with_transition_ms(0);
        Carousel::new(slides, config, &FakePlatform::new().ports(), now).unwrap()
    }

    fn three_slides() -> Vec<Slide> {
        (1..=3)
            .map(|i| {
                Slide::new(format!("assets/pic{}.jpg", i))
                    .with_title(format!("Title {}", i))
                    .with_caption(format!("Caption {}", i))
            })
            .collect()
    }

    fn draw(
        carousel: &Carousel,
        width: u16,
        height: u16,
        now: Instant,
    ) -> (Vec<String>, HitAreaRegistry) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut registry = HitAreaRegistry::new();
        let ctx = LayoutContext::new(width, height);
        terminal
            .draw(|frame| {
                render_carousel(frame, frame.area(), carousel, &mut registry, now, &ctx)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let rows = (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect();
        (rows, registry)
    }

    #[test]
    fn test_renders_current_slide_with_overlay() {
        let now = Instant::now();
        let carousel = gallery(three_slides(), now);
        let (rows, _) = draw(&carousel, 80, 14, now);
        let screen = rows.join("\n");

        assert!(screen.contains("assets/pic1.jpg"));
        assert!(screen.contains("Title 1"));
        assert!(screen.contains("Caption 1"));
        assert!(!screen.contains("Title 2"));
        assert!(screen.contains("◀"));
        assert!(screen.contains("▶"));
        assert!(screen.contains("⏸ Autoplay: On"));
        assert!(screen.contains("1 / 3"));
    }

    #[test]
    fn test_image_only_slide_has_no_overlay_text() {
        let now = Instant::now();
        let carousel = gallery(vec![Slide::new("assets/only.jpg")], now);
        let (rows, _) = draw(&carousel, 60, 12, now);
        let screen = rows.join("\n");

        assert!(screen.contains("assets/only.jpg"));
        // Alt text falls back to the generic label
        assert!(screen.contains("Slide"));
        assert!(!screen.contains("Title"));
    }

    #[test]
    fn test_one_dot_per_slide_and_active_dot() {
        let now = Instant::now();
        let mut carousel = gallery(three_slides(), now);
        carousel.go_to(2, now).unwrap();
        let (rows, registry) = draw(&carousel, 80, 14, now);

        let controls = &rows[13];
        assert_eq!(controls.matches('○').count(), 2);
        assert_eq!(controls.matches('●').count(), 1);
        assert!(controls.find('●') > controls.rfind('○'));

        let rects = CarouselWidget::new(&carousel, now, LayoutContext::new(80, 14))
            .layout(Rect::new(0, 0, 80, 14));
        for (i, dot) in rects.dots.iter().enumerate() {
            assert_eq!(registry.hit_test(dot.x, dot.y), Some(ClickAction::CarouselDot(i)));
        }
    }

    #[test]
    fn test_controls_are_registered() {
        let now = Instant::now();
        let carousel = gallery(three_slides(), now);
        let (_, registry) = draw(&carousel, 80, 14, now);

        assert_eq!(registry.hit_test(1, 5), Some(ClickAction::CarouselPrev));
        assert_eq!(registry.hit_test(78, 5), Some(ClickAction::CarouselNext));
        let label_x = 80 - autoplay_label(&carousel).width() as u16 - 1;
        assert_eq!(registry.hit_test(label_x, 13), Some(ClickAction::ToggleAutoplay));
    }

    #[test]
    fn test_hidden_toggle_is_not_drawn() {
        let now = Instant::now();
        let config = CarouselConfig::default().with_autoplay_toggle(false);
        let carousel =
            Carousel::new(three_slides(), config, &FakePlatform::new().ports(), now).unwrap();
        let (rows, registry) = draw(&carousel, 80, 14, now);
        assert!(!rows.join("\n").contains("Autoplay"));
        assert!(registry.hit_test(70, 13).is_none());
    }

    #[test]
    fn test_autoplay_label_tracks_state() {
        let now = Instant::now();
        let mut carousel = gallery(three_slides(), now);
        assert_eq!(autoplay_label(&carousel), "⏸ Autoplay: On");
        carousel.hover_enter(now);
        assert_eq!(autoplay_label(&carousel), "▶ Autoplay: Paused");
        carousel.hover_leave(now);
        carousel.toggle_autoplay(now);
        assert_eq!(autoplay_label(&carousel), "▶ Autoplay: Off");
    }

    #[test]
    fn test_split_layout_shows_bullets_and_position() {
        let now = Instant::now();
        let config = CarouselConfig::default()
            .with_layout(CarouselLayout::Split)
            .with_aspect(AspectRatio::PHONE);
        let slides = vec![
            Slide::new("assets/cane.png").with_bullets(["Top of the handle"]),
            Slide::new("assets/cane.png").with_title("GPS Module"),
        ];
        let carousel = Carousel::new(slides, config, &FakePlatform::new().ports(), now).unwrap();
        let (rows, _) = draw(&carousel, 100, 20, now);
        let screen = rows.join("\n");

        assert!(screen.contains(DEFAULT_SPLIT_TITLE));
        assert!(screen.contains("• Top of the handle"));
        assert!(screen.contains("1 / 2"));
    }

    #[test]
    fn test_split_layout_stacks_on_narrow_terminals() {
        let now = Instant::now();
        let config = CarouselConfig::default().with_layout(CarouselLayout::Split);
        let carousel =
            Carousel::new(three_slides(), config, &FakePlatform::new().ports(), now).unwrap();
        let widget = CarouselWidget::new(&carousel, now, LayoutContext::new(60, 30));
        let rects = widget.layout(Rect::new(0, 0, 60, 20));
        let text = rects.text.unwrap();
        assert!(text.y >= rects.image.bottom());
        assert_eq!(text.x, rects.image.x);
    }

    #[test]
    fn test_transition_shifts_entering_slide() {
        let now = Instant::now();
        let config = CarouselConfig::default()
            .with_fit(ImageFit::Cover)
            .with_transition_ms(280);
        let mut carousel =
            Carousel::new(three_slides(), config, &FakePlatform::new().ports(), now).unwrap();
        carousel.next(now);

        let widget = CarouselWidget::new(&carousel, now, LayoutContext::new(80, 14));
        let area = Rect::new(10, 0, 50, 3);
        let shifted = widget.shifted(area);
        assert_eq!(shifted.x, 20);
        assert_eq!(shifted.width, 40);

        let settled = CarouselWidget::new(
            &carousel,
            now + std::time::Duration::from_secs(1),
            LayoutContext::new(80, 14),
        );
        assert_eq!(settled.shifted(area), area);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let now = Instant::now();
        let carousel = gallery(three_slides(), now);
        let (_, _) = draw(&carousel, 6, 2, now);
        let (_, _) = draw(&carousel, 30, 3, now);
    }
}
