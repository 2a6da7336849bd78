//! Responsive layout.
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers the sizing
//! questions the page renderers ask: how tall the chrome is, whether split
//! panels stack, how much room a carousel gets.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Medium terminal height (< 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Smallest carousel worth drawing, in rows.
pub const MIN_CAROUSEL_ROWS: u16 = 7;

/// Tallest carousel, in rows.
pub const MAX_CAROUSEL_ROWS: u16 = 20;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

/// Terminal dimensions for responsive calculations.
///
/// Passed to every render function.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.should_stack_panels() {
///     // image above text
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Text width inside a bordered, padded block.
    pub fn text_wrap_width(&self, indent_level: u16) -> u16 {
        let border_margin = 4;
        self.width.saturating_sub(border_margin + indent_level * 2)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    pub fn height_category(&self) -> SizeCategory {
        if self.height < breakpoints::XS_HEIGHT {
            SizeCategory::ExtraSmall
        } else if self.height < breakpoints::SM_HEIGHT {
            SizeCategory::Small
        } else if self.height < breakpoints::MD_HEIGHT {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: condense the chrome.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Stack split panels (image over text) instead of side by side.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Show the footer contact details next to the newsletter form.
    pub fn should_show_footer_details(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH
    }

    // ========================================================================
    // Chrome Heights
    // ========================================================================

    /// Brand line plus nav tabs; compact drops the brand line.
    pub fn header_height(&self) -> u16 {
        if self.is_compact() {
            2
        } else {
            3
        }
    }

    /// Newsletter footer.
    pub fn footer_height(&self) -> u16 {
        if self.is_compact() {
            3
        } else {
            5
        }
    }

    /// Badge, title and subtitle block at the top of a page.
    pub fn hero_height(&self) -> u16 {
        if self.is_extra_small() {
            2
        } else if self.is_compact() {
            3
        } else {
            5
        }
    }

    /// Rows given to a carousel out of `available` body rows.
    ///
    /// Zero when the body is too small to draw one.
    pub fn carousel_height(&self, available: u16) -> u16 {
        if available < MIN_CAROUSEL_ROWS {
            return 0;
        }
        let preferred = (available * 3 / 5).clamp(MIN_CAROUSEL_ROWS, MAX_CAROUSEL_ROWS);
        preferred.min(available)
    }

    /// `(left, right)` widths for two side-by-side panels.
    pub fn two_column_widths(&self) -> (u16, u16) {
        self.split_widths(self.width)
    }

    /// Split `total` columns into two panels, left narrower on wide terminals.
    pub fn split_widths(&self, total: u16) -> (u16, u16) {
        let left = if self.width < breakpoints::XS_WIDTH {
            total / 2
        } else if self.width < breakpoints::MD_WIDTH {
            total * 2 / 5
        } else {
            (total * 35 / 100).min(60)
        };
        (left, total - left)
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}
