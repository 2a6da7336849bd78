//! Carousel configuration.
//!
//! The two page carousels differ only in presentation, so both are driven by
//! one [`CarouselConfig`] with a [`CarouselLayout`] selector.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::CarouselError;

/// Default autoplay interval.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Smallest interval accepted by [`CarouselConfig::sanitized`].
pub const MIN_INTERVAL_MS: u64 = 250;

/// Default slide transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 280;

/// Horizontal pointer travel that counts as a swipe (strictly greater than).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Logical pixels per terminal column.
pub const DEFAULT_CELL_WIDTH_PX: f32 = 8.0;

/// Presentation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselLayout {
    /// Full-width image frame with overlay text.
    #[default]
    Gallery,
    /// Text panel beside the image frame.
    Split,
}

/// How the image fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    #[default]
    Contain,
    Cover,
}

/// Frame aspect ratio, width over height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u16,
    pub height: u16,
}

impl AspectRatio {
    /// Portrait phone frame.
    pub const PHONE: Self = Self {
        width: 9,
        height: 19,
    };
    pub const WIDE: Self = Self {
        width: 16,
        height: 9,
    };

    /// Columns needed for `rows` rows. Terminal cells are about twice as tall as wide.
    pub fn columns_for_rows(&self, rows: u16) -> u16 {
        if self.height == 0 {
            return rows;
        }
        let cols = u32::from(rows) * u32::from(self.width) * 2 / u32::from(self.height);
        cols.min(u32::from(u16::MAX)) as u16
    }

    /// Rows needed for `cols` columns.
    pub fn rows_for_columns(&self, cols: u16) -> u16 {
        if self.width == 0 {
            return cols;
        }
        let rows = u32::from(cols) * u32::from(self.height) / (u32::from(self.width) * 2);
        rows.min(u32::from(u16::MAX)) as u16
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::PHONE
    }
}

/// Carousel behavior and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
    pub autoplay: bool,
    pub pause_on_hover: bool,
    pub show_autoplay_toggle: bool,
    pub transition_ms: u64,
    pub swipe_threshold_px: f32,
    pub cell_width_px: f32,
    pub layout: CarouselLayout,
    pub aspect: AspectRatio,
    pub fit: ImageFit,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            autoplay: true,
            pause_on_hover: true,
            show_autoplay_toggle: true,
            transition_ms: DEFAULT_TRANSITION_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            layout: CarouselLayout::Gallery,
            aspect: AspectRatio::PHONE,
            fit: ImageFit::Contain,
        }
    }
}

impl CarouselConfig {
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_autoplay_toggle(mut self, show: bool) -> Self {
        self.show_autoplay_toggle = show;
        self
    }

    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    pub fn with_layout(mut self, layout: CarouselLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_aspect(mut self, aspect: AspectRatio) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn with_fit(mut self, fit: ImageFit) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_cell_width_px(mut self, cell_width_px: f32) -> Self {
        self.cell_width_px = cell_width_px;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Convert a terminal column to logical pixels.
    pub fn column_to_px(&self, column: u16) -> f32 {
        f32::from(column) * self.cell_width_px
    }

    /// Reject configurations the controller cannot run with.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidInterval);
        }
        Ok(())
    }

    /// Repair a configuration loaded from user settings.
    ///
    /// A zero interval falls back to a static carousel (autoplay off), and
    /// intervals below [`MIN_INTERVAL_MS`] are clamped up.
    pub fn sanitized(mut self) -> Self {
        if self.interval_ms == 0 {
            tracing::warn!("Carousel interval of 0ms is invalid, disabling autoplay");
            self.interval_ms = DEFAULT_INTERVAL_MS;
            self.autoplay = false;
        } else if self.interval_ms < MIN_INTERVAL_MS {
            tracing::warn!(
                interval_ms = self.interval_ms,
                "Carousel interval too small, clamping to {}ms",
                MIN_INTERVAL_MS
            );
            self.interval_ms = MIN_INTERVAL_MS;
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            self.swipe_threshold_px = DEFAULT_SWIPE_THRESHOLD_PX;
        }
        if !self.cell_width_px.is_finite() || self.cell_width_px <= 0.0 {
            self.cell_width_px = DEFAULT_CELL_WIDTH_PX;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert!(config.autoplay);
        assert!(config.pause_on_hover);
        assert!(config.show_autoplay_toggle);
        assert_eq!(config.swipe_threshold_px, 40.0);
        assert_eq!(config.layout, CarouselLayout::Gallery);
        assert_eq!(config.aspect, AspectRatio::PHONE);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = CarouselConfig::default().with_interval_ms(0);
        assert_eq!(config.validate(), Err(CarouselError::InvalidInterval));
        assert!(CarouselConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sanitized_zero_interval_disables_autoplay() {
        let config = CarouselConfig::default().with_interval_ms(0).sanitized();
        assert!(!config.autoplay);
        assert_eq!(config.interval_ms, DEFAULT_INTERVAL_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sanitized_clamps_small_interval() {
        let config = CarouselConfig::default().with_interval_ms(10).sanitized();
        assert_eq!(config.interval_ms, MIN_INTERVAL_MS);
        assert!(config.autoplay);
    }

    #[test]
    fn test_sanitized_repairs_gesture_settings() {
        let mut config = CarouselConfig::default();
        config.swipe_threshold_px = f32::NAN;
        config.cell_width_px = 0.0;
        let config = config.sanitized();
        assert_eq!(config.swipe_threshold_px, DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(config.cell_width_px, DEFAULT_CELL_WIDTH_PX);
    }

    #[test]
    fn test_column_to_px() {
        let config = CarouselConfig::default().with_cell_width_px(10.0);
        assert_eq!(config.column_to_px(7), 70.0);
    }

    #[test]
    fn test_aspect_ratio_conversions() {
        assert_eq!(AspectRatio::PHONE.columns_for_rows(19), 18);
        assert_eq!(AspectRatio::WIDE.rows_for_columns(32), 9);
        let degenerate = AspectRatio {
            width: 0,
            height: 0,
        };
        assert_eq!(degenerate.columns_for_rows(5), 5);
        assert_eq!(degenerate.rows_for_columns(5), 5);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"interval_ms": 3000, "layout": "split"}"#).unwrap();
        assert_eq!(config.interval_ms, 3000);
        assert_eq!(config.layout, CarouselLayout::Split);
        assert!(config.autoplay);
    }
}
