//! Color theme constants for the Li-Stick site.
//!
//! A dark palette with the brand blue as accent.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Brand accent - Li-Stick blue
pub const COLOR_ACCENT: Color = Color::Rgb(37, 99, 235);

/// Lighter accent for highlighted words
pub const COLOR_HIGHLIGHT: Color = Color::Rgb(96, 165, 250);

/// Header and title text
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the framed slide "image"
pub const COLOR_FRAME_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status Colors
// ============================================================================

/// Success messages
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Validation and submission errors
pub const COLOR_ERROR: Color = Color::Red;

/// In-flight submissions
pub const COLOR_PENDING: Color = Color::Yellow;

// ============================================================================
// Carousel
// ============================================================================

/// Current position dot
pub const COLOR_DOT_ACTIVE: Color = Color::White;

/// Other position dots
pub const COLOR_DOT_INACTIVE: Color = Color::DarkGray;

/// Playing indicator
pub const COLOR_PLAYING: Color = Color::LightGreen;

/// Hovered controls
pub const COLOR_HOVER: Color = Color::Rgb(147, 197, 253);
