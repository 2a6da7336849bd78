//! Reusable UI Components
//!
//! - `TabSelector` - header navigation row with `▶` marker
//! - `InputField` - text input with cursor, label and inline error
//! - `StatusIndicator` - submission spinner, success and error line
//! - `Panel` - centered rounded frame

mod input_field;
mod panel;
mod status_indicator;
mod tab_selector;

pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use panel::{render_panel, PanelConfig};
pub use status_indicator::{render_submit_status, spinner_char};
pub use tab_selector::{render_tab_selector, TabItem, TabLine};
