//! Mouse interaction for the terminal site.
//!
//! Render code registers clickable regions in a [`HitAreaRegistry`]; the
//! event loop hit-tests clicks and passes the resulting [`ClickAction`] to
//! [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{rect_contains, ClickAction, HitArea, HitAreaRegistry};
