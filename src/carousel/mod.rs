//! Autoplay carousel.
//!
//! A carousel cycles through an ordered [`SlideDeck`], stepping forward on a
//! timer while autoplay is enabled and not paused. Users can step manually,
//! jump to a slide, swipe, or toggle autoplay.
//!
//! - [`CarouselSession`] - index, direction and pause flags
//! - [`AutoplayTimer`] - deadline timer polled from the event loop
//! - [`SwipeTracker`] - pointer drag classification
//! - [`Transition`] - slide-change animation
//! - [`Carousel`] - the controller tying them to the platform ports

mod autoplay;
mod config;
mod controller;
mod gesture;
mod session;
mod slide;
mod transition;

use thiserror::Error;

pub use autoplay::AutoplayTimer;
pub use config::{
    AspectRatio, CarouselConfig, CarouselLayout, ImageFit, DEFAULT_CELL_WIDTH_PX,
    DEFAULT_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TRANSITION_MS, MIN_INTERVAL_MS,
};
pub use controller::{Carousel, PlatformSignal};
pub use gesture::SwipeTracker;
pub use session::{CarouselSession, Direction};
pub use slide::{Slide, SlideDeck, FALLBACK_ALT};
pub use transition::Transition;

/// Errors raised while building or driving a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel requires at least one slide with an image")]
    NoSlides,

    #[error("autoplay interval must be greater than zero")]
    InvalidInterval,

    #[error("slide index {index} is out of range for {count} slides")]
    IndexOutOfRange { index: usize, count: usize },
}
