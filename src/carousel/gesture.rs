//! Horizontal swipe detection.

use super::Direction;

/// Tracks one pointer drag and classifies it on release.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    /// Record the pointer-down position.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Drop any in-progress drag without classifying it.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Classify the drag ending at `x`.
    ///
    /// Travel strictly greater than the threshold is a swipe: rightward
    /// means [`Direction::Backward`], leftward means [`Direction::Forward`].
    /// A release without a matching `begin` yields nothing.
    pub fn end(&mut self, x: f32) -> Option<Direction> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx > self.threshold_px {
            Some(Direction::Backward)
        } else if dx < -self.threshold_px {
            Some(Direction::Forward)
        } else {
            None
        }
    }
}
