//! Slide-change animation state.

use std::time::{Duration, Instant};

use super::Direction;

/// Fraction of the frame width the entering slide starts from.
const ENTER_SHIFT_RATIO: f32 = 0.2;

/// An in-flight slide change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(
        from: usize,
        to: usize,
        direction: Direction,
        started_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            from,
            to,
            direction,
            started_at,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    /// Horizontal offset in columns for the entering slide.
    ///
    /// Forward transitions enter from the right, backward from the left.
    pub fn offset(&self, now: Instant, width: u16) -> i32 {
        let remaining = 1.0 - self.progress(now);
        let shift = (f32::from(width) * ENTER_SHIFT_RATIO * remaining).round() as i32;
        match self.direction {
            Direction::Forward => shift,
            Direction::Backward => -shift,
        }
    }
}
