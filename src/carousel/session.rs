//! Index, direction and pause bookkeeping for one carousel instance.

use super::CarouselError;

/// Direction of the most recent navigation, used to pick transition motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Signed index step.
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Per-carousel state.
///
/// `index` always lies in `[0, count)`. The effective playing state is
/// `autoplay_enabled && !hover_paused && !hidden_paused`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSession {
    count: usize,
    index: usize,
    direction: Direction,
    autoplay_enabled: bool,
    hover_paused: bool,
    hidden_paused: bool,
}

impl CarouselSession {
    /// Create a session over `count` slides. `count` must be at least one.
    pub fn new(count: usize, autoplay_enabled: bool) -> Result<Self, CarouselError> {
        if count == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            count,
            index: 0,
            direction: Direction::Forward,
            autoplay_enabled,
            hover_paused: false,
            hidden_paused: false,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn hover_paused(&self) -> bool {
        self.hover_paused
    }

    pub fn hidden_paused(&self) -> bool {
        self.hidden_paused
    }

    /// Paused by hover or by the view being hidden.
    pub fn is_paused(&self) -> bool {
        self.hover_paused || self.hidden_paused
    }

    /// Whether autoplay is currently running.
    pub fn is_playing(&self) -> bool {
        self.autoplay_enabled && !self.is_paused()
    }

    /// Step one slide with wraparound.
    ///
    /// Returns false (and changes nothing) for a single-slide carousel.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if self.count <= 1 {
            return false;
        }
        let count = self.count as isize;
        let next = (self.index as isize + direction.step()).rem_euclid(count);
        self.index = next as usize;
        self.direction = direction;
        true
    }

    /// Jump to `target`.
    ///
    /// Direction is forward when `target` is after the current index and
    /// backward when before. Selecting the current index is a no-op that
    /// leaves the direction untouched.
    pub fn go_to(&mut self, target: usize) -> Result<bool, CarouselError> {
        if target >= self.count {
            return Err(CarouselError::IndexOutOfRange {
                index: target,
                count: self.count,
            });
        }
        if target == self.index {
            return Ok(false);
        }
        self.direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        Ok(true)
    }

    /// Flip autoplay; returns the new setting.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay_enabled = !self.autoplay_enabled;
        self.autoplay_enabled
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay_enabled = enabled;
    }

    pub fn set_hover_paused(&mut self, paused: bool) {
        self.hover_paused = paused;
    }

    pub fn set_hidden_paused(&mut self, paused: bool) {
        self.hidden_paused = paused;
    }
}
