//! The carousel controller.

use std::time::Instant;

use tokio::sync::mpsc;

use crate::traits::{PlatformPorts, Subscription};

use super::{
    AutoplayTimer, CarouselConfig, CarouselError, CarouselSession, Direction, Slide, SlideDeck,
    SwipeTracker, Transition,
};

/// A platform change forwarded from a subscription callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSignal {
    VisibilityChanged { hidden: bool },
    ReducedMotionChanged { reduced: bool },
}

/// One mounted carousel.
///
/// Platform callbacks only enqueue [`PlatformSignal`]s; they are applied on
/// the next [`Carousel::tick`]. The autoplay timer is armed exactly when the
/// carousel is playing and has more than one slide. Dropping the carousel
/// releases its platform subscriptions.
#[derive(Debug)]
pub struct Carousel {
    deck: SlideDeck,
    config: CarouselConfig,
    session: CarouselSession,
    timer: AutoplayTimer,
    swipe: SwipeTracker,
    transition: Option<Transition>,
    reduced_motion: bool,
    subscriptions: Vec<Subscription>,
    signals: mpsc::UnboundedReceiver<PlatformSignal>,
}

impl Carousel {
    /// Mount a carousel.
    ///
    /// Reduced motion detected here starts the carousel with autoplay off.
    /// Failed platform queries are treated as "visible" and "no preference".
    pub fn new(
        slides: Vec<Slide>,
        config: CarouselConfig,
        ports: &PlatformPorts,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let deck = SlideDeck::new(slides)?;

        let reduced_motion = ports.motion.prefers_reduced_motion().unwrap_or_else(|e| {
            tracing::debug!("Reduced-motion query failed, assuming no preference: {}", e);
            false
        });
        let hidden = ports.visibility.is_hidden().unwrap_or_else(|e| {
            tracing::debug!("Visibility query failed, assuming visible: {}", e);
            false
        });

        let mut session = CarouselSession::new(deck.len(), config.autoplay && !reduced_motion)?;
        session.set_hidden_paused(hidden);

        let (tx, signals) = mpsc::unbounded_channel();
        let mut subscriptions = Vec::with_capacity(2);

        let visibility_tx = tx.clone();
        match ports.visibility.on_visibility_change(Box::new(move |hidden| {
            let _ = visibility_tx.send(PlatformSignal::VisibilityChanged { hidden });
        })) {
            Ok(sub) => subscriptions.push(sub),
            Err(e) => tracing::debug!("Visibility changes unavailable: {}", e),
        }

        match ports.motion.on_preference_change(Box::new(move |reduced| {
            let _ = tx.send(PlatformSignal::ReducedMotionChanged { reduced });
        })) {
            Ok(sub) => subscriptions.push(sub),
            Err(e) => tracing::debug!("Reduced-motion changes unavailable: {}", e),
        }

        let mut carousel = Self {
            timer: AutoplayTimer::new(config.interval()),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            deck,
            config,
            session,
            transition: None,
            reduced_motion,
            subscriptions,
            signals,
        };
        carousel.sync_timer(now);

        tracing::debug!(
            slides = carousel.deck.len(),
            autoplay = carousel.session.autoplay_enabled(),
            hidden,
            reduced_motion,
            "Carousel mounted"
        );
        Ok(carousel)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn session(&self) -> &CarouselSession {
        &self.session
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn index(&self) -> usize {
        self.session.index()
    }

    pub fn direction(&self) -> Direction {
        self.session.direction()
    }

    pub fn current(&self) -> &Slide {
        self.deck.wrapped(self.session.index())
    }

    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    pub fn is_paused(&self) -> bool {
        self.session.is_paused()
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.session.autoplay_enabled()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_tracking()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Step one slide. Restarts the autoplay window.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> bool {
        let from = self.session.index();
        let changed = self.session.advance(direction);
        if changed {
            self.start_transition(from, now);
            self.sync_timer(now);
        }
        changed
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.advance(Direction::Forward, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        self.advance(Direction::Backward, now)
    }

    /// Jump to a slide. Restarts the autoplay window when the index changes.
    pub fn go_to(&mut self, target: usize, now: Instant) -> Result<bool, CarouselError> {
        let from = self.session.index();
        let changed = self.session.go_to(target)?;
        if changed {
            self.start_transition(from, now);
            self.sync_timer(now);
        }
        Ok(changed)
    }

    /// Flip autoplay; returns the new setting.
    pub fn toggle_autoplay(&mut self, now: Instant) -> bool {
        let enabled = self.session.toggle_autoplay();
        tracing::debug!(enabled, "Carousel autoplay toggled");
        self.sync_timer(now);
        enabled
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Pointer entered the carousel. Returns true when the pause state changed.
    pub fn hover_enter(&mut self, now: Instant) -> bool {
        self.set_hover(true, now)
    }

    /// Pointer left the carousel.
    pub fn hover_leave(&mut self, now: Instant) -> bool {
        self.set_hover(false, now)
    }

    fn set_hover(&mut self, hovered: bool, now: Instant) -> bool {
        if !self.config.pause_on_hover || self.session.hover_paused() == hovered {
            return false;
        }
        let was_playing = self.session.is_playing();
        self.session.set_hover_paused(hovered);
        if was_playing != self.session.is_playing() {
            self.sync_timer(now);
        }
        true
    }

    /// Pointer pressed at `x` logical pixels.
    pub fn pointer_down(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Abandon a drag, e.g. when the pointer is released elsewhere.
    pub fn pointer_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Pointer released at `x`. Navigates if the drag was a swipe.
    pub fn pointer_up(&mut self, x: f32, now: Instant) -> Option<Direction> {
        let direction = self.swipe.end(x)?;
        self.advance(direction, now);
        Some(direction)
    }

    // ========================================================================
    // Time and platform events
    // ========================================================================

    /// Apply queued platform signals, fire due autoplay steps and settle the
    /// transition. Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Ok(signal) = self.signals.try_recv() {
            changed |= self.apply_signal(signal, now);
        }

        let fired = self.timer.poll(now);
        if fired > 0 {
            let from = self.session.index();
            for _ in 0..fired {
                self.session.advance(Direction::Forward);
            }
            tracing::trace!(fired, index = self.session.index(), "Autoplay advanced");
            self.start_transition(from, now);
            changed = true;
        }

        if let Some(transition) = self.transition {
            if transition.is_finished(now) {
                self.transition = None;
            }
            changed = true;
        }

        changed
    }

    /// Apply a platform change directly. Returns true when state changed.
    pub fn apply_signal(&mut self, signal: PlatformSignal, now: Instant) -> bool {
        match signal {
            PlatformSignal::VisibilityChanged { hidden } => {
                if self.session.hidden_paused() == hidden {
                    return false;
                }
                let was_playing = self.session.is_playing();
                self.session.set_hidden_paused(hidden);
                if was_playing != self.session.is_playing() {
                    self.sync_timer(now);
                }
                tracing::debug!(hidden, "Carousel visibility changed");
                true
            }
            PlatformSignal::ReducedMotionChanged { reduced } => {
                if self.reduced_motion == reduced {
                    return false;
                }
                self.reduced_motion = reduced;
                if reduced {
                    self.transition = None;
                    if self.session.autoplay_enabled() {
                        tracing::info!("Reduced motion requested, stopping autoplay");
                        self.session.set_autoplay(false);
                        self.sync_timer(now);
                    }
                }
                true
            }
        }
    }

    /// Arm a fresh window when playing with more than one slide, else cancel.
    fn sync_timer(&mut self, now: Instant) {
        if self.session.is_playing() && self.deck.len() > 1 {
            self.timer.arm(now);
        } else {
            self.timer.cancel();
        }
    }

    fn start_transition(&mut self, from: usize, now: Instant) {
        let to = self.session.index();
        if self.reduced_motion || from == to {
            self.transition = None;
            return;
        }
        self.transition = Some(Transition::new(
            from,
            to,
            self.session.direction(),
            now,
            self.config.transition(),
        ));
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.timer.cancel();
        tracing::trace!(
            subscriptions = self.subscriptions.len(),
            "Carousel unmounted"
        );
    }
}
