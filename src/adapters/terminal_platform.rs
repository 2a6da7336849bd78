//! Terminal-backed platform adapters.
//!
//! A terminal has no page visibility API, so focus events stand in for it:
//! `FocusLost` hides the view and `FocusGained` shows it again. The
//! reduced-motion preference comes from settings or `LISTICK_REDUCED_MOTION`
//! and can be flipped at runtime from the UI.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::traits::{
    ChangeCallback, MotionPreference, PlatformError, PlatformPorts, Subscription,
    VisibilitySource,
};

/// Environment variable holding the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "LISTICK_REDUCED_MOTION";

#[derive(Default)]
struct ListenerInner {
    next_id: u64,
    listeners: Vec<(u64, Arc<ChangeCallback>)>,
}

/// A set of change callbacks that hands out self-removing [`Subscription`]s.
#[derive(Clone, Default)]
pub struct ListenerSet {
    inner: Arc<Mutex<ListenerInner>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Dropping the returned subscription removes it.
    pub fn add(&self, callback: ChangeCallback) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::new(callback)));
            id
        };
        let weak: Weak<Mutex<ListenerInner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Invoke every callback with `value`.
    ///
    /// Callbacks run outside the lock, so they may subscribe or unsubscribe.
    pub fn notify(&self, value: bool) {
        let callbacks: Vec<Arc<ChangeCallback>> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            (**callback)(value);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}

/// Poisoned listener lists are still structurally valid.
fn lock(inner: &Mutex<ListenerInner>) -> std::sync::MutexGuard<'_, ListenerInner> {
    inner
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Visibility driven by terminal focus events.
#[derive(Debug, Clone, Default)]
pub struct FocusVisibility {
    hidden: Arc<AtomicBool>,
    listeners: ListenerSet,
}

impl FocusVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a focus change. Listeners hear only actual transitions.
    pub fn set_hidden(&self, hidden: bool) {
        let previous = self.hidden.swap(hidden, Ordering::SeqCst);
        if previous != hidden {
            tracing::debug!(hidden, "Terminal visibility changed");
            self.listeners.notify(hidden);
        }
    }

    pub fn focus_gained(&self) {
        self.set_hidden(false);
    }

    pub fn focus_lost(&self) {
        self.set_hidden(true);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl VisibilitySource for FocusVisibility {
    fn is_hidden(&self) -> Result<bool, PlatformError> {
        Ok(self.hidden.load(Ordering::SeqCst))
    }

    fn on_visibility_change(
        &self,
        callback: ChangeCallback,
    ) -> Result<Subscription, PlatformError> {
        Ok(self.listeners.add(callback))
    }
}

/// Reduced-motion preference shared between the UI and mounted carousels.
#[derive(Debug, Clone, Default)]
pub struct SharedMotionPreference {
    reduced: Arc<AtomicBool>,
    listeners: ListenerSet,
}

impl SharedMotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self {
            reduced: Arc::new(AtomicBool::new(reduced)),
            listeners: ListenerSet::new(),
        }
    }

    /// Update the preference. Listeners hear only actual transitions.
    pub fn set(&self, reduced: bool) {
        let previous = self.reduced.swap(reduced, Ordering::SeqCst);
        if previous != reduced {
            tracing::info!(reduced, "Reduced-motion preference changed");
            self.listeners.notify(reduced);
        }
    }

    /// Flip the preference; returns the new value.
    pub fn toggle(&self) -> bool {
        let reduced = !self.reduced.load(Ordering::SeqCst);
        self.set(reduced);
        reduced
    }

    pub fn get(&self) -> bool {
        self.reduced.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl MotionPreference for SharedMotionPreference {
    fn prefers_reduced_motion(&self) -> Result<bool, PlatformError> {
        Ok(self.get())
    }

    fn on_preference_change(
        &self,
        callback: ChangeCallback,
    ) -> Result<Subscription, PlatformError> {
        Ok(self.listeners.add(callback))
    }
}

/// Parse a reduced-motion flag value such as `1`, `true`, `off`.
pub fn parse_reduced_motion(value: &str) -> Result<bool, PlatformError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Ok(true),
        "0" | "false" | "no" | "off" | "no-preference" | "" => Ok(false),
        other => Err(PlatformError::QueryFailed(format!(
            "unrecognized {} value '{}'",
            REDUCED_MOTION_ENV, other
        ))),
    }
}

/// Terminal adapters bundled with the ports view of them.
#[derive(Debug, Clone)]
pub struct TerminalPlatform {
    pub visibility: FocusVisibility,
    pub motion: SharedMotionPreference,
}

impl TerminalPlatform {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            visibility: FocusVisibility::new(),
            motion: SharedMotionPreference::new(reduced_motion),
        }
    }

    pub fn ports(&self) -> PlatformPorts {
        PlatformPorts::new(
            Arc::new(self.visibility.clone()),
            Arc::new(self.motion.clone()),
        )
    }
}
