//! Platform capability abstractions consumed by the carousel.
//!
//! The carousel needs two facts from its host: whether the view is hidden and
//! whether the user prefers reduced motion. Both can be queried once and
//! watched for changes. Hosts that cannot answer return a [`PlatformError`],
//! which callers treat as "visible" and "no preference".

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Errors from platform capability queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("platform capability unsupported: {0}")]
    Unsupported(&'static str),

    #[error("platform query failed: {0}")]
    QueryFailed(String),
}

/// Change callback. Receives the new boolean value of the watched capability.
pub type ChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Handle for a registered change callback.
///
/// The callback is removed when the handle is dropped or
/// [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription removes the callback immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription with nothing to release.
    pub fn noop() -> Self {
        Self { unsubscribe: None }
    }

    /// Remove the callback now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Source of view visibility, such as terminal focus.
pub trait VisibilitySource: Send + Sync {
    /// Whether the view is currently hidden.
    fn is_hidden(&self) -> Result<bool, PlatformError>;

    /// Watch for visibility changes. The callback receives the new hidden flag.
    fn on_visibility_change(&self, callback: ChangeCallback) -> Result<Subscription, PlatformError>;
}

/// Source of the reduced-motion accessibility preference.
pub trait MotionPreference: Send + Sync {
    fn prefers_reduced_motion(&self) -> Result<bool, PlatformError>;

    /// Watch for preference changes. The callback receives the new value.
    fn on_preference_change(&self, callback: ChangeCallback) -> Result<Subscription, PlatformError>;
}

/// The platform ports a carousel is built against.
#[derive(Clone)]
pub struct PlatformPorts {
    pub visibility: Arc<dyn VisibilitySource>,
    pub motion: Arc<dyn MotionPreference>,
}

impl PlatformPorts {
    pub fn new(visibility: Arc<dyn VisibilitySource>, motion: Arc<dyn MotionPreference>) -> Self {
        Self { visibility, motion }
    }
}

impl fmt::Debug for PlatformPorts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformPorts").finish_non_exhaustive()
    }
}
