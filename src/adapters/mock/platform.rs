//! Scriptable platform for testing carousel behavior.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::adapters::terminal_platform::ListenerSet;
use crate::traits::{
    ChangeCallback, MotionPreference, PlatformError, PlatformPorts, Subscription,
    VisibilitySource,
};

/// Fake platform implementing both ports.
///
/// Queries and subscriptions can be made to fail to exercise the
/// degraded-platform path.
///
/// # Example
///
/// ```
/// use listick::adapters::mock::FakePlatform;
///
/// let platform = FakePlatform::new().with_reduced_motion(true);
/// let ports = platform.ports();
/// assert!(ports.motion.prefers_reduced_motion().unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakePlatform {
    hidden: Arc<AtomicBool>,
    reduced_motion: Arc<AtomicBool>,
    unsupported: Arc<AtomicBool>,
    visibility_listeners: ListenerSet,
    motion_listeners: ListenerSet,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform on which every query and subscription fails.
    pub fn unsupported() -> Self {
        let platform = Self::default();
        platform.unsupported.store(true, Ordering::SeqCst);
        platform
    }

    pub fn with_hidden(self, hidden: bool) -> Self {
        self.hidden.store(hidden, Ordering::SeqCst);
        self
    }

    pub fn with_reduced_motion(self, reduced: bool) -> Self {
        self.reduced_motion.store(reduced, Ordering::SeqCst);
        self
    }

    /// Change visibility and notify subscribers.
    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.store(hidden, Ordering::SeqCst);
        self.visibility_listeners.notify(hidden);
    }

    /// Change the preference and notify subscribers.
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.store(reduced, Ordering::SeqCst);
        self.motion_listeners.notify(reduced);
    }

    /// Active subscriptions across both ports.
    pub fn listener_count(&self) -> usize {
        self.visibility_listeners.len() + self.motion_listeners.len()
    }

    pub fn ports(&self) -> PlatformPorts {
        PlatformPorts::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }

    fn check_supported(&self, capability: &'static str) -> Result<(), PlatformError> {
        if self.unsupported.load(Ordering::SeqCst) {
            Err(PlatformError::Unsupported(capability))
        } else {
            Ok(())
        }
    }
}

impl VisibilitySource for FakePlatform {
    fn is_hidden(&self) -> Result<bool, PlatformError> {
        self.check_supported("visibility")?;
        Ok(self.hidden.load(Ordering::SeqCst))
    }

    fn on_visibility_change(
        &self,
        callback: ChangeCallback,
    ) -> Result<Subscription, PlatformError> {
        self.check_supported("visibility")?;
        Ok(self.visibility_listeners.add(callback))
    }
}

impl MotionPreference for FakePlatform {
    fn prefers_reduced_motion(&self) -> Result<bool, PlatformError> {
        self.check_supported("reduced-motion")?;
        Ok(self.reduced_motion.load(Ordering::SeqCst))
    }

    fn on_preference_change(
        &self,
        callback: ChangeCallback,
    ) -> Result<Subscription, PlatformError> {
        self.check_supported("reduced-motion")?;
        Ok(self.motion_listeners.add(callback))
    }
}
