//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET/POST used by the document store
//! - [`DocumentStore`] - collection storage for form submissions
//! - [`VisibilitySource`] - whether the view is hidden
//! - [`MotionPreference`] - reduced-motion accessibility preference

pub mod http;
pub mod platform;
pub mod store;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use platform::{
    ChangeCallback, MotionPreference, PlatformError, PlatformPorts, Subscription,
    VisibilitySource,
};
pub use store::{CreateOutcome, Document, DocumentStore, FieldValue, Fields, StoreError};
