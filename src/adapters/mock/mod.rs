//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with queued responses
//! - [`InMemoryStore`] - document store with failure injection
//! - [`FakePlatform`] - scriptable visibility and reduced-motion ports

pub mod http;
pub mod platform;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use platform::FakePlatform;
pub use store::InMemoryStore;
