//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FirestoreStore`] - document store over the Firestore REST API
//! - [`JsonFileStore`] - local file store for offline use
//! - [`TerminalPlatform`] - focus-driven visibility and a shared motion preference
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - queued HTTP responses
//! - [`mock::InMemoryStore`] - in-memory documents
//! - [`mock::FakePlatform`] - scriptable platform ports

pub mod firestore;
pub mod json_file_store;
pub mod mock;
pub mod reqwest_http;
pub mod terminal_platform;

pub use firestore::{FirestoreSettings, FirestoreStore, DEFAULT_FIRESTORE_URL};
pub use json_file_store::JsonFileStore;
pub use mock::{FakePlatform, InMemoryStore, MockHttpClient};
pub use reqwest_http::{user_agent, ReqwestHttpClient};
pub use terminal_platform::{FocusVisibility, SharedMotionPreference, TerminalPlatform};
