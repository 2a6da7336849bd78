//! Document store abstraction.
//!
//! Forms persist submissions as documents in named collections. The store
//! offers exactly what they need: point reads, create-if-absent writes and
//! collection counts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use super::HttpError;

/// A document field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Timestamp(DateTime<Utc>),
    /// Resolved to the store's clock when the document is written.
    ServerTimestamp,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Field map of a document, ordered by name.
pub type Fields = BTreeMap<String, FieldValue>;

/// A stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(FieldValue::as_str)
    }
}

/// Result of a create-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Document store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("store returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid store response: {0}")]
    InvalidResponse(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether retrying the same request might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Transport(HttpError::ConnectionFailed(_))
            | StoreError::Transport(HttpError::Timeout(_)) => true,
            StoreError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Collection-oriented document storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read one document. A missing document is `Ok(None)`.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Write a document only if no document with this id exists.
    async fn create(&self, collection: &str, id: &str, fields: Fields)
        -> Result<CreateOutcome, StoreError>;

    /// Number of documents in a collection.
    async fn count(&self, collection: &str) -> Result<usize, StoreError>;
}
