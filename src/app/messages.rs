//! AppMessage enum for async communication within the application.

use crate::error::FormError;

/// Results of background work, delivered to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Newsletter signup finished
    NewsletterResult(Result<(), FormError>),
    /// Contact request finished; `Ok` carries the stored document id
    ContactResult(Result<String, FormError>),
}
