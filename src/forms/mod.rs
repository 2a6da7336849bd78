//! Newsletter and contact forms.
//!
//! Validation and submission live here; the footer and the contact page only
//! render the state and forward key presses.

pub mod contact;
pub mod field;
pub mod newsletter;

use std::fmt;

pub use contact::{
    contact_document_id, submit_contact, validate_contact, Country, ContactField, ContactForm,
    ContactRequest, CONTACT_COLLECTION, COUNTRIES,
};
pub use field::FormField;
pub use newsletter::{
    is_valid_email, normalize_email_key, subscribe, NewsletterForm, NEWSLETTER_COLLECTION,
    NEWSLETTER_SOURCE,
};

/// Which form a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Newsletter,
    Contact,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Newsletter => write!(f, "Newsletter"),
            FormKind::Contact => write!(f, "Contact"),
        }
    }
}

/// Submission state shown under a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// User-facing message.
    Error(String),
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
