//! Newsletter signup.

use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FormField, FormKind, SubmitStatus};
use crate::error::FormError;
use crate::traits::{CreateOutcome, DocumentStore, FieldValue, Fields};

pub const NEWSLETTER_COLLECTION: &str = "newsletter_subscribers";

/// Value of the `source` field on subscriber records.
pub const NEWSLETTER_SOURCE: &str = "terminal_footer";

/// How long the success message stays up.
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_secs(4);

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Document key for an email: trimmed, lowercased, dots replaced by `∙`.
pub fn normalize_email_key(email: &str) -> String {
    email.trim().to_lowercase().replace('.', "∙")
}

/// Record a subscription unless the normalized email is already present.
pub async fn subscribe(
    store: &dyn DocumentStore,
    email: &str,
    user_agent: &str,
) -> Result<(), FormError> {
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }

    let key = normalize_email_key(email);
    let store_err = |source| FormError::Store {
        form: FormKind::Newsletter,
        source,
    };

    if store
        .get(NEWSLETTER_COLLECTION, &key)
        .await
        .map_err(store_err)?
        .is_some()
    {
        tracing::info!("Newsletter signup skipped, already subscribed");
        return Err(FormError::AlreadySubscribed);
    }

    let mut fields = Fields::new();
    fields.insert("email".into(), FieldValue::String(email.to_lowercase()));
    fields.insert("createdAt".into(), FieldValue::ServerTimestamp);
    fields.insert("userAgent".into(), user_agent.into());
    fields.insert("source".into(), NEWSLETTER_SOURCE.into());

    match store
        .create(NEWSLETTER_COLLECTION, &key, fields)
        .await
        .map_err(store_err)?
    {
        CreateOutcome::Created => {
            tracing::info!("Newsletter signup recorded");
            Ok(())
        }
        CreateOutcome::AlreadyExists => Err(FormError::AlreadySubscribed),
    }
}

/// Footer signup form state.
#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    pub email: FormField,
    status: SubmitStatus,
    success_at: Option<Instant>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: FormField::new().with_max_chars(254),
            ..Self::default()
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Validate and move to `Submitting`. Returns the email to send.
    ///
    /// Validation failures set the error status and return the error.
    pub fn begin_submit(&mut self) -> Result<String, FormError> {
        if self.status.is_submitting() {
            return Err(FormError::SubmissionInProgress);
        }
        let email = self.email.trimmed().to_string();
        if email.is_empty() || !is_valid_email(&email) {
            self.status = SubmitStatus::Error(FormError::InvalidEmail.user_message());
            return Err(FormError::InvalidEmail);
        }
        self.status = SubmitStatus::Submitting;
        self.success_at = None;
        Ok(email)
    }

    /// Apply the submission result.
    pub fn finish(&mut self, result: Result<(), FormError>, now: Instant) {
        match result {
            Ok(()) => {
                self.email.clear();
                self.status = SubmitStatus::Success;
                self.success_at = Some(now);
            }
            Err(err) => {
                if !err.is_validation() {
                    tracing::warn!(code = err.error_code(), "Newsletter signup failed: {}", err);
                }
                self.status = SubmitStatus::Error(err.user_message());
            }
        }
    }

    /// Dismiss the success message once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.success_at {
            Some(at) if now.saturating_duration_since(at) >= SUCCESS_DISMISS_AFTER => {
                self.success_at = None;
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Editing clears a stale error.
    pub fn touch(&mut self) {
        if matches!(self.status, SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}
