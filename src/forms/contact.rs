//! Contact request form.

use std::time::{Duration, Instant};

use super::newsletter::is_valid_email;
use super::{FormField, FormKind, SubmitStatus};
use crate::error::FormError;
use crate::traits::{CreateOutcome, DocumentStore, FieldValue, Fields};

pub const CONTACT_COLLECTION: &str = "contactRequests";

/// Attempts at a free `"{n} - {name}"` id before giving up.
const MAX_ID_ATTEMPTS: u32 = 3;

/// The thank-you panel returns to the form after this long.
pub const THANK_YOU_DURATION: Duration = Duration::from_secs(8);

const MIN_PHONE_DIGITS: usize = 6;
const MAX_PHONE_DIGITS: usize = 15;

/// Entry in the phone country selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub iso2: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

/// Selector entries. The first one is the default.
pub const COUNTRIES: &[Country] = &[
    Country { iso2: "LB", name: "Lebanon", dial_code: "+961" },
    Country { iso2: "AE", name: "United Arab Emirates", dial_code: "+971" },
    Country { iso2: "SA", name: "Saudi Arabia", dial_code: "+966" },
    Country { iso2: "FR", name: "France", dial_code: "+33" },
    Country { iso2: "GB", name: "United Kingdom", dial_code: "+44" },
    Country { iso2: "US", name: "United States", dial_code: "+1" },
];

/// A validated request ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    /// `+` followed by digits only.
    pub phone: String,
    pub message: String,
    pub country_iso2: String,
    pub country_name: String,
}

impl ContactRequest {
    fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), FieldValue::String(self.name));
        fields.insert("email".into(), FieldValue::String(self.email));
        fields.insert("phone".into(), FieldValue::String(self.phone));
        fields.insert("countryIso2".into(), FieldValue::String(self.country_iso2));
        fields.insert("countryName".into(), FieldValue::String(self.country_name));
        fields.insert("message".into(), FieldValue::String(self.message));
        fields.insert("createdAt".into(), FieldValue::ServerTimestamp);
        fields
    }
}

fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Trim and check the raw inputs.
pub fn validate_contact(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
    country: &Country,
) -> Result<ContactRequest, FormError> {
    let (name, email, phone, message) = (name.trim(), email.trim(), phone.trim(), message.trim());
    if name.is_empty() || email.is_empty() || phone.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    let digits = phone_digits(phone);
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(FormError::InvalidPhone {
            digits: digits.len(),
        });
    }
    Ok(ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: format!("+{}", digits),
        message: message.to_string(),
        country_iso2: country.iso2.to_string(),
        country_name: country.name.to_string(),
    })
}

/// `"{existing + 1} - {name}"`, with `/` replaced so the id stays one path segment.
pub fn contact_document_id(existing: usize, name: &str) -> String {
    format!("{} - {}", existing + 1, name.trim().replace('/', "-"))
}

/// Store a contact request. Returns the document id used.
///
/// The id is derived from the current collection size. When another request
/// took that id first, the next number is tried.
pub async fn submit_contact(
    store: &dyn DocumentStore,
    request: ContactRequest,
) -> Result<String, FormError> {
    let store_err = |source| FormError::Store {
        form: FormKind::Contact,
        source,
    };

    let existing = store.count(CONTACT_COLLECTION).await.map_err(store_err)?;
    let name = request.name.clone();
    let fields = request.into_fields();

    for attempt in 0..MAX_ID_ATTEMPTS {
        let id = contact_document_id(existing + attempt as usize, &name);
        match store
            .create(CONTACT_COLLECTION, &id, fields.clone())
            .await
            .map_err(store_err)?
        {
            CreateOutcome::Created => {
                tracing::info!(id = %id, "Contact request stored");
                return Ok(id);
            }
            CreateOutcome::AlreadyExists => {
                tracing::debug!(id = %id, "Contact id taken, trying next");
            }
        }
    }

    Err(FormError::IdConflict {
        attempts: MAX_ID_ATTEMPTS,
    })
}

/// Focusable inputs of the contact form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Country,
    Phone,
    Message,
    Submit,
}

impl ContactField {
    const ORDER: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Country,
        ContactField::Phone,
        ContactField::Message,
        ContactField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full name",
            ContactField::Email => "Email",
            ContactField::Country => "Country",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
            ContactField::Submit => "Send message",
        }
    }
}

/// Contact page form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    country: usize,
    focus: ContactField,
    status: SubmitStatus,
    submitted_at: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new().with_max_chars(120),
            email: FormField::new().with_max_chars(254),
            phone: FormField::new().with_max_chars(24),
            message: FormField::new().with_max_chars(2000),
            country: 0,
            focus: ContactField::default(),
            status: SubmitStatus::Idle,
            submitted_at: None,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, focus: ContactField) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn country(&self) -> &Country {
        &COUNTRIES[self.country % COUNTRIES.len()]
    }

    pub fn next_country(&mut self) {
        self.country = (self.country + 1) % COUNTRIES.len();
    }

    pub fn prev_country(&mut self) {
        self.country = (self.country + COUNTRIES.len() - 1) % COUNTRIES.len();
    }

    /// The text field under focus, if the focus is on one.
    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Message => Some(&mut self.message),
            ContactField::Country | ContactField::Submit => None,
        }
    }

    /// True while the thank-you panel replaces the form.
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    /// Whole seconds left before the thank-you panel closes.
    pub fn seconds_remaining(&self, now: Instant) -> u64 {
        self.submitted_at.map_or(0, |at| {
            let left = THANK_YOU_DURATION.saturating_sub(now.saturating_duration_since(at));
            left.as_millis().div_ceil(1000) as u64
        })
    }

    /// Validate and move to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, FormError> {
        if self.status.is_submitting() {
            return Err(FormError::SubmissionInProgress);
        }
        match validate_contact(
            self.name.value(),
            self.email.value(),
            self.phone.value(),
            self.message.value(),
            self.country(),
        ) {
            Ok(request) => {
                self.status = SubmitStatus::Submitting;
                Ok(request)
            }
            Err(err) => {
                self.status = SubmitStatus::Error(err.user_message());
                Err(err)
            }
        }
    }

    /// Apply the submission result. Success clears the inputs and keeps the country.
    pub fn finish(&mut self, result: Result<String, FormError>, now: Instant) {
        match result {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.phone.clear();
                self.message.clear();
                self.focus = ContactField::Name;
                self.status = SubmitStatus::Success;
                self.submitted_at = Some(now);
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Contact request failed: {}", err);
                self.status = SubmitStatus::Error(err.user_message());
            }
        }
    }

    /// Back to the form ("Send another message").
    pub fn reset(&mut self) {
        self.submitted_at = None;
        self.status = SubmitStatus::Idle;
    }

    /// Close the thank-you panel once its time is up.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.submitted_at {
            Some(at) if now.saturating_duration_since(at) >= THANK_YOU_DURATION => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn touch(&mut self) {
        if matches!(self.status, SubmitStatus::Error(_)) {
            self.status = SubmitStatus::Idle;
        }
    }
}
