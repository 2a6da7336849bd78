//! Form validation and submission errors.

use std::fmt;

use crate::forms::FormKind;
use crate::traits::StoreError;

/// Why a form submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank.
    MissingFields,

    InvalidEmail,

    /// Phone number does not have 6 to 15 digits.
    InvalidPhone { digits: usize },

    /// The normalized email already has a subscriber record.
    AlreadySubscribed,

    /// A submission for this form is still in flight.
    SubmissionInProgress,

    /// Every candidate document id was taken.
    IdConflict { attempts: u32 },

    /// The store failed.
    Store { form: FormKind, source: StoreError },
}

impl FormError {
    /// Input problems the user can fix, as opposed to store failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FormError::MissingFields
                | FormError::InvalidEmail
                | FormError::InvalidPhone { .. }
                | FormError::AlreadySubscribed
        )
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            FormError::Store { source, .. } => source.is_retryable(),
            FormError::IdConflict { .. } => true,
            _ => false,
        }
    }

    /// Message shown inline under the form.
    pub fn user_message(&self) -> String {
        match self {
            FormError::MissingFields => "Please fill in all fields.".to_string(),
            FormError::InvalidEmail => "Please enter a valid email address.".to_string(),
            FormError::InvalidPhone { .. } => {
                "Please enter a valid phone number (6–15 digits).".to_string()
            }
            FormError::AlreadySubscribed => {
                "You’re already subscribed with this email!".to_string()
            }
            FormError::SubmissionInProgress => "Still sending, please wait.".to_string(),
            FormError::IdConflict { .. } => submission_failed(FormKind::Contact),
            FormError::Store { form, .. } => submission_failed(*form),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FormError::MissingFields => "E_FORM_MISSING",
            FormError::InvalidEmail => "E_FORM_EMAIL",
            FormError::InvalidPhone { .. } => "E_FORM_PHONE",
            FormError::AlreadySubscribed => "E_FORM_DUPLICATE",
            FormError::SubmissionInProgress => "E_FORM_BUSY",
            FormError::IdConflict { .. } => "E_FORM_ID_CONFLICT",
            FormError::Store { .. } => "E_FORM_STORE",
        }
    }
}

fn submission_failed(form: FormKind) -> String {
    match form {
        FormKind::Newsletter => "Something went wrong. Please try again.".to_string(),
        FormKind::Contact => {
            "Something went wrong while sending your message. Please try again.".to_string()
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingFields => write!(f, "Required form fields are empty"),
            FormError::InvalidEmail => write!(f, "Invalid email address"),
            FormError::InvalidPhone { digits } => {
                write!(f, "Invalid phone number ({} digits)", digits)
            }
            FormError::AlreadySubscribed => write!(f, "Email already subscribed"),
            FormError::SubmissionInProgress => write!(f, "Submission already in progress"),
            FormError::IdConflict { attempts } => {
                write!(f, "No free document id after {} attempts", attempts)
            }
            FormError::Store { form, source } => {
                write!(f, "{} submission failed: {}", form, source)
            }
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FormError::MissingFields.user_message(),
            "Please fill in all fields."
        );
        assert_eq!(
            FormError::InvalidPhone { digits: 3 }.user_message(),
            "Please enter a valid phone number (6–15 digits)."
        );
        assert_eq!(
            FormError::AlreadySubscribed.user_message(),
            "You’re already subscribed with this email!"
        );
    }

    #[test]
    fn test_store_message_depends_on_form() {
        let source = StoreError::Unavailable("down".into());
        let newsletter = FormError::Store {
            form: FormKind::Newsletter,
            source: source.clone(),
        };
        let contact = FormError::Store {
            form: FormKind::Contact,
            source,
        };
        assert_eq!(
            newsletter.user_message(),
            "Something went wrong. Please try again."
        );
        assert!(contact.user_message().contains("sending your message"));
        assert!(!contact.is_validation());
        assert!(std::error::Error::source(&contact).is_some());
    }

    #[test]
    fn test_validation_classification() {
        assert!(FormError::InvalidEmail.is_validation());
        assert!(!FormError::InvalidEmail.is_retryable());
        assert!(FormError::IdConflict { attempts: 3 }.is_retryable());
        assert_eq!(FormError::SubmissionInProgress.error_code(), "E_FORM_BUSY");
    }
}
