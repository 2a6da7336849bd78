//! Unified error type for the application.

use std::fmt;
use std::path::PathBuf;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::form::FormError;
use super::system::{classify_io_error, SystemError};
use super::ui::UiError;
use crate::carousel::CarouselError;
use crate::traits::{HttpError, StoreError};

/// Unified error type.
///
/// Collects the domain errors so callers get one category, retry policy and
/// user message regardless of where a failure started.
#[derive(Debug)]
pub enum ListickError {
    Carousel(CarouselError),

    Form(FormError),

    Store(StoreError),

    Ui(UiError),

    System(SystemError),

    /// Invalid settings file or value.
    Config { path: Option<PathBuf>, message: String },

    WithContext {
        error: Box<ListickError>,
        context: ErrorContext,
    },
}

impl ListickError {
    pub fn config(message: impl Into<String>) -> Self {
        ListickError::Config {
            path: None,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ListickError::Carousel(_) => ErrorCategory::Configuration,
            ListickError::Form(err) => {
                if err.is_validation() {
                    ErrorCategory::User
                } else if let FormError::Store { source, .. } = err {
                    store_category(source)
                } else {
                    ErrorCategory::Client
                }
            }
            ListickError::Store(err) => store_category(err),
            ListickError::Ui(_) | ListickError::System(_) => ErrorCategory::System,
            ListickError::Config { .. } => ErrorCategory::Configuration,
            ListickError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ListickError::Form(err) => err.is_retryable(),
            ListickError::Store(err) => err.is_retryable(),
            ListickError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ListickError::Carousel(err) => format!("Carousel could not start: {}", err),
            ListickError::Form(err) => err.user_message(),
            ListickError::Store(err) => match store_category(err) {
                ErrorCategory::Network => {
                    "Could not reach the storage service. Check your connection.".to_string()
                }
                ErrorCategory::Configuration => {
                    "Storage is not configured. Submissions are kept locally.".to_string()
                }
                _ => "The storage service rejected the request.".to_string(),
            },
            ListickError::Ui(err) => err.user_message(),
            ListickError::System(err) => err.user_message(),
            ListickError::Config { path, message } => match path {
                Some(p) => format!("Invalid settings in '{}': {}", p.display(), message),
                None => format!("Invalid settings: {}", message),
            },
            ListickError::WithContext { error, .. } => error.user_message(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ListickError::Carousel(CarouselError::NoSlides) => "E_CAROUSEL_EMPTY",
            ListickError::Carousel(CarouselError::InvalidInterval) => "E_CAROUSEL_INTERVAL",
            ListickError::Carousel(CarouselError::IndexOutOfRange { .. }) => "E_CAROUSEL_INDEX",
            ListickError::Form(err) => err.error_code(),
            ListickError::Store(_) => "E_STORE",
            ListickError::Ui(err) => err.error_code(),
            ListickError::System(err) => err.error_code(),
            ListickError::Config { .. } => "E_CONFIG",
            ListickError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        ListickError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ListickError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The innermost error, without context wrappers.
    pub fn inner(&self) -> &ListickError {
        match self {
            ListickError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }
}

fn store_category(err: &StoreError) -> ErrorCategory {
    match err {
        StoreError::Transport(HttpError::InvalidUrl(_)) => ErrorCategory::Configuration,
        StoreError::Transport(_) => ErrorCategory::Network,
        StoreError::Status { status, .. } if *status >= 500 || *status == 429 => {
            ErrorCategory::Server
        }
        StoreError::Status { .. } | StoreError::InvalidResponse(_) => ErrorCategory::Client,
        StoreError::Unavailable(_) => ErrorCategory::Configuration,
    }
}

impl fmt::Display for ListickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListickError::Carousel(err) => write!(f, "{}", err),
            ListickError::Form(err) => write!(f, "{}", err),
            ListickError::Store(err) => write!(f, "{}", err),
            ListickError::Ui(err) => write!(f, "{}", err),
            ListickError::System(err) => write!(f, "{}", err),
            ListickError::Config { path, message } => match path {
                Some(p) => write!(f, "Config error in '{}': {}", p.display(), message),
                None => write!(f, "Config error: {}", message),
            },
            ListickError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for ListickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListickError::Carousel(err) => Some(err),
            ListickError::Form(err) => Some(err),
            ListickError::Store(err) => Some(err),
            ListickError::Ui(err) => Some(err),
            ListickError::System(err) => Some(err),
            ListickError::Config { .. } => None,
            ListickError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<CarouselError> for ListickError {
    fn from(err: CarouselError) -> Self {
        ListickError::Carousel(err)
    }
}

impl From<FormError> for ListickError {
    fn from(err: FormError) -> Self {
        ListickError::Form(err)
    }
}

impl From<StoreError> for ListickError {
    fn from(err: StoreError) -> Self {
        ListickError::Store(err)
    }
}

impl From<UiError> for ListickError {
    fn from(err: UiError) -> Self {
        ListickError::Ui(err)
    }
}

impl From<SystemError> for ListickError {
    fn from(err: SystemError) -> Self {
        ListickError::System(err)
    }
}

impl From<std::io::Error> for ListickError {
    fn from(err: std::io::Error) -> Self {
        ListickError::System(classify_io_error(err, None, "io"))
    }
}

impl From<serde_json::Error> for ListickError {
    fn from(err: serde_json::Error) -> Self {
        ListickError::config(err.to_string())
    }
}
