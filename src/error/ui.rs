//! Terminal and UI error types.

use std::fmt;

/// Errors from terminal setup, teardown and drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    TerminalInitFailed { message: String },

    TerminalRestoreFailed { message: String },

    RenderFailed { component: String, message: String },

    /// The event stream closed unexpectedly.
    EventStreamClosed,
}

impl UiError {
    /// Whether the UI can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore the terminal. Run `reset` if the display looks wrong.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to draw the {}.", component)
            }
            UiError::EventStreamClosed => "Terminal input closed unexpectedly.".to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
            UiError::EventStreamClosed => "E_UI_EVENTS",
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::TerminalInitFailed { message } => {
                write!(f, "Terminal initialization failed: {}", message)
            }
            UiError::TerminalRestoreFailed { message } => {
                write!(f, "Terminal restore failed: {}", message)
            }
            UiError::RenderFailed { component, message } => {
                write!(f, "Render failed in {}: {}", component, message)
            }
            UiError::EventStreamClosed => write!(f, "Terminal event stream closed"),
        }
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(UiError::RenderFailed {
            component: "carousel".into(),
            message: "x".into()
        }
        .is_recoverable());
        assert!(!UiError::TerminalInitFailed {
            message: "x".into()
        }
        .is_recoverable());
    }

    #[test]
    fn test_messages_and_codes() {
        let err = UiError::TerminalRestoreFailed {
            message: "raw mode".into(),
        };
        assert_eq!(err.to_string(), "Terminal restore failed: raw mode");
        assert_eq!(err.error_code(), "E_UI_TERM_RESTORE");
        assert!(err.user_message().contains("reset"));
        assert_eq!(UiError::EventStreamClosed.error_code(), "E_UI_EVENTS");
    }
}
