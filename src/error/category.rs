//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// Categories drive retry policy, user messaging and whether an error is
/// shown inline (user input problems) or logged as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures and timeouts. Transient.
    Network,

    /// Store-side failures (5xx, rate limiting). Transient.
    Server,

    /// Requests the store rejected, or invalid internal state. Not retryable.
    Client,

    /// Invalid form input. Fixed by the user.
    User,

    /// Filesystem and terminal errors.
    System,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Storage service issue",
            ErrorCategory::Client => "Application error",
            ErrorCategory::User => "Input needs attention",
            ErrorCategory::System => "System error",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and try again",
            ErrorCategory::Server => "The storage service may be busy. Please try again later",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and terminal support",
            ErrorCategory::Configuration => {
                "Check ~/.listick/config.json and LISTICK_* environment variables"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_category_hints() {
        assert!(ErrorCategory::Network.recovery_hint().contains("internet"));
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .contains("config.json"));
        assert!(ErrorCategory::User.description().contains("Input"));
    }
}
