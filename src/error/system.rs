//! System-level error types: filesystem and environment.

use std::fmt;
use std::path::PathBuf;

/// Filesystem and environment errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    FileNotFound { path: PathBuf },

    PermissionDenied { path: PathBuf, operation: String },

    DirectoryCreationFailed { path: PathBuf, message: String },

    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine the home directory.
    NoHomeDirectory,

    /// Environment variable holds an unusable value.
    EnvironmentError { variable: String, message: String },
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!(
                    "Permission denied: cannot {} '{}'.",
                    operation,
                    path.display()
                )
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Please check HOME.".to_string()
            }
            SystemError::EnvironmentError { variable, message } => {
                format!("Environment variable '{}' is invalid: {}", variable, message)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::EnvironmentError { .. } => "E_SYS_ENV",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::FileNotFound { path } => {
                write!(f, "File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(
                    f,
                    "Failed to create directory '{}': {}",
                    path.display(),
                    message
                )
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(
                    f,
                    "I/O error during {} at '{}': {}",
                    operation,
                    p.display(),
                    message
                ),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::NoHomeDirectory => write!(f, "Could not determine home directory"),
            SystemError::EnvironmentError { variable, message } => {
                write!(f, "Environment variable '{}' error: {}", variable, message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error against the path and operation it came from.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
