//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to
//! `~/.listick/logs/listick.log`. Filtering follows `LISTICK_LOG`
//! (EnvFilter syntax), defaulting to `listick=info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{classify_io_error, SystemError};

pub const LOG_ENV: &str = "LISTICK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "listick=info";

/// `~/.listick/logs`.
pub fn default_log_dir() -> Result<PathBuf, SystemError> {
    dirs::home_dir()
        .map(|home| home.join(".listick").join("logs"))
        .ok_or(SystemError::NoHomeDirectory)
}

/// Filter from `LISTICK_LOG`, or the default when unset or invalid.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `dir/listick.log`.
///
/// Returns the log file path. A subscriber installed earlier (tests) is left
/// in place.
pub fn init_logging(dir: &Path) -> Result<PathBuf, SystemError> {
    fs::create_dir_all(dir).map_err(|e| SystemError::DirectoryCreationFailed {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;
    let path = dir.join("listick.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "open log file"))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "listick starting");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("nested").join("logs");
        let path = init_logging(&logs).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), "listick.log");
    }
}
