//! Startup configuration types.
//!
//! [`SiteConfig`] is the persistent settings file, `~/.listick/config.json`.
//! [`StartupConfig`] holds per-run choices from the command line and
//! environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adapters::terminal_platform::{parse_reduced_motion, REDUCED_MOTION_ENV};
use crate::adapters::FirestoreSettings;
use crate::app::Page;
use crate::carousel::{AspectRatio, CarouselConfig, CarouselLayout, ImageFit};
use crate::error::{ErrorContext, ListickError, ListickResult, ResultExt, SystemError};

pub const ENV_FIRESTORE_PROJECT: &str = "LISTICK_FIRESTORE_PROJECT";
pub const ENV_FIRESTORE_API_KEY: &str = "LISTICK_FIRESTORE_API_KEY";
pub const ENV_FIRESTORE_URL: &str = "LISTICK_FIRESTORE_URL";
pub const ENV_REDUCED_MOTION: &str = REDUCED_MOTION_ENV;
pub const ENV_OFFLINE: &str = "LISTICK_OFFLINE";

/// Frame tick used by the event loop.
pub const DEFAULT_TICK_RATE_MS: u64 = 16;

/// Persistent settings.
///
/// Every field has a default, so a partial file only overrides what it names.
///
/// ```json
/// {
///   "firestore": { "project_id": "li-stick", "api_key": "..." },
///   "home_carousel": { "interval_ms": 4000 },
///   "reduced_motion": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub firestore: FirestoreSettings,
    /// Product gallery on the home page.
    pub home_carousel: CarouselConfig,
    /// Split feature carousel on the features page.
    pub features_carousel: CarouselConfig,
    pub reduced_motion: bool,
    pub offline: bool,
    pub tick_rate_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            firestore: FirestoreSettings::default(),
            home_carousel: CarouselConfig::default(),
            features_carousel: CarouselConfig::default()
                .with_layout(CarouselLayout::Split)
                .with_aspect(AspectRatio::PHONE)
                .with_fit(ImageFit::Cover),
            reduced_motion: false,
            offline: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl SiteConfig {
    /// `~/.listick/config.json`.
    pub fn default_path() -> Result<PathBuf, SystemError> {
        dirs::home_dir()
            .map(|home| home.join(".listick").join("config.json"))
            .ok_or(SystemError::NoHomeDirectory)
    }

    /// Load from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> ListickResult<Self> {
        Self::read_file(path).with_context(|| {
            ErrorContext::new("load_config")
                .with_component("startup")
                .with_target(path.display().to_string())
        })
    }

    fn read_file(path: &Path) -> ListickResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ListickError::System(crate::error::classify_io_error(
                    err,
                    Some(path.to_path_buf()),
                    "read config",
                )))
            }
        };
        serde_json::from_str(&content).map_err(|e| ListickError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> ListickResult<Self> {
        let mut config = match Self::default_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(err) => {
                tracing::warn!("{}, using default settings", err);
                Self::default()
            }
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply `LISTICK_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Some(project) = env_value(ENV_FIRESTORE_PROJECT) {
            self.firestore.project_id = Some(project);
        }
        if let Some(key) = env_value(ENV_FIRESTORE_API_KEY) {
            self.firestore.api_key = Some(key);
        }
        if let Some(url) = env_value(ENV_FIRESTORE_URL) {
            self.firestore.base_url = url;
        }
        if let Some(value) = env_value(ENV_REDUCED_MOTION) {
            match parse_reduced_motion(&value) {
                Ok(reduced) => self.reduced_motion = reduced,
                Err(err) => tracing::debug!("Ignoring {}: {}", ENV_REDUCED_MOTION, err),
            }
        }
        if env_flag(ENV_OFFLINE) {
            self.offline = true;
        }
    }

    /// Repair out-of-range values instead of refusing to start.
    pub fn sanitized(mut self) -> Self {
        self.home_carousel = self.home_carousel.sanitized();
        self.features_carousel = self.features_carousel.sanitized();
        if self.tick_rate_ms == 0 {
            self.tick_rate_ms = DEFAULT_TICK_RATE_MS;
        }
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(name: &str) -> bool {
    env_value(name).is_some_and(|v| !matches!(v.trim(), "0" | "false" | "no" | "off"))
}

/// Configuration for one run.
///
/// # Example
///
/// ```ignore
/// use listick::startup::StartupConfig;
///
/// let config = StartupConfig::from_env()
///     .with_offline(true)
///     .with_initial_page(Page::Contact);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Page shown first.
    pub initial_page: Page,
    /// Keep submissions in the local JSON store.
    pub offline: bool,
    /// Write the log file.
    pub enable_logging: bool,
    /// Settings file override.
    pub config_path: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_page: Page::Home,
            offline: false,
            enable_logging: true,
            config_path: None,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_page(mut self, page: Page) -> Self {
        self.initial_page = page;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Defaults plus `LISTICK_OFFLINE`.
    pub fn from_env() -> Self {
        Self::default().with_offline(env_flag(ENV_OFFLINE))
    }

    /// Settings for this run, from the override path or the default one.
    pub fn load_site_config(&self) -> ListickResult<SiteConfig> {
        let mut site = match &self.config_path {
            Some(path) => {
                let mut site = SiteConfig::load_from(path)?;
                site.apply_env();
                site
            }
            None => SiteConfig::load()?,
        };
        site.offline |= self.offline;
        Ok(site.sanitized())
    }
}
