//! Startup: settings, logging and store selection.
//!
//! # Components
//!
//! - [`config`] - [`SiteConfig`] settings file and per-run [`StartupConfig`]
//! - [`logging`] - file-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use listick::startup::{build_store, StartupConfig};
//!
//! let startup = StartupConfig::from_env();
//! let site = startup.load_site_config()?;
//! let store = build_store(&site)?;
//! ```

pub mod config;
pub mod logging;

use std::sync::Arc;

pub use config::{SiteConfig, StartupConfig};
pub use logging::{default_log_dir, init_logging};

use crate::adapters::{FirestoreStore, JsonFileStore, ReqwestHttpClient};
use crate::traits::{DocumentStore, StoreError};

/// Which store the forms write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Firestore { project_id: String },
    Local { dir: std::path::PathBuf },
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Firestore { project_id } => write!(f, "Firestore ({})", project_id),
            StoreKind::Local { dir } => write!(f, "local ({})", dir.display()),
        }
    }
}

/// Pick the document store for this run.
///
/// Firestore when a project is configured and not offline, otherwise the JSON
/// store under `~/.listick/store`.
pub fn build_store(site: &SiteConfig) -> Result<(Arc<dyn DocumentStore>, StoreKind), StoreError> {
    if !site.offline && site.firestore.is_configured() {
        let client = ReqwestHttpClient::new()?;
        let store = FirestoreStore::new(client, site.firestore.clone())?;
        let project_id = site.firestore.project_id.clone().unwrap_or_default();
        tracing::info!(project = %project_id, "Using Firestore store");
        return Ok((Arc::new(store), StoreKind::Firestore { project_id }));
    }

    let store = JsonFileStore::in_home()?;
    let dir = store.dir().to_path_buf();
    tracing::info!(dir = %dir.display(), "Using local JSON store");
    Ok((Arc::new(store), StoreKind::Local { dir }))
}
