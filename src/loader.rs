// src/loader.rs
//! Locating and loading run-mode configuration documents.
//!
//! One blocking read-and-decode pass at startup. The loader owns the only
//! filesystem convention in this crate: run mode `m` lives at
//! `<config dir>/<m>.yaml`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::document;
use crate::error::{ConfigError, Result};
use crate::schema::RootConfig;
use crate::secrets::SecretStore;

/// Default directory holding one document per run mode.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "STACKD_CONFIG_DIR";

const DOCUMENT_EXTENSION: &str = "yaml";

/// Locates, reads and decodes the document for a run mode.
#[derive(Debug, Clone)]
pub struct Loader {
    dir: PathBuf,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl Loader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Honor `STACKD_CONFIG_DIR` when set and non-empty, falling back to
    /// [`DEFAULT_CONFIG_DIR`].
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic document location for a run mode.
    pub fn locate(&self, run_mode: &str) -> PathBuf {
        self.dir.join(format!("{run_mode}.{DOCUMENT_EXTENSION}"))
    }

    /// Whether a document exists for the run mode, without reading or
    /// parsing it.
    pub fn is_available(&self, run_mode: &str) -> bool {
        self.locate(run_mode).is_file()
    }

    /// Read, parse and decode the document for `run_mode`.
    ///
    /// `server_id` is recorded on the resulting config as-is; it never comes
    /// from the document.
    pub fn load(&self, run_mode: &str, server_id: &str, secrets: &SecretStore) -> Result<RootConfig> {
        let path = self.locate(run_mode);
        info!(run_mode, path = %path.display(), "loading configuration");

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let raw = document::parse_document(&text)?;
        let config = RootConfig::from_document(run_mode, server_id, secrets, &raw)?;

        debug!(
            run_mode,
            insights = config.insights_server.is_some(),
            web = config.web_server.is_some(),
            database = config.database.is_some(),
            cache = config.cache.is_some(),
            max_request_size = config.max_request_size,
            "configuration loaded"
        );
        Ok(config)
    }
}
