//! Where the profile lives.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;
use uniquify_profile::{open_store, ExternalStore, StoreBackend};

use crate::cli::Cli;

/// Resolved store location for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// `None` for an in-memory store.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve from arguments. Priority: `--ephemeral`, then `--data-dir` /
    /// `UNIQUIFY_DATA_DIR`, then the platform data directory.
    ///
    /// # Errors
    ///
    /// Fails if no data directory is given and no home directory is known.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let backend = StoreBackend::from(cli.backend);
        if cli.ephemeral {
            return Ok(Self {
                backend,
                path: None,
            });
        }

        let dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        Ok(Self::in_dir(backend, &dir))
    }

    /// The backend's profile file inside `dir`.
    #[must_use]
    pub fn in_dir(backend: StoreBackend, dir: &Path) -> Self {
        Self {
            backend,
            path: Some(dir.join(backend.file_name())),
        }
    }

    /// Open the configured store.
    ///
    /// # Errors
    ///
    /// Fails if an existing profile file cannot be read.
    pub fn open(&self) -> Result<Box<dyn ExternalStore>> {
        debug!(backend = %self.backend, path = ?self.path, "opening profile store");
        open_store(self.backend, self.path.as_deref()).with_context(|| match &self.path {
            Some(path) => format!("failed to open profile at {}", path.display()),
            None => "failed to open in-memory profile".to_owned(),
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "uniquify")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .context("no home directory found; pass --data-dir or set UNIQUIFY_DATA_DIR")
}
