//! Store backend that keeps value types intact.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::{load_or_default, write_atomic};
use super::{ExternalStore, StoreBackend, StoreItems};
use crate::error::ProfileError;

/// Typed key-value store, optionally persisted as a JSON object.
#[derive(Debug, Default)]
pub struct TypedStore {
    path: Option<PathBuf>,
    items: StoreItems,
}

impl TypedStore {
    /// An empty store that lives only in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store persisted at `path`, empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Io`] if the file exists but cannot be read.
    pub fn open(path: &Path) -> Result<Self, ProfileError> {
        let items = load_or_default(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            items,
        })
    }

    fn persist(&self) -> Result<(), ProfileError> {
        if let Some(path) = &self.path {
            write_atomic(path, &self.items)?;
            debug!(path = %path.display(), keys = self.items.len(), "typed store written");
        }
        Ok(())
    }
}

impl ExternalStore for TypedStore {
    fn get(&self, defaults: &StoreItems) -> Result<StoreItems, ProfileError> {
        Ok(defaults
            .iter()
            .map(|(key, default)| {
                let value = self.items.get(key).unwrap_or(default).clone();
                (key.clone(), value)
            })
            .collect())
    }

    fn get_all(&self) -> Result<StoreItems, ProfileError> {
        Ok(self.items.clone())
    }

    fn set(&mut self, items: &StoreItems) -> Result<(), ProfileError> {
        self.items
            .extend(items.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.persist()
    }

    fn clear(&mut self) -> Result<(), ProfileError> {
        self.items.clear();
        self.persist()
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Typed
    }
}
