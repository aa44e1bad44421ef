//! Store backend that keeps every value as a string, the way browser local
//! storage does, and coerces values back to booleans and numbers on read.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file::{load_or_default, write_atomic};
use super::{ExternalStore, StoreBackend, StoreItems, StoreValue};
use crate::error::ProfileError;

/// String-valued key-value store, optionally persisted as a JSON object of
/// strings.
#[derive(Debug, Default)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
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
        let entries = load_or_default(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    /// The raw string stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn persist(&self) -> Result<(), ProfileError> {
        if let Some(path) = &self.path {
            write_atomic(path, &self.entries)?;
            debug!(path = %path.display(), keys = self.entries.len(), "local store written");
        }
        Ok(())
    }
}

impl ExternalStore for LocalStore {
    fn get(&self, defaults: &StoreItems) -> Result<StoreItems, ProfileError> {
        Ok(defaults
            .iter()
            .map(|(key, default)| {
                // An empty string reads as "not stored".
                let value = self
                    .entries
                    .get(key)
                    .filter(|raw| !raw.is_empty())
                    .map_or_else(|| default.clone(), |raw| coerce(raw));
                (key.clone(), value)
            })
            .collect())
    }

    fn get_all(&self) -> Result<StoreItems, ProfileError> {
        Ok(self
            .entries
            .iter()
            .filter(|(_, raw)| !raw.is_empty())
            .map(|(key, raw)| (key.clone(), coerce(raw)))
            .collect())
    }

    fn set(&mut self, items: &StoreItems) -> Result<(), ProfileError> {
        self.entries
            .extend(items.iter().map(|(k, v)| (k.clone(), v.to_string())));
        self.persist()
    }

    fn clear(&mut self) -> Result<(), ProfileError> {
        self.entries.clear();
        self.persist()
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Local
    }
}

/// Turn stored text back into a typed value.
///
/// `"true"`/`"false"` become booleans. Numeric text becomes a number only if
/// the number prints back to exactly the same text, so strings such as
/// `"007"` or `"1e3"` are left alone.
#[must_use]
pub fn coerce(raw: &str) -> StoreValue {
    match raw {
        "true" => return StoreValue::Bool(true),
        "false" => return StoreValue::Bool(false),
        _ => {}
    }

    if !raw.is_empty() && raw.bytes().all(|b| b"0123456789+-.eE".contains(&b)) {
        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return StoreValue::Int(n);
            }
        }
        if let Ok(x) = raw.parse::<f64>() {
            if x.is_finite() && x.to_string() == raw {
                return StoreValue::Float(x);
            }
        }
    }

    StoreValue::Text(raw.to_owned())
}
