//! Key-value store capability for profile data.
//!
//! The profile only needs `get` with defaults, merge-`set` and `clear` over
//! string keys holding booleans, numbers or strings. Two backends implement
//! [`ExternalStore`]; one is chosen at startup via [`open_store`]:
//!
//! - [`TypedStore`] keeps values typed (the extension storage model)
//! - [`LocalStore`] keeps every value as a string and coerces on read
//!   (the browser local-storage model)
//!
//! Both can live purely in memory or be persisted to a JSON file.

mod file;
pub mod local;
pub mod typed;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

pub use local::LocalStore;
pub use typed::TypedStore;

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A single stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
    /// `true` / `false`
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Fractional number.
    Float(f64),
    /// Anything else.
    Text(String),
}

impl StoreValue {
    /// The boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StoreValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for StoreValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for StoreValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for StoreValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A set of key/value pairs, ordered by key.
pub type StoreItems = BTreeMap<String, StoreValue>;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Persistent key-value storage consumed by the profile.
pub trait ExternalStore {
    /// Look up every key of `defaults`, substituting the paired default for
    /// keys that are not stored.
    ///
    /// # Errors
    ///
    /// Backend-specific; in-memory stores never fail.
    fn get(&self, defaults: &StoreItems) -> Result<StoreItems, ProfileError>;

    /// Every stored pair.
    ///
    /// # Errors
    ///
    /// Backend-specific; in-memory stores never fail.
    fn get_all(&self) -> Result<StoreItems, ProfileError>;

    /// Store `items`, overwriting existing keys and keeping the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    fn set(&mut self, items: &StoreItems) -> Result<(), ProfileError>;

    /// Remove every stored pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    fn clear(&mut self) -> Result<(), ProfileError>;

    /// Which backend this is.
    fn backend(&self) -> StoreBackend;
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Available store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreBackend {
    /// Values keep their types.
    #[default]
    Typed,
    /// Values are kept as strings and coerced back on read.
    Local,
}

impl StoreBackend {
    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typed => "typed",
            Self::Local => "local",
        }
    }

    /// File name used when the backend is persisted inside a data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Typed => "profile.json",
            Self::Local => "local-profile.json",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typed" => Ok(Self::Typed),
            "local" => Ok(Self::Local),
            other => Err(ProfileError::Storage(format!(
                "unknown store backend '{other}', expected 'typed' or 'local'"
            ))),
        }
    }
}

/// Open the chosen backend, in memory when `path` is `None`.
///
/// # Errors
///
/// Returns an error if an existing backing file cannot be read.
pub fn open_store(
    backend: StoreBackend,
    path: Option<&Path>,
) -> Result<Box<dyn ExternalStore>, ProfileError> {
    let store: Box<dyn ExternalStore> = match (backend, path) {
        (StoreBackend::Typed, None) => Box::new(TypedStore::in_memory()),
        (StoreBackend::Typed, Some(path)) => Box::new(TypedStore::open(path)?),
        (StoreBackend::Local, None) => Box::new(LocalStore::in_memory()),
        (StoreBackend::Local, Some(path)) => Box::new(LocalStore::open(path)?),
    };
    Ok(store)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
