//! Durable key-value storage for session preferences
//!
//! The search controller remembers its committed term and page index across
//! runs. Storage is a passive, last-writer-wins side channel: it is read once
//! when a view mounts and written on every change, but never consulted as the
//! source of truth during a session.
//!
//! - `SledStore`: on-disk store backed by sled
//! - `MemoryStore`: shared in-process map, used by tests and `--no-persist`

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Storage key holding the committed search term
pub const SEARCH_TERM_KEY: &str = "search";

/// Storage key holding the current page index (stringified integer)
pub const PAGE_KEY: &str = "page";

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents a sled database error
    #[error("Storage error: {0}")]
    SledError(#[from] sled::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Stored value for '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    /// The in-memory store's lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// String key-value store injected into the search controller
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the value is not UTF-8.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// On-disk store backed by a sled tree
pub struct SledStore {
    db: sled::Db,
    prefs: sled::Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database or its tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        let prefs = db.open_tree("prefs")?;
        Ok(Self { db, prefs })
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flush fails.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.prefs.get(key.as_bytes())? {
            Some(value) => String::from_utf8(value.to_vec())
                .map(Some)
                .map_err(|_| StorageError::InvalidUtf8(key.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.prefs.insert(key.as_bytes(), value.as_bytes())?;
        Ok(())
    }
}

/// In-process store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    /// True when nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
