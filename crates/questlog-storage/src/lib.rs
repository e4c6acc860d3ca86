//! Key-value persistence for Questlog
//!
//! The collection store persists its snapshot through a narrow key-value
//! seam: string keys, UTF-8 text values, and a missing key as a valid
//! empty state. Backends are swappable behind [`KeyValueStore`] so tests
//! can run in memory while real sessions write to disk.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key-value storage backend.
///
/// Absence of a key is a valid state, never an error. Values are UTF-8
/// text; callers bring their own serialization.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. No-op if absent.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// A mutex-wrapped backend is itself a backend, keeping writes serialized
/// when several owners share one store.
impl<S: KeyValueStore> KeyValueStore for Arc<Mutex<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.lock().expect("storage mutex poisoned").get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().expect("storage mutex poisoned").set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.lock().expect("storage mutex poisoned").remove(key)
    }
}

/// Check that a key is usable as a file name on any backend.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_simple_names() {
        assert!(validate_key("games").is_ok());
        assert!(validate_key("search-cache").is_ok());
        assert!(validate_key("snapshot_2").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_unsafe_names() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../games").is_err());
        assert!(validate_key("games/backlog").is_err());
        assert!(validate_key("games snapshot").is_err());
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::InvalidKey("../games".to_string());
        assert_eq!(format!("{}", err), "Invalid storage key: ../games");
    }

    #[test]
    fn test_shared_store_serializes_access() {
        let shared = Arc::new(Mutex::new(MemoryStore::new()));
        let mut handle = shared.clone();

        handle.set("games", "[]").unwrap();

        assert_eq!(shared.get("games").unwrap().as_deref(), Some("[]"));
    }
}
