// NoteBoard - core/storage.rs
//
// Key/value blob storage abstraction.
// Enables testing the note store without real filesystem access.
// The file-backed implementation lives in platform::storage.

use crate::util::constants::MAX_STORAGE_KEY_LENGTH;
use crate::util::error::StorageError;
use std::collections::HashMap;

/// A string-keyed store of textual blobs, in the manner of browser local
/// storage. Writes replace the whole value for a key.
pub trait BlobStorage {
    /// Read the value for `key`. `Ok(None)` means the key has never been
    /// written. A stored value that is not UTF-8 is `StorageError::NotText`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short human-readable description for logs and the status bar.
    fn describe(&self) -> String;
}

/// Validate a storage key: 1..=MAX_STORAGE_KEY_LENGTH characters from
/// `[A-Za-z0-9._-]`, not starting with a dot.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.len() <= MAX_STORAGE_KEY_LENGTH
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

/// In-memory storage. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value, e.g. a previously persisted blob.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl BlobStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory storage".to_string()
    }
}
