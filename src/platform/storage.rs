// NoteBoard - platform/storage.rs
//
// File-backed blob storage: each key is one file `<dir>/<key>.json`.
//
// - Writes are atomic (write→temp, rename→final) so a crash during a save
//   never corrupts the previously persisted blob.
// - The storage directory is created on first write; reads of a missing
//   directory or file report "absent", not an error.
// - A file that is not UTF-8 is reported as `NotText` so callers can tell
//   corrupt content apart from an unreadable file.

use crate::core::storage::{validate_key, BlobStorage};
use crate::util::constants::{STORAGE_FILE_EXTENSION, STORAGE_TEMP_EXTENSION};
use crate::util::error::StorageError;
use std::path::{Path, PathBuf};

/// Blob storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the blob files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{STORAGE_FILE_EXTENSION}")))
    }
}

impl BlobStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "Blob read");
                String::from_utf8(bytes)
                    .map(Some)
                    .map_err(|e| StorageError::NotText { path, source: e })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No blob stored yet");
                Ok(None)
            }
            Err(e) => Err(StorageError::Io {
                path,
                operation: "read",
                source: e,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io {
            path: self.dir.clone(),
            operation: "create directory",
            source: e,
        })?;

        // A crash between write and rename loses the new value but never
        // corrupts the old one (rename is atomic on all supported platforms).
        let tmp = path.with_extension(STORAGE_TEMP_EXTENSION);
        std::fs::write(&tmp, value.as_bytes()).map_err(|e| StorageError::Io {
            path: tmp.clone(),
            operation: "write temp file",
            source: e,
        })?;

        std::fs::rename(&tmp, &path).map_err(|e| {
            // Clean up the temp file on failure; ignore any secondary error.
            let _ = std::fs::remove_file(&tmp);
            StorageError::Io {
                path: path.clone(),
                operation: "rename temp file",
                source: e,
            }
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Blob written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
