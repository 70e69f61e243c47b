// NoteBoard - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all NoteBoard operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum NoteBoardError {
    /// Reading or writing persisted notes failed.
    Storage(StorageError),

    /// Notes could not be rendered as JSON for output.
    Output(serde_json::Error),
}

impl fmt::Display for NoteBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for NoteBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

/// Errors related to the key/value blob storage.
#[derive(Debug)]
pub enum StorageError {
    /// The key is empty, too long, or contains characters that are not
    /// allowed in a storage file name.
    InvalidKey { key: String },

    /// The note list could not be serialised to JSON.
    Serialise { key: String, source: serde_json::Error },

    /// The stored value exists but is not UTF-8 text.
    NotText {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key } => write!(
                f,
                "Invalid storage key '{key}': use 1-{} characters from [A-Za-z0-9._-]",
                super::constants::MAX_STORAGE_KEY_LENGTH
            ),
            Self::Serialise { key, source } => {
                write!(f, "Failed to serialise value for key '{key}': {source}")
            }
            Self::NotText { path, source } => {
                write!(f, "'{}' is not UTF-8 text: {source}", path.display())
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialise { source, .. } => Some(source),
            Self::NotText { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
        }
    }
}

impl From<StorageError> for NoteBoardError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<serde_json::Error> for NoteBoardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These are non-fatal: the loader collects them as warnings and falls back
/// to defaults for the affected values.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not valid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for NoteBoard results.
pub type Result<T> = std::result::Result<T, NoteBoardError>;
