// NoteBoard - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "NoteBoard";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "NoteBoard";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Notes storage
// =============================================================================

/// The single storage key under which the full note list is persisted.
pub const NOTES_STORAGE_KEY: &str = "notes";

/// File extension appended to a storage key by the file-backed storage.
pub const STORAGE_FILE_EXTENSION: &str = "json";

/// Extension of the sibling temp file used for atomic writes.
pub const STORAGE_TEMP_EXTENSION: &str = "json.tmp";

/// Maximum length of a storage key.
pub const MAX_STORAGE_KEY_LENGTH: usize = 128;

/// `chrono` format for a note's creation date, e.g. `Sat Oct 17 2026`.
pub const NOTE_DATE_FORMAT: &str = "%a %b %d %Y";

// =============================================================================
// UI defaults
// =============================================================================

/// Number of note cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Placeholder shown in the empty search box.
pub const SEARCH_HINT: &str = "Search notes...";

/// Placeholder shown in the empty new-note editor.
pub const DRAFT_HINT: &str = "Type here something...";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum number of characters of note text included in debug output.
pub const DEBUG_MAX_TEXT_PREVIEW: usize = 40;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
