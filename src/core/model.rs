// NoteBoard - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants::NOTE_DATE_FORMAT;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

// =============================================================================
// Note
// =============================================================================

/// A single user-authored text entry.
///
/// Notes are created and deleted, never edited. The serialised field names
/// (`id`, `text`, `date`) are the persisted layout and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque identifier, unique among all notes held at any time.
    pub id: String,

    /// Note body, stored verbatim. May be empty.
    pub text: String,

    /// Human-readable creation date, e.g. `Sat Oct 17 2026`.
    pub date: String,
}

impl Note {
    /// Build a note dated `created` with a fresh v4 UUID.
    pub fn new<Tz: TimeZone>(text: impl Into<String>, created: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: new_note_id(),
            text: text.into(),
            date: format_note_date(created),
        }
    }

    /// Case-insensitive substring test against an already-lowercased needle.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.text.to_lowercase().contains(needle_lower)
    }
}

/// Generate a new opaque note identifier.
pub fn new_note_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Format a timestamp the way note dates are displayed and stored.
pub fn format_note_date<Tz: TimeZone>(created: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    created.format(NOTE_DATE_FORMAT).to_string()
}

/// Today's date in note-date form (shown on the new-note card).
pub fn today() -> String {
    format_note_date(&Local::now())
}

// =============================================================================
// Theme
// =============================================================================

/// Colour theme of the notes board. Not persisted with the notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase name as used in config.toml and on the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a theme name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
