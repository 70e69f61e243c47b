// NoteBoard - core/filter.rs
//
// Search filter over the note list.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Note;

/// Transient search state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Query as typed by the user.
    pub query: String,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns true if the filter lets every note through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Check a single note against the query (case-insensitive substring).
    pub fn matches(&self, note: &Note) -> bool {
        note.matches_lowercase(&self.query.to_lowercase())
    }
}

/// Apply the filter to the notes, returning indices of matching notes.
///
/// Indices point into `notes` and keep insertion order, so the view can be
/// rendered without copying notes.
pub fn apply_search(notes: &[Note], filter: &SearchFilter) -> Vec<usize> {
    if filter.is_empty() {
        return (0..notes.len()).collect();
    }

    let query_lower = filter.query.to_lowercase();

    notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.matches_lowercase(&query_lower))
        .map(|(idx, _)| idx)
        .collect()
}
