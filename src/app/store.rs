// NoteBoard - app/store.rs
//
// The note store: the ordered in-memory note list and its synchronisation
// with the persisted blob.
//
// Ordering guarantee: `NoteStore::load` is the only constructor, so the
// persisted blob is always read before anything can be written back. An
// empty initial list can never clobber previously saved notes.
//
// Persistence: every successful `add` or `remove` rewrites the full list
// under one key. `load` never writes, and a `remove` that matched nothing
// is a no-op that does not write either.

use crate::core::filter::SearchFilter;
use crate::core::model::Note;
use crate::core::storage::BlobStorage;
use crate::util::constants::NOTES_STORAGE_KEY;
use crate::util::error::StorageError;
use crate::util::logging::preview;
use chrono::Local;
use std::collections::HashSet;

/// What `load` found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet (or a stored `null`).
    Empty,

    /// Notes decoded from storage.
    Restored {
        count: usize,
        /// Later notes sharing an id with an earlier one, dropped on load.
        duplicates_dropped: usize,
    },

    /// The stored blob could not be decoded and was ignored. It stays in
    /// storage until the next successful mutation overwrites it.
    Discarded { reason: String },
}

impl LoadOutcome {
    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        match self {
            LoadOutcome::Empty => "No saved notes yet.".to_string(),
            LoadOutcome::Restored {
                count,
                duplicates_dropped: 0,
            } => format!("Loaded {count} note(s)."),
            LoadOutcome::Restored {
                count,
                duplicates_dropped,
            } => format!("Loaded {count} note(s); dropped {duplicates_dropped} duplicate id(s)."),
            LoadOutcome::Discarded { reason } => {
                format!("Saved notes could not be read and were ignored: {reason}")
            }
        }
    }
}

/// Owns the note list and the storage it is persisted to.
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn BlobStorage>,
    key: String,
    load_outcome: LoadOutcome,
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes.len())
            .field("storage", &self.storage.describe())
            .field("key", &self.key)
            .field("load_outcome", &self.load_outcome)
            .finish()
    }
}

impl NoteStore {
    /// Read the persisted blob under the default key and build the store.
    ///
    /// An absent or malformed blob yields an empty store; only a failure to
    /// read the storage itself is an error.
    pub fn load(storage: Box<dyn BlobStorage>) -> Result<Self, StorageError> {
        Self::load_with_key(storage, NOTES_STORAGE_KEY)
    }

    /// Same as [`NoteStore::load`] with an explicit storage key.
    pub fn load_with_key(storage: Box<dyn BlobStorage>, key: &str) -> Result<Self, StorageError> {
        let (notes, load_outcome) = match storage.read(key) {
            Ok(None) => (Vec::new(), LoadOutcome::Empty),
            Ok(Some(content)) => decode(&content),
            Err(e @ StorageError::NotText { .. }) => (
                Vec::new(),
                LoadOutcome::Discarded {
                    reason: e.to_string(),
                },
            ),
            Err(e) => return Err(e),
        };

        match &load_outcome {
            LoadOutcome::Discarded { reason } => tracing::warn!(
                storage = %storage.describe(),
                key,
                reason = %reason,
                "Persisted notes are malformed; starting with an empty list"
            ),
            LoadOutcome::Restored {
                count,
                duplicates_dropped,
            } if *duplicates_dropped > 0 => tracing::warn!(
                count,
                duplicates_dropped,
                "Persisted notes contained duplicate ids; kept the first of each"
            ),
            _ => {}
        }
        tracing::info!(
            storage = %storage.describe(),
            key,
            notes = notes.len(),
            "Notes loaded"
        );

        Ok(Self {
            notes,
            storage,
            key: key.to_string(),
            load_outcome,
        })
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// What the initial load found.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Key the note list is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Description of the backing storage.
    pub fn storage_description(&self) -> String {
        self.storage.describe()
    }

    /// Append a new note dated today and persist the list.
    ///
    /// The text is stored verbatim; empty text and duplicate text are
    /// allowed. If persisting fails the note stays in memory and the error
    /// is returned.
    pub fn add(&mut self, text: &str) -> Result<&Note, StorageError> {
        let mut note = Note::new(text, &Local::now());
        // v4 collisions are practically impossible; the loop keeps the
        // uniqueness invariant unconditional.
        while self.get(&note.id).is_some() {
            note.id = crate::core::model::new_note_id();
        }

        tracing::debug!(id = %note.id, text = %preview(&note.text), "Adding note");
        self.notes.push(note);
        self.persist()?;

        let idx = self.notes.len() - 1;
        Ok(&self.notes[idx])
    }

    /// Remove the note with `id` and persist the list.
    ///
    /// Returns the removed note, or `None` (without writing) if no note has
    /// that id.
    pub fn remove(&mut self, id: &str) -> Result<Option<Note>, StorageError> {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            tracing::debug!(id, "Remove requested for unknown note id; nothing to do");
            return Ok(None);
        };

        let removed = self.notes.remove(pos);
        tracing::debug!(id, "Removed note");
        self.persist()?;
        Ok(Some(removed))
    }

    /// Notes whose text contains `query`, ignoring case, in insertion order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let filter = SearchFilter::new(query);
        self.notes.iter().filter(|n| filter.matches(n)).collect()
    }

    /// Serialise the full list and overwrite the persisted blob.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.notes).map_err(|e| StorageError::Serialise {
            key: self.key.clone(),
            source: e,
        })?;
        self.storage.write(&self.key, &json).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist notes");
            e
        })?;
        tracing::debug!(notes = self.notes.len(), "Notes persisted");
        Ok(())
    }
}

/// Decode a persisted blob into a note list with unique ids.
fn decode(content: &str) -> (Vec<Note>, LoadOutcome) {
    let parsed: Option<Vec<Note>> = match serde_json::from_str(content) {
        Ok(p) => p,
        Err(e) => {
            return (
                Vec::new(),
                LoadOutcome::Discarded {
                    reason: e.to_string(),
                },
            )
        }
    };

    let Some(raw) = parsed else {
        return (Vec::new(), LoadOutcome::Empty);
    };

    let mut seen = HashSet::with_capacity(raw.len());
    let mut notes = Vec::with_capacity(raw.len());
    let mut duplicates_dropped = 0;
    for note in raw {
        if seen.insert(note.id.clone()) {
            notes.push(note);
        } else {
            duplicates_dropped += 1;
        }
    }

    let outcome = LoadOutcome::Restored {
        count: notes.len(),
        duplicates_dropped,
    };
    (notes, outcome)
}
