// NoteBoard - app/state.rs
//
// Application state management. Holds the note store, the search filter,
// the new-note draft and the current theme.
// Owned by the eframe::App implementation.
//
// Panels never mutate the store while rendering. They push `NoteAction`s,
// which are applied through `AppState::handle` once the frame's UI has been
// laid out.

use crate::app::store::NoteStore;
use crate::core::filter::{apply_search, SearchFilter};
use crate::core::model::{Note, Theme};

/// An explicit user intent raised by a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    /// Save the draft as a new note and clear the editor.
    SaveDraft,
    /// Delete the note with this id.
    Delete(String),
    /// The search query was edited.
    SearchChanged,
    /// Switch between light and dark.
    ToggleTheme,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Persisted notes.
    pub store: NoteStore,

    /// Current search query.
    pub search: SearchFilter,

    /// Indices into `store.notes()` matching the current search.
    pub visible_indices: Vec<usize>,

    /// Text typed into the new-note card but not saved yet.
    pub draft: String,

    /// Current colour theme. Ephemeral.
    pub theme: Theme,

    /// Status message for the status bar.
    pub status_message: String,
}

impl AppState {
    /// Create initial state around an already-loaded store.
    pub fn new(store: NoteStore, theme: Theme) -> Self {
        let status_message = store.load_outcome().summary();
        let mut state = Self {
            store,
            search: SearchFilter::default(),
            visible_indices: Vec::new(),
            draft: String::new(),
            theme,
            status_message,
        };
        state.apply_search();
        state
    }

    /// Recompute visible indices from the note list and search query.
    pub fn apply_search(&mut self) {
        self.visible_indices = apply_search(self.store.notes(), &self.search);
    }

    /// Notes currently shown, in insertion order.
    pub fn visible_notes(&self) -> impl Iterator<Item = &Note> + '_ {
        self.visible_indices
            .iter()
            .filter_map(|&idx| self.store.notes().get(idx))
    }

    /// Apply one action.
    pub fn handle(&mut self, action: NoteAction) {
        match action {
            NoteAction::SaveDraft => self.save_draft(),
            NoteAction::Delete(id) => self.delete_note(&id),
            NoteAction::SearchChanged => self.apply_search(),
            NoteAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = %self.theme, "Theme toggled");
            }
        }
    }

    /// Apply every action raised during a frame, in order.
    pub fn handle_all(&mut self, actions: impl IntoIterator<Item = NoteAction>) {
        for action in actions {
            self.handle(action);
        }
    }

    fn save_draft(&mut self) {
        let text = std::mem::take(&mut self.draft);
        self.status_message = match self.store.add(&text) {
            Ok(_) => "Note saved.".to_string(),
            Err(e) => format!("Note added but could not be saved: {e}"),
        };
        self.apply_search();
    }

    fn delete_note(&mut self, id: &str) {
        self.status_message = match self.store.remove(id) {
            Ok(Some(_)) => "Note deleted.".to_string(),
            Ok(None) => "Note was already deleted.".to_string(),
            Err(e) => format!("Note deleted but the change could not be saved: {e}"),
        };
        self.apply_search();
    }
}
