// NoteBoard - tests/e2e_notes.rs
//
// End-to-end tests for the note store over real on-disk storage.
//
// These tests exercise the real filesystem, real JSON encoding and real
// chrono dates, no mocks. Each "session" opens a fresh NoteStore over the
// same data directory, the way a restarted application would.

use noteboard::app::commands;
use noteboard::app::state::{AppState, NoteAction};
use noteboard::app::store::{LoadOutcome, NoteStore};
use noteboard::core::model::{Note, Theme};
use noteboard::platform::storage::FileStorage;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Open a new session over `dir`.
fn session(dir: &Path) -> NoteStore {
    NoteStore::load(Box::new(FileStorage::new(dir))).expect("load should succeed")
}

fn blob_path(dir: &Path) -> std::path::PathBuf {
    dir.join("notes.json")
}

fn texts(store: &NoteStore) -> Vec<String> {
    store.notes().iter().map(|n| n.text.clone()).collect()
}

// =============================================================================
// Scenario
// =============================================================================

/// Empty storage -> add two notes -> search -> remove the first -> reload.
#[test]
fn e2e_add_search_remove_reload() {
    let dir = TempDir::new().unwrap();

    let mut store = session(dir.path());
    assert!(store.is_empty());
    assert_eq!(store.load_outcome(), &LoadOutcome::Empty);
    assert!(
        !blob_path(dir.path()).exists(),
        "loading must not create the blob"
    );

    store.add("Buy milk").unwrap();
    assert_eq!(texts(&store), vec!["Buy milk"]);

    store.add("Call Bob").unwrap();
    assert_eq!(texts(&store), vec!["Buy milk", "Call Bob"]);

    let hits = store.search("bob");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "Call Bob");

    let first_id = store.notes()[0].id.clone();
    store.remove(&first_id).unwrap();
    assert_eq!(texts(&store), vec!["Call Bob"]);
    let remaining = store.notes().to_vec();
    drop(store);

    let reloaded = session(dir.path());
    assert_eq!(reloaded.notes(), remaining.as_slice());
    assert_eq!(
        reloaded.load_outcome(),
        &LoadOutcome::Restored {
            count: 1,
            duplicates_dropped: 0
        }
    );
}

// =============================================================================
// Persisted layout
// =============================================================================

/// The blob is a JSON array of {id, text, date} string objects.
#[test]
fn e2e_blob_layout_is_json_array_of_notes() {
    let dir = TempDir::new().unwrap();
    let mut store = session(dir.path());
    store.add("first\nwith newline").unwrap();
    store.add("").unwrap();

    let raw = std::fs::read_to_string(blob_path(dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().expect("top-level array");
    assert_eq!(items.len(), 2);
    for item in items {
        let obj = item.as_object().expect("object");
        assert_eq!(obj.len(), 3);
        for field in ["id", "text", "date"] {
            assert!(obj[field].is_string(), "{field} should be a string");
        }
    }
    assert_eq!(items[0]["text"], "first\nwith newline");
    assert_eq!(items[1]["text"], "");
}

/// A blob written by hand (e.g. migrated from another install) is restored
/// in order.
#[test]
fn e2e_restores_existing_blob_in_order() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        blob_path(dir.path()),
        r#"[{"id":"V1StGXR8_Z5jdHi6B-myT","text":"one","date":"Mon Jan 01 2024"},
            {"id":"x2","text":"two","date":"Tue Jan 02 2024"}]"#,
    )
    .unwrap();

    let store = session(dir.path());
    assert_eq!(texts(&store), vec!["one", "two"]);
    assert_eq!(store.notes()[0].date, "Mon Jan 01 2024");
}

// =============================================================================
// Failure handling
// =============================================================================

/// A corrupt blob starts an empty session and is only replaced on the next
/// mutation.
#[test]
fn e2e_corrupt_blob_is_tolerated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(blob_path(dir.path()), b"[{\"id\": 1,").unwrap();

    let mut store = session(dir.path());
    assert!(store.is_empty());
    assert!(matches!(
        store.load_outcome(),
        LoadOutcome::Discarded { .. }
    ));
    assert_eq!(
        std::fs::read(blob_path(dir.path())).unwrap(),
        b"[{\"id\": 1,"
    );

    store.add("recovered").unwrap();
    let reloaded = session(dir.path());
    assert_eq!(texts(&reloaded), vec!["recovered"]);
}

/// A blob that is not UTF-8 text is treated like any other corrupt blob.
#[test]
fn e2e_non_utf8_blob_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let raw = b"[{\"id\":\"a\",\"text\":\"\xff\xfe\",\"date\":\"d\"}]";
    std::fs::write(blob_path(dir.path()), raw).unwrap();

    let mut store = session(dir.path());
    assert!(store.is_empty());
    assert!(matches!(
        store.load_outcome(),
        LoadOutcome::Discarded { .. }
    ));
    assert_eq!(std::fs::read(blob_path(dir.path())).unwrap(), raw);

    store.add("fresh start").unwrap();
    let reloaded = session(dir.path());
    assert_eq!(texts(&reloaded), vec!["fresh start"]);
}

/// Removing an unknown id leaves the stored blob byte-for-byte unchanged.
#[test]
fn e2e_remove_unknown_id_does_not_touch_storage() {
    let dir = TempDir::new().unwrap();
    let mut store = session(dir.path());
    store.add("keep").unwrap();
    let before = std::fs::read(blob_path(dir.path())).unwrap();

    assert_eq!(store.remove("missing").unwrap(), None);
    assert_eq!(std::fs::read(blob_path(dir.path())).unwrap(), before);
    assert_eq!(texts(&store), vec!["keep"]);
}

// =============================================================================
// Application state and commands over disk
// =============================================================================

/// UI actions persist through AppState exactly like direct store calls.
#[test]
fn e2e_app_state_actions_persist() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::new(session(dir.path()), Theme::Dark);

    state.draft = "Water plants".to_string();
    state.handle(NoteAction::SaveDraft);
    state.draft = "Pay rent".to_string();
    state.handle(NoteAction::SaveDraft);

    state.search.query = "PLANTS".to_string();
    state.handle(NoteAction::SearchChanged);
    let visible: Vec<&Note> = state.visible_notes().collect();
    assert_eq!(visible.len(), 1);
    let id = visible[0].id.clone();

    state.handle(NoteAction::Delete(id));
    assert!(state.visible_indices.is_empty());
    state.handle(NoteAction::ToggleTheme);
    assert_eq!(state.theme, Theme::Light);

    let reloaded = session(dir.path());
    assert_eq!(texts(&reloaded), vec!["Pay rent"]);
}

/// CLI operations across separate sessions share the same blob.
#[test]
fn e2e_commands_across_sessions() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut store = session(dir.path());
        commands::add(&mut store, "Buy milk").unwrap()
    };
    {
        let mut store = session(dir.path());
        commands::add(&mut store, "Call Bob").unwrap();
    }

    let store = session(dir.path());
    let listing = commands::list(&store, Some("MILK"), false).unwrap();
    assert!(listing.starts_with(&id), "listing: {listing}");
    assert!(!listing.contains("Call Bob"));

    let mut store = session(dir.path());
    assert!(commands::remove(&mut store, &id).unwrap());
    let store = session(dir.path());
    assert_eq!(texts(&store), vec!["Call Bob"]);
}
