// NoteBoard - app/commands.rs
//
// Headless operations behind the CLI subcommands. Each returns the text to
// print so the binary only does I/O.

use crate::app::store::NoteStore;
use crate::core::model::Note;
use crate::util::error::Result;

/// Add a note and return its id.
pub fn add(store: &mut NoteStore, text: &str) -> Result<String> {
    let note = store.add(text)?;
    tracing::info!(id = %note.id, "Note added from command line");
    Ok(note.id.clone())
}

/// Render the notes matching `query` (all notes when `None`).
///
/// Plain output is one block per note: `id  date` followed by the text
/// indented by four spaces. JSON output is the persisted array layout.
pub fn list(store: &NoteStore, query: Option<&str>, json: bool) -> Result<String> {
    let hits: Vec<&Note> = store.search(query.unwrap_or(""));

    if json {
        return Ok(serde_json::to_string_pretty(&hits)?);
    }

    if hits.is_empty() {
        return Ok(if store.is_empty() {
            "No notes yet.".to_string()
        } else {
            "No notes match the search.".to_string()
        });
    }

    let mut out = String::new();
    for note in hits {
        out.push_str(&format!("{}  {}\n", note.id, note.date));
        if note.text.is_empty() {
            out.push_str("    (empty)\n");
        }
        for line in note.text.lines() {
            if !line.is_empty() {
                out.push_str("    ");
                out.push_str(line);
            }
            out.push('\n');
        }
    }
    Ok(out.trim_end().to_string())
}

/// Remove a note. Returns whether a note with that id existed.
pub fn remove(store: &mut NoteStore, id: &str) -> Result<bool> {
    Ok(store.remove(id)?.is_some())
}
