// NoteBoard - app/mod.rs
//
// Application layer: note store, state management, action handling and the
// headless command operations.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod commands;
pub mod state;
pub mod store;
