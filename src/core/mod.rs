// NoteBoard - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, serde, chrono, uuid.
// Must NOT depend on: ui, platform, app, or perform I/O directly.

pub mod filter;
pub mod model;
pub mod storage;
