// NoteBoard - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate, core model/storage traits.
// Must NOT depend on: app, ui.

pub mod config;
pub mod storage;
