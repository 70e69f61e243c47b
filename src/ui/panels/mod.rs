// NoteBoard - ui/panels/mod.rs

pub mod board;
pub mod toolbar;
