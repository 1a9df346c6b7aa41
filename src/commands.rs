//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// The reserved save command was dispatched
    Save,
    /// Move input focus to the editing surface
    FocusEditor,
}
