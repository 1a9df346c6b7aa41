//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::command::NamedCommand;
use crate::keymap::Keystroke;
use crate::model::{BlockType, EditorState, InlineStyle, SelectionState};

#[derive(Debug, Clone)]
pub enum Msg {
    /// Raw key event from the host
    Key(Keystroke),
    /// A named command, bypassing key classification
    Command(NamedCommand),
    /// Text from the host's input mechanism (typing, IME, paste)
    InsertText(String),
    /// Selection moved by the host (mouse, arrows)
    Select(SelectionState),
    SelectAll,
    /// A value produced outside the controller, e.g. by the host's own
    /// input handling
    Change(EditorState),
    /// Toolbar block style button
    ToggleBlockType(BlockType),
    /// Toolbar inline style button
    ToggleInlineStyle(InlineStyle),
    /// Click anywhere in the editor container
    ContainerClicked,
}
