//! Rich-text document model
//!
//! The controller consumes the document through the [`DocumentModel`] trait
//! and never looks inside a snapshot itself. [`RichDocumentModel`] is the
//! implementation shipped with the crate: persistent [`EditorState`]
//! snapshots with block styles, inline style runs, a selection and undo
//! history.
//!
//! # Architecture
//!
//! ```text
//! EditorState ─┬─ Arc<ContentState> ── Vec<Arc<ContentBlock>>  (copy-on-write)
//!              ├─ SelectionState
//!              ├─ inline style override
//!              └─ undo / redo stacks
//! ```

pub mod builtin;
mod content;
pub mod editing;
mod selection;
mod state;
mod style;
pub mod transforms;

pub use builtin::BuiltinCommand;
pub use content::{BlockKey, ContentBlock, ContentState, StyleRun};
pub use editing::{DeleteUnit, EditorCommand};
pub use selection::{Position, SelectionState};
pub use state::{ChangeType, EditorState, MAX_UNDO};
pub use style::{toggled, BlockType, InlineStyle, StyleSet};
pub use transforms::IndentDirection;

use crate::command::NamedCommand;
use crate::keymap::{default_bindings, Keymap, Keystroke};

/// The narrow interface the controller needs from a document model.
///
/// Values are immutable snapshots. Every transform returns a value; a
/// transform that changes nothing returns a value for which [`is_same`]
/// holds against its input.
///
/// [`is_same`]: DocumentModel::is_same
pub trait DocumentModel {
    type Value: Clone;

    fn create_empty(&self) -> Self::Value;

    /// Builtin command table; `None` when the command is not claimed
    fn handle_builtin_command(
        &self,
        value: &Self::Value,
        command: &NamedCommand,
    ) -> Option<Self::Value>;

    fn handle_tab_indent(
        &self,
        value: &Self::Value,
        direction: IndentDirection,
        max_depth: u8,
    ) -> Self::Value;

    fn toggle_block_type(&self, value: &Self::Value, block_type: &BlockType) -> Self::Value;

    fn toggle_inline_style(&self, value: &Self::Value, style: &InlineStyle) -> Self::Value;

    fn has_text(&self, value: &Self::Value) -> bool;

    /// Type of the first block; `None` for an empty block map
    fn first_block_type(&self, value: &Self::Value) -> Option<BlockType>;

    /// Type of the block at the selection start
    fn selection_block_type(&self, value: &Self::Value) -> Option<BlockType>;

    /// Inline styles the next typed character would receive
    fn current_inline_style(&self, value: &Self::Value) -> StyleSet;

    /// The model's default keymap
    fn default_key_binding(&self, keystroke: &Keystroke) -> Option<NamedCommand>;

    /// Identity comparison between snapshots
    fn is_same(&self, a: &Self::Value, b: &Self::Value) -> bool;
}

/// The bundled document model over [`EditorState`] snapshots
#[derive(Debug, Clone)]
pub struct RichDocumentModel {
    keymap: Keymap,
}

impl RichDocumentModel {
    /// A model using the embedded default keymap
    pub fn new() -> Self {
        Self::with_keymap(Keymap::with_bindings(default_bindings()))
    }

    /// A model whose default key bindings come from `keymap`
    pub fn with_keymap(keymap: Keymap) -> Self {
        Self { keymap }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }
}

impl Default for RichDocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentModel for RichDocumentModel {
    type Value = EditorState;

    fn create_empty(&self) -> EditorState {
        EditorState::create_empty()
    }

    fn handle_builtin_command(
        &self,
        value: &EditorState,
        command: &NamedCommand,
    ) -> Option<EditorState> {
        builtin::handle_key_command(value, command)
    }

    fn handle_tab_indent(
        &self,
        value: &EditorState,
        direction: IndentDirection,
        max_depth: u8,
    ) -> EditorState {
        transforms::adjust_depth(value, direction, max_depth)
    }

    fn toggle_block_type(&self, value: &EditorState, block_type: &BlockType) -> EditorState {
        transforms::toggle_block_type(value, block_type)
    }

    fn toggle_inline_style(&self, value: &EditorState, style: &InlineStyle) -> EditorState {
        transforms::toggle_inline_style(value, style)
    }

    fn has_text(&self, value: &EditorState) -> bool {
        value.content().has_text()
    }

    fn first_block_type(&self, value: &EditorState) -> Option<BlockType> {
        value.content().first_block().map(|b| b.block_type().clone())
    }

    fn selection_block_type(&self, value: &EditorState) -> Option<BlockType> {
        value.selection_block().map(|b| b.block_type().clone())
    }

    fn current_inline_style(&self, value: &EditorState) -> StyleSet {
        value.current_inline_style()
    }

    fn default_key_binding(&self, keystroke: &Keystroke) -> Option<NamedCommand> {
        self.keymap.lookup(keystroke).cloned()
    }

    fn is_same(&self, a: &EditorState, b: &EditorState) -> bool {
        EditorState::ptr_eq(a, b)
    }
}
