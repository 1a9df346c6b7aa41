//! Editor controller
//!
//! Owns the one live document value and turns classified input into
//! transitions. Every transition goes through [`EditorController::apply_change`],
//! which drops values identical to the held one.
//!
//! ```text
//! Keystroke ─ classify_key ─┬─ Tab → handle_tab_indent → apply_change
//!                           └─ KeyCommand::Named ─ dispatch_key_command
//!                                                    ├─ builtin table → apply_change
//!                                                    ├─ save token → Handled
//!                                                    └─ NotHandled
//! ```

mod dispatch;
mod toggle;

pub use dispatch::{dispatch, Dispatch};

use crate::command::NamedCommand;
use crate::config::EditorConfig;
use crate::keymap::{self, KeyCommand, Keystroke};
use crate::model::{BlockType, DocumentModel, IndentDirection, RichDocumentModel, StyleSet};

/// Whether a key command was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleValue {
    Handled,
    NotHandled,
}

impl HandleValue {
    pub fn is_handled(self) -> bool {
        self == HandleValue::Handled
    }
}

/// What [`EditorController::handle_key_command`] did with a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The document model's builtin table produced a new value
    Applied,
    /// The reserved save token; the host should persist
    Saved,
    Unhandled,
}

impl From<CommandOutcome> for HandleValue {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Applied | CommandOutcome::Saved => HandleValue::Handled,
            CommandOutcome::Unhandled => HandleValue::NotHandled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorController<M: DocumentModel = RichDocumentModel> {
    model: M,
    value: M::Value,
    save_command: NamedCommand,
    max_tab_depth: u8,
    placeholder: String,
    revision: u64,
}

impl<M: DocumentModel> EditorController<M> {
    /// A controller holding an empty document and default settings
    pub fn new(model: M) -> Self {
        Self::with_config(model, &EditorConfig::default())
    }

    pub fn with_config(model: M, config: &EditorConfig) -> Self {
        let value = model.create_empty();
        Self {
            model,
            value,
            save_command: config.save_command.clone(),
            max_tab_depth: config.max_tab_depth,
            placeholder: config.placeholder.clone(),
            revision: 0,
        }
    }

    pub fn current_value(&self) -> &M::Value {
        &self.value
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Number of transitions applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn save_command(&self) -> &NamedCommand {
        &self.save_command
    }

    pub fn max_tab_depth(&self) -> u8 {
        self.max_tab_depth
    }

    /// Replace the held value. A value identical to the held one is ignored.
    pub fn apply_change(&mut self, next: M::Value) {
        if self.model.is_same(&self.value, &next) {
            tracing::trace!(revision = self.revision, "no-op change dropped");
            return;
        }
        self.value = next;
        self.revision += 1;
        tracing::debug!(revision = self.revision, "applied change");
    }

    /// Dispatch a named command and report what happened
    pub fn handle_key_command(&mut self, command: &NamedCommand) -> CommandOutcome {
        match dispatch(&self.model, &self.value, command, &self.save_command) {
            Dispatch::Changed(next) => {
                self.apply_change(next);
                CommandOutcome::Applied
            }
            Dispatch::Save => CommandOutcome::Saved,
            Dispatch::Unhandled => CommandOutcome::Unhandled,
        }
    }

    pub fn dispatch_key_command(&mut self, command: &NamedCommand) -> HandleValue {
        self.handle_key_command(command).into()
    }

    /// Classify a keystroke. Tab and Shift+Tab adjust list depth directly
    /// and always pass through. A key bound to `save` yields the configured
    /// save token.
    pub fn classify_key(&mut self, keystroke: &Keystroke) -> KeyCommand {
        if keystroke.is_tab() {
            let direction = if keystroke.mods.shift() {
                IndentDirection::Outdent
            } else {
                IndentDirection::Indent
            };
            let next = self
                .model
                .handle_tab_indent(&self.value, direction, self.max_tab_depth);
            tracing::debug!(?direction, "tab indent");
            self.apply_change(next);
            return KeyCommand::PassThrough;
        }

        match keymap::classify(&self.model, keystroke) {
            KeyCommand::Named(command) => KeyCommand::Named(self.resolve_save_alias(command)),
            KeyCommand::PassThrough => KeyCommand::PassThrough,
        }
    }

    /// Keymaps bind the save chord to the stock `save` token. Route it to
    /// the configured token so a renamed save still fires.
    fn resolve_save_alias(&self, command: NamedCommand) -> NamedCommand {
        if command == NamedCommand::SAVE && self.save_command != NamedCommand::SAVE {
            tracing::trace!(save = %self.save_command, "save chord remapped");
            self.save_command.clone()
        } else {
            command
        }
    }

    /// Whether the placeholder should be shown for the current value
    ///
    /// Shown only for an empty document whose first block is styled. An
    /// empty block map counts as `unstyled`.
    pub fn placeholder_visible(&self) -> bool {
        let first = self
            .model
            .first_block_type(&self.value)
            .unwrap_or(BlockType::UNSTYLED);
        !self.model.has_text(&self.value) && first != BlockType::UNSTYLED
    }

    /// Block type at the selection start
    pub fn current_block_type(&self) -> Option<BlockType> {
        self.model.selection_block_type(&self.value)
    }

    /// Inline styles the next typed character would receive
    pub fn current_inline_style(&self) -> StyleSet {
        self.model.current_inline_style(&self.value)
    }
}

impl Default for EditorController<RichDocumentModel> {
    fn default() -> Self {
        Self::new(RichDocumentModel::new())
    }
}

impl EditorController<RichDocumentModel> {
    /// A controller using the user's config and layered keymap
    pub fn from_user_config() -> Self {
        let keymap = keymap::Keymap::with_bindings(keymap::load_default_keymap());
        Self::with_config(
            RichDocumentModel::with_keymap(keymap),
            &EditorConfig::load(),
        )
    }
}
