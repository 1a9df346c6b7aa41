//! Keystroke classification
//!
//! Turns a raw keystroke into either a named command from the document
//! model's default keymap or [`KeyCommand::PassThrough`], which leaves the
//! key to the host's normal text input.

use crate::command::NamedCommand;
use crate::model::DocumentModel;

use super::types::Keystroke;

/// Result of classifying a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Named(NamedCommand),
    PassThrough,
}

impl KeyCommand {
    pub fn command(&self) -> Option<&NamedCommand> {
        match self {
            KeyCommand::Named(command) => Some(command),
            KeyCommand::PassThrough => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, KeyCommand::PassThrough)
    }
}

/// Classify a keystroke against the model's default keymap
pub fn classify<M: DocumentModel>(model: &M, keystroke: &Keystroke) -> KeyCommand {
    let result = match model.default_key_binding(keystroke) {
        Some(command) if !command.is_blank() => KeyCommand::Named(command),
        _ => KeyCommand::PassThrough,
    };
    tracing::trace!(keystroke = %keystroke, ?result, "classified key");
    result
}
