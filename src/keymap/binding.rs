//! Keybinding struct representing a mapping from a keystroke to a command

use crate::command::NamedCommand;

use super::types::Keystroke;

/// A single keybinding mapping one keystroke to a named command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: NamedCommand,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: NamedCommand) -> Self {
        Self { keystroke, command }
    }

    /// Whether this entry removes a binding instead of adding one
    pub fn is_unbind(&self) -> bool {
        self.command == NamedCommand::UNBOUND
    }

    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}
