//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use crate::command::NamedCommand;

use super::binding::Keybinding;
use super::types::Keystroke;

/// Keystroke → command table. The first binding added for a keystroke wins;
/// use [`merge_bindings`](super::merge_bindings) to override.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding. Unbind markers and blank commands are ignored.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.is_unbind() || binding.command.is_blank() {
            return;
        }
        if self.lookup.contains_key(&binding.keystroke) {
            tracing::debug!(
                keystroke = %binding.keystroke,
                command = %binding.command,
                "keystroke already bound, ignoring"
            );
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    pub fn lookup(&self, keystroke: &Keystroke) -> Option<&NamedCommand> {
        let idx = *self.lookup.get(keystroke)?;
        self.bindings.get(idx).map(|b| &b.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// First binding for a command
    pub fn binding_for(&self, command: &NamedCommand) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == *command)
    }

    /// Display string for a command's keybinding, e.g. for toolbar tooltips
    pub fn display_for(&self, command: &NamedCommand) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl(c: char) -> Keystroke {
        Keystroke::new(KeyCode::Char(c), Modifiers::CTRL)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl('b'), NamedCommand::BOLD)]);

        assert_eq!(keymap.lookup(&ctrl('b')), Some(&NamedCommand::BOLD));
        assert_eq!(keymap.lookup(&ctrl('k')), None);
    }

    #[test]
    fn test_first_binding_wins() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl('b'), NamedCommand::BOLD),
            Keybinding::new(ctrl('b'), NamedCommand::ITALIC),
        ]);
        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap.lookup(&ctrl('b')), Some(&NamedCommand::BOLD));
    }

    #[test]
    fn test_blank_and_unbound_are_skipped() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl('x'), NamedCommand::from("")),
            Keybinding::new(ctrl('y'), NamedCommand::UNBOUND),
        ]);
        assert!(keymap.is_empty());
    }

    #[test]
    fn test_display_for_command() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl('s'), NamedCommand::SAVE)]);
        let display = keymap.display_for(&NamedCommand::SAVE).expect("bound");
        assert!(display.contains('S'));
        assert!(keymap.display_for(&NamedCommand::UNDO).is_none());
    }
}
