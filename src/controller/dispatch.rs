//! Command dispatch
//!
//! The document model's builtin table is always asked first. Only a token it
//! does not claim can reach the reserved save check.

use crate::command::NamedCommand;
use crate::model::DocumentModel;

/// Outcome of dispatching one named command
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch<V> {
    /// The builtin table produced a new value
    Changed(V),
    /// The reserved save token; the document is untouched
    Save,
    Unhandled,
}

impl<V> Dispatch<V> {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Dispatch::Unhandled)
    }
}

pub fn dispatch<M: DocumentModel>(
    model: &M,
    value: &M::Value,
    command: &NamedCommand,
    save_command: &NamedCommand,
) -> Dispatch<M::Value> {
    if let Some(next) = model.handle_builtin_command(value, command) {
        tracing::debug!(%command, "handled by builtin table");
        return Dispatch::Changed(next);
    }

    if command == save_command {
        tracing::debug!(%command, "save requested");
        return Dispatch::Save;
    }

    tracing::debug!(%command, "unhandled");
    Dispatch::Unhandled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EditorState, InlineStyle, RichDocumentModel};

    fn run(command: &NamedCommand, save: &NamedCommand) -> Dispatch<EditorState> {
        let model = RichDocumentModel::new();
        let value = EditorState::create_empty();
        dispatch(&model, &value, command, save)
    }

    #[test]
    fn test_builtin_bold() {
        match run(&NamedCommand::BOLD, &NamedCommand::SAVE) {
            Dispatch::Changed(next) => {
                assert!(next.current_inline_style().contains(&InlineStyle::BOLD))
            }
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn test_save_token() {
        assert_eq!(run(&NamedCommand::SAVE, &NamedCommand::SAVE), Dispatch::Save);
    }

    #[test]
    fn test_custom_save_token() {
        let custom = NamedCommand::new("myeditor-save");
        assert_eq!(run(&custom, &custom), Dispatch::Save);
        assert_eq!(run(&NamedCommand::SAVE, &custom), Dispatch::Unhandled);
    }

    #[test]
    fn test_builtin_wins_over_save_token() {
        // Overloading a builtin token as the save token never reaches the save branch
        let result = run(&NamedCommand::BOLD, &NamedCommand::BOLD);
        assert!(matches!(result, Dispatch::Changed(_)));
    }

    #[test]
    fn test_unknown_token() {
        let result = run(&NamedCommand::new("frobnicate"), &NamedCommand::SAVE);
        assert_eq!(result, Dispatch::Unhandled);
        assert!(!result.is_handled());
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let result = run(&NamedCommand::new("Bold"), &NamedCommand::SAVE);
        assert_eq!(result, Dispatch::Unhandled);
        let result = run(&NamedCommand::new("SAVE"), &NamedCommand::SAVE);
        assert_eq!(result, Dispatch::Unhandled);
    }
}
