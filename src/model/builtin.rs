//! The document model's builtin key-command table
//!
//! These are the commands the model claims before any host handling runs:
//! inline formatting shortcuts and the "strip block style" form of
//! backspace. Everything else is left to the caller.

use std::str::FromStr;

use crate::command::NamedCommand;

use super::state::EditorState;
use super::style::InlineStyle;
use super::transforms::{remove_block_style, toggle_inline_style};

/// Commands recognized by the builtin table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinCommand {
    Bold,
    Italic,
    Underline,
    Code,
    Backspace,
    BackspaceWord,
    BackspaceToStartOfLine,
}

impl BuiltinCommand {
    pub const ALL: [BuiltinCommand; 7] = [
        BuiltinCommand::Bold,
        BuiltinCommand::Italic,
        BuiltinCommand::Underline,
        BuiltinCommand::Code,
        BuiltinCommand::Backspace,
        BuiltinCommand::BackspaceWord,
        BuiltinCommand::BackspaceToStartOfLine,
    ];

    pub fn token(self) -> NamedCommand {
        match self {
            BuiltinCommand::Bold => NamedCommand::BOLD,
            BuiltinCommand::Italic => NamedCommand::ITALIC,
            BuiltinCommand::Underline => NamedCommand::UNDERLINE,
            BuiltinCommand::Code => NamedCommand::CODE,
            BuiltinCommand::Backspace => NamedCommand::BACKSPACE,
            BuiltinCommand::BackspaceWord => NamedCommand::BACKSPACE_WORD,
            BuiltinCommand::BackspaceToStartOfLine => NamedCommand::BACKSPACE_TO_START_OF_LINE,
        }
    }

    /// The inline style a formatting shortcut toggles
    pub fn inline_style(self) -> Option<InlineStyle> {
        match self {
            BuiltinCommand::Bold => Some(InlineStyle::BOLD),
            BuiltinCommand::Italic => Some(InlineStyle::ITALIC),
            BuiltinCommand::Underline => Some(InlineStyle::UNDERLINE),
            BuiltinCommand::Code => Some(InlineStyle::CODE),
            _ => None,
        }
    }
}

impl FromStr for BuiltinCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(BuiltinCommand::Bold),
            "italic" => Ok(BuiltinCommand::Italic),
            "underline" => Ok(BuiltinCommand::Underline),
            "code" => Ok(BuiltinCommand::Code),
            "backspace" => Ok(BuiltinCommand::Backspace),
            "backspace-word" => Ok(BuiltinCommand::BackspaceWord),
            "backspace-to-start-of-line" => Ok(BuiltinCommand::BackspaceToStartOfLine),
            _ => Err(()),
        }
    }
}

/// Run `command` through the builtin table.
///
/// Returns the next snapshot when the table handles the command, `None`
/// when the command is unknown or does not apply to the current selection.
pub fn handle_key_command(state: &EditorState, command: &NamedCommand) -> Option<EditorState> {
    let builtin = command.as_str().parse::<BuiltinCommand>().ok()?;
    if let Some(style) = builtin.inline_style() {
        return Some(toggle_inline_style(state, &style));
    }
    remove_block_style(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::{BlockKey, ContentState};
    use crate::model::selection::SelectionState;
    use crate::model::style::BlockType;

    #[test]
    fn test_tokens_roundtrip_through_from_str() {
        for builtin in BuiltinCommand::ALL {
            assert_eq!(builtin.token().as_str().parse::<BuiltinCommand>(), Ok(builtin));
        }
    }

    #[test]
    fn test_unknown_tokens_are_not_handled() {
        let state = EditorState::create_empty();
        assert!(handle_key_command(&state, &NamedCommand::SAVE).is_none());
        assert!(handle_key_command(&state, &NamedCommand::SPLIT_BLOCK).is_none());
        assert!(handle_key_command(&state, &NamedCommand::from("BOLD")).is_none());
    }

    #[test]
    fn test_bold_toggles_override() {
        let state = EditorState::create_empty();
        let next = handle_key_command(&state, &NamedCommand::BOLD).expect("handled");
        assert_ne!(next, state);
        let back = handle_key_command(&next, &NamedCommand::BOLD).expect("handled");
        assert_eq!(back, state);
    }

    #[test]
    fn test_backspace_only_handles_style_removal() {
        let plain = EditorState::create_with_content(ContentState::from_text("abc"));
        assert!(handle_key_command(&plain, &NamedCommand::BACKSPACE).is_none());

        let quote = EditorState::create_with_content(ContentState::from_typed_blocks(&[(
            BlockType::BLOCKQUOTE,
            "abc",
        )]))
        .with_selection(SelectionState::within(BlockKey::new(0), 0, 0));
        let next = handle_key_command(&quote, &NamedCommand::BACKSPACE).expect("handled");
        assert_eq!(next.plain_text(), "abc");
        assert_eq!(
            next.selection_block().map(|b| b.block_type().clone()),
            Some(BlockType::UNSTYLED)
        );
    }
}
