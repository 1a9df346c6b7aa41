//! Named command tokens
//!
//! A [`NamedCommand`] is the string a keystroke classifies into and the
//! dispatcher routes on. Tokens are case-sensitive. The constants below cover
//! the document model's builtin table, its editing pipeline and the host's
//! reserved `save` token. Any other string is a valid custom command.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedCommand(Cow<'static, str>);

impl NamedCommand {
    // Host
    pub const SAVE: NamedCommand = NamedCommand::from_static("save");

    // Inline formatting
    pub const BOLD: NamedCommand = NamedCommand::from_static("bold");
    pub const ITALIC: NamedCommand = NamedCommand::from_static("italic");
    pub const UNDERLINE: NamedCommand = NamedCommand::from_static("underline");
    pub const CODE: NamedCommand = NamedCommand::from_static("code");

    // Deletion
    pub const BACKSPACE: NamedCommand = NamedCommand::from_static("backspace");
    pub const BACKSPACE_WORD: NamedCommand = NamedCommand::from_static("backspace-word");
    pub const BACKSPACE_TO_START_OF_LINE: NamedCommand =
        NamedCommand::from_static("backspace-to-start-of-line");
    pub const DELETE: NamedCommand = NamedCommand::from_static("delete");
    pub const DELETE_WORD: NamedCommand = NamedCommand::from_static("delete-word");
    pub const DELETE_TO_END_OF_BLOCK: NamedCommand =
        NamedCommand::from_static("delete-to-end-of-block");

    // Structure and history
    pub const SPLIT_BLOCK: NamedCommand = NamedCommand::from_static("split-block");
    pub const UNDO: NamedCommand = NamedCommand::from_static("undo");
    pub const REDO: NamedCommand = NamedCommand::from_static("redo");
    pub const SELECT_ALL: NamedCommand = NamedCommand::from_static("select-all");

    /// Keymap override token that removes a default binding
    pub const UNBOUND: NamedCommand = NamedCommand::from_static("unbound");

    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace-only tokens never name a command
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NamedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NamedCommand {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for NamedCommand {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl PartialEq<str> for NamedCommand {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NamedCommand {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_and_static_tokens_compare_equal() {
        assert_eq!(NamedCommand::from("bold"), NamedCommand::BOLD);
        assert_eq!(NamedCommand::SAVE, "save");
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_ne!(NamedCommand::from("Bold"), NamedCommand::BOLD);
    }

    #[test]
    fn test_blank_tokens() {
        assert!(NamedCommand::from("").is_blank());
        assert!(NamedCommand::from("  ").is_blank());
        assert!(!NamedCommand::UNDO.is_blank());
    }
}
