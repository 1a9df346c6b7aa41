//! Key scripts
//!
//! A line-oriented description of user input, replayed through
//! [`update`](crate::update::update). One directive per line; blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! block header-one
//! type Hello
//! key cmd+b
//! type  world
//! key enter
//! command save
//! ```
//!
//! | directive | message |
//! |-----------|---------|
//! | `type <text>` | `Msg::InsertText` (text after one space, verbatim) |
//! | `key <keys>` | `Msg::Key` (`cmd+shift+z`, `tab`, `a`) |
//! | `command <token>` | `Msg::Command` |
//! | `block <type>` | `Msg::ToggleBlockType` |
//! | `inline <style>` | `Msg::ToggleInlineStyle` |
//! | `select-all` | `Msg::SelectAll` |
//! | `click` | `Msg::ContainerClicked` |

use crate::command::NamedCommand;
use crate::keymap::{parse_key_string, KeymapError};
use crate::messages::Msg;
use crate::model::{BlockType, InlineStyle};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown directive {directive:?}")]
    UnknownDirective { line: usize, directive: String },
    #[error("line {line}: {directive} needs an argument")]
    MissingArgument { line: usize, directive: String },
    #[error("line {line}: {source}")]
    InvalidKey { line: usize, source: KeymapError },
}

/// Parse a whole script into messages
pub fn parse_script(source: &str) -> Result<Vec<Msg>, ScriptError> {
    let mut msgs = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        if let Some(msg) = parse_line(raw, idx + 1)? {
            msgs.push(msg);
        }
    }
    Ok(msgs)
}

fn parse_line(raw: &str, line: usize) -> Result<Option<Msg>, ScriptError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (directive, rest) = match trimmed.split_once(' ') {
        Some((directive, rest)) => (directive, rest),
        None => (trimmed.trim_end(), ""),
    };

    let argument = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            Err(ScriptError::MissingArgument {
                line,
                directive: directive.to_string(),
            })
        } else {
            Ok(value.to_string())
        }
    };

    let msg = match directive {
        "type" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    directive: directive.to_string(),
                });
            }
            Msg::InsertText(rest.to_string())
        }
        "key" => {
            let keys = argument(rest)?;
            let keystroke =
                parse_key_string(&keys).map_err(|source| ScriptError::InvalidKey { line, source })?;
            Msg::Key(keystroke)
        }
        "command" => Msg::Command(NamedCommand::new(argument(rest)?)),
        "block" => Msg::ToggleBlockType(BlockType::new(argument(rest)?)),
        "inline" => Msg::ToggleInlineStyle(InlineStyle::new(argument(rest)?)),
        "select-all" => Msg::SelectAll,
        "click" => Msg::ContainerClicked,
        other => {
            return Err(ScriptError::UnknownDirective {
                line,
                directive: other.to_string(),
            })
        }
    };

    Ok(Some(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, Modifiers};

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let msgs = parse_script("# heading\n\n   \nclick\n").unwrap();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Msg::ContainerClicked));
    }

    #[test]
    fn test_type_keeps_text_verbatim() {
        let msgs = parse_script("type  hello world \n").unwrap();
        match &msgs[0] {
            Msg::InsertText(text) => assert_eq!(text, " hello world "),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_key_directive() {
        let msgs = parse_script("key cmd+b\nkey shift+tab\n").unwrap();
        match &msgs[0] {
            Msg::Key(stroke) => {
                assert_eq!(stroke.key, KeyCode::Char('b'));
                assert_eq!(stroke.mods, Modifiers::cmd());
            }
            other => panic!("unexpected {:?}", other),
        }
        match &msgs[1] {
            Msg::Key(stroke) => {
                assert!(stroke.is_tab());
                assert!(stroke.mods.shift());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_style_directives() {
        let msgs = parse_script("block blockquote\ninline BOLD\ncommand save\n").unwrap();
        assert!(matches!(&msgs[0], Msg::ToggleBlockType(t) if *t == BlockType::BLOCKQUOTE));
        assert!(matches!(&msgs[1], Msg::ToggleInlineStyle(s) if *s == InlineStyle::BOLD));
        assert!(matches!(&msgs[2], Msg::Command(c) if *c == NamedCommand::SAVE));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_script("click\nfrobnicate now\n").unwrap_err(),
            ScriptError::UnknownDirective {
                line: 2,
                directive: "frobnicate".to_string()
            }
        );
        assert!(matches!(
            parse_script("key\n"),
            Err(ScriptError::MissingArgument { line: 1, .. })
        ));
        assert!(matches!(
            parse_script("\nkey cmd+nosuchkey\n"),
            Err(ScriptError::InvalidKey { line: 2, .. })
        ));
    }
}
