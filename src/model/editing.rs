//! The model's own editing pipeline
//!
//! Typing, paragraph splits, deletion and history. The host runs these when
//! the controller reports a command as not handled, or for plain text input,
//! and hands the result back through `apply_change`.

use std::str::FromStr;

use crate::command::NamedCommand;
use crate::util::text::{word_end, word_start};

use super::content::{BlockKey, ContentState};
use super::selection::{Position, SelectionState};
use super::state::{ChangeType, EditorState};
use super::transforms::remove_range;

/// How much a deletion removes when the selection is collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteUnit {
    Character,
    Word,
    Line,
}

/// Commands handled by the editing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    SplitBlock,
    Undo,
    Redo,
    SelectAll,
    Backspace(DeleteUnit),
    Delete(DeleteUnit),
}

impl FromStr for EditorCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split-block" => Ok(EditorCommand::SplitBlock),
            "undo" => Ok(EditorCommand::Undo),
            "redo" => Ok(EditorCommand::Redo),
            "select-all" => Ok(EditorCommand::SelectAll),
            "backspace" => Ok(EditorCommand::Backspace(DeleteUnit::Character)),
            "backspace-word" => Ok(EditorCommand::Backspace(DeleteUnit::Word)),
            "backspace-to-start-of-line" => Ok(EditorCommand::Backspace(DeleteUnit::Line)),
            "delete" => Ok(EditorCommand::Delete(DeleteUnit::Character)),
            "delete-word" => Ok(EditorCommand::Delete(DeleteUnit::Word)),
            "delete-to-end-of-block" => Ok(EditorCommand::Delete(DeleteUnit::Line)),
            _ => Err(()),
        }
    }
}

/// Run a command the builtin table passed on.
/// Returns `None` for tokens the pipeline does not know either.
pub fn handle_editor_command(state: &EditorState, command: &NamedCommand) -> Option<EditorState> {
    let command = command.as_str().parse::<EditorCommand>().ok()?;
    Some(match command {
        EditorCommand::SplitBlock => split_block(state),
        EditorCommand::Undo => state.undo(),
        EditorCommand::Redo => state.redo(),
        EditorCommand::SelectAll => select_all(state),
        EditorCommand::Backspace(unit) => delete_backward(state, unit),
        EditorCommand::Delete(unit) => delete_forward(state, unit),
    })
}

/// Split block `idx` at `offset`, returning the key of the new lower block
fn split_at(content: &mut ContentState, idx: usize, offset: usize) -> Option<BlockKey> {
    content.block_at(idx)?;
    let key = content.allocate_key();
    let mut tail = None;
    content.update_block(idx, |b| tail = Some(b.split_off(offset, key)));
    content.insert_block(idx + 1, tail?);
    Some(key)
}

/// Content with the selected range removed, plus the caret where it was
fn collapse(state: &EditorState) -> (ContentState, Position) {
    let content = state.content();
    let selection = state.selection();
    let (start, end) = selection.ordered(content);
    if selection.is_collapsed() {
        (content.clone(), start)
    } else {
        (remove_range(content, start, end), start)
    }
}

/// Insert typed or pasted text at the selection, replacing any range.
///
/// New characters take the current inline style (including a pending
/// override). Newlines split the block.
pub fn insert_text(state: &EditorState, text: &str) -> EditorState {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    if text.is_empty() {
        return state.clone();
    }

    let style = state.current_inline_style();
    let (mut next, mut caret) = collapse(state);
    let Some(mut idx) = next.index_of(caret.key) else {
        return state.clone();
    };

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            let Some(key) = split_at(&mut next, idx, caret.offset) else {
                return state.clone();
            };
            idx += 1;
            caret = Position::new(key, 0);
        }
        if !line.is_empty() {
            next.update_block(idx, |b| b.insert(caret.offset, line, &style));
            caret.offset += line.chars().count();
        }
    }

    let change = if text.contains('\n') {
        ChangeType::InsertFragment
    } else {
        ChangeType::InsertCharacters
    };
    state.push(next, SelectionState::collapsed(caret), change)
}

/// Enter: split the block at the caret, removing any selected range first
pub fn split_block(state: &EditorState) -> EditorState {
    let (mut next, caret) = collapse(state);
    let Some(idx) = next.index_of(caret.key) else {
        return state.clone();
    };
    let Some(key) = split_at(&mut next, idx, caret.offset) else {
        return state.clone();
    };
    state.push(
        next,
        SelectionState::collapsed(Position::new(key, 0)),
        ChangeType::SplitBlock,
    )
}

/// Backspace. At the start of a block the block joins the one above.
pub fn delete_backward(state: &EditorState, unit: DeleteUnit) -> EditorState {
    let content = state.content();
    let selection = state.selection();
    if !selection.is_collapsed() {
        let (next, caret) = collapse(state);
        return state.push(next, SelectionState::collapsed(caret), ChangeType::RemoveRange);
    }

    let caret = selection.anchor();
    let Some(block) = content.block_for_key(caret.key) else {
        return state.clone();
    };

    if caret.offset == 0 {
        let Some(prev) = content.block_before(caret.key) else {
            return state.clone();
        };
        let join = Position::new(prev.key(), prev.len());
        let next = remove_range(content, join, caret);
        return state.push(
            next,
            SelectionState::collapsed(join),
            ChangeType::BackspaceCharacter,
        );
    }

    let from = match unit {
        DeleteUnit::Character => caret.offset - 1,
        DeleteUnit::Word => word_start(block.rope(), caret.offset),
        DeleteUnit::Line => 0,
    };
    let start = Position::new(caret.key, from);
    let next = remove_range(content, start, caret);
    let change = match unit {
        DeleteUnit::Character => ChangeType::BackspaceCharacter,
        _ => ChangeType::RemoveRange,
    };
    state.push(next, SelectionState::collapsed(start), change)
}

/// Forward delete. At the end of a block the block below joins it.
pub fn delete_forward(state: &EditorState, unit: DeleteUnit) -> EditorState {
    let content = state.content();
    let selection = state.selection();
    if !selection.is_collapsed() {
        let (next, caret) = collapse(state);
        return state.push(next, SelectionState::collapsed(caret), ChangeType::RemoveRange);
    }

    let caret = selection.anchor();
    let Some(block) = content.block_for_key(caret.key) else {
        return state.clone();
    };

    if caret.offset >= block.len() {
        let Some(below) = content.block_after(caret.key) else {
            return state.clone();
        };
        let next = remove_range(content, caret, Position::new(below.key(), 0));
        return state.push(
            next,
            SelectionState::collapsed(caret),
            ChangeType::DeleteCharacter,
        );
    }

    let to = match unit {
        DeleteUnit::Character => caret.offset + 1,
        DeleteUnit::Word => word_end(block.rope(), caret.offset),
        DeleteUnit::Line => block.len(),
    };
    let next = remove_range(content, caret, Position::new(caret.key, to));
    let change = match unit {
        DeleteUnit::Character => ChangeType::DeleteCharacter,
        _ => ChangeType::RemoveRange,
    };
    state.push(next, SelectionState::collapsed(caret), change)
}

/// Move the selection. Selecting what is already selected is a no-op.
pub fn select(state: &EditorState, selection: SelectionState) -> EditorState {
    let selection = selection.clamped(state.content());
    if selection == state.selection() && state.inline_style_override().is_none() {
        return state.clone();
    }
    state.with_selection(selection)
}

/// Select from the start of the first block to the end of the last
pub fn select_all(state: &EditorState) -> EditorState {
    let content = state.content();
    let (Some(first), Some(last)) = (content.first_block(), content.last_block()) else {
        return state.clone();
    };
    select(
        state,
        SelectionState::new(
            Position::new(first.key(), 0),
            Position::new(last.key(), last.len()),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::style::{BlockType, InlineStyle};
    use crate::model::transforms::toggle_inline_style;

    fn typed(text: &str) -> EditorState {
        insert_text(&EditorState::create_empty(), text)
    }

    #[test]
    fn test_insert_text_moves_caret() {
        let state = typed("hello");
        assert_eq!(state.plain_text(), "hello");
        assert_eq!(state.selection().focus().offset, 5);
        assert_eq!(state.last_change_type(), Some(ChangeType::InsertCharacters));
    }

    #[test]
    fn test_insert_multiline_splits_blocks() {
        let state = typed("one\ntwo\r\nthree");
        assert_eq!(state.content().block_count(), 3);
        assert_eq!(state.plain_text(), "one\ntwo\nthree");
        assert_eq!(state.selection().focus().offset, 5);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let state = select_all(&typed("hello world"));
        let next = insert_text(&state, "bye");
        assert_eq!(next.plain_text(), "bye");
    }

    #[test]
    fn test_insert_uses_pending_override() {
        let state = toggle_inline_style(&EditorState::create_empty(), &InlineStyle::BOLD);
        let next = insert_text(&state, "hi");
        let block = next.content().first_block().expect("block");
        assert!(block.style_at(0).expect("style").contains(&InlineStyle::BOLD));
        assert!(next.inline_style_override().is_none());
        assert!(next.current_inline_style().contains(&InlineStyle::BOLD));
    }

    #[test]
    fn test_split_block_keeps_type() {
        let content = ContentState::from_typed_blocks(&[(BlockType::BLOCKQUOTE, "quote")]);
        let state = select(
            &EditorState::create_with_content(content),
            SelectionState::within(BlockKey::new(0), 2, 2),
        );
        let next = split_block(&state);
        assert_eq!(next.plain_text(), "qu\note");
        assert!(next
            .content()
            .blocks()
            .all(|b| *b.block_type() == BlockType::BLOCKQUOTE));
        assert_eq!(next.selection().focus().offset, 0);
    }

    #[test]
    fn test_backspace_joins_blocks() {
        let state = typed("ab\ncd");
        let caret = state.selection().focus();
        let at_start = select(&state, SelectionState::collapsed(Position::new(caret.key, 0)));
        let next = delete_backward(&at_start, DeleteUnit::Character);
        assert_eq!(next.plain_text(), "abcd");
        assert_eq!(next.selection().focus().offset, 2);
    }

    #[test]
    fn test_backspace_word_and_line() {
        let state = typed("hello brave world");
        assert_eq!(
            delete_backward(&state, DeleteUnit::Word).plain_text(),
            "hello brave "
        );
        assert_eq!(delete_backward(&state, DeleteUnit::Line).plain_text(), "");
    }

    #[test]
    fn test_backspace_at_document_start_is_noop() {
        let state = EditorState::create_empty();
        let next = delete_backward(&state, DeleteUnit::Character);
        assert!(EditorState::ptr_eq(&state, &next));
    }

    #[test]
    fn test_delete_forward_joins_next_block() {
        let state = typed("ab\ncd");
        let first = state.content().first_block().expect("block").key();
        let at_end = select(&state, SelectionState::collapsed(Position::new(first, 2)));
        let next = delete_forward(&at_end, DeleteUnit::Character);
        assert_eq!(next.plain_text(), "abcd");
    }

    #[test]
    fn test_undo_restores_whole_typing_run() {
        let mut state = EditorState::create_empty();
        for ch in ["a", "b", "c"] {
            state = insert_text(&state, ch);
        }
        let next = handle_editor_command(&state, &NamedCommand::UNDO).expect("known");
        assert_eq!(next.plain_text(), "");
    }

    #[test]
    fn test_commands_are_hashable() {
        use std::collections::HashSet;

        let tokens = ["backspace", "backspace-word", "delete", "delete-word", "undo"];
        let set: HashSet<EditorCommand> = tokens
            .iter()
            .map(|t| t.parse().expect("known token"))
            .collect();
        assert_eq!(set.len(), tokens.len());
        assert!(set.contains(&EditorCommand::Backspace(DeleteUnit::Word)));
    }

    #[test]
    fn test_unknown_command_is_none() {
        let state = EditorState::create_empty();
        assert!(handle_editor_command(&state, &NamedCommand::from("frobnicate")).is_none());
        assert!(handle_editor_command(&state, &NamedCommand::BOLD).is_none());
    }

    #[test]
    fn test_select_same_selection_is_identity() {
        let state = typed("abc");
        let next = select(&state, state.selection());
        assert!(EditorState::ptr_eq(&state, &next));
    }
}
