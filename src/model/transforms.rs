//! Style and structure transforms over snapshots
//!
//! Each function takes a snapshot and returns the next one. When a transform
//! would not change anything it returns a clone of its input, so callers can
//! detect the no-op with [`EditorState::ptr_eq`].

use super::content::ContentState;
use super::selection::Position;
use super::state::{ChangeType, EditorState};
use super::style::{toggled, BlockType, InlineStyle};

/// Direction of a Tab depth adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentDirection {
    Indent,
    Outdent,
}

/// Indices of the blocks covered by the selection, in document order
fn selected_block_range(state: &EditorState) -> Option<(usize, usize)> {
    let content = state.content();
    let (start, end) = state.selection().ordered(content);
    let first = content.index_of(start.key)?;
    let last = content.index_of(end.key)?;
    Some((first, last))
}

/// Set `block_type` on every selected block, or reset them to unstyled when
/// the block at the selection start already has it
pub fn toggle_block_type(state: &EditorState, block_type: &BlockType) -> EditorState {
    let Some((first, last)) = selected_block_range(state) else {
        return state.clone();
    };
    let content = state.content();
    let current = content.block_at(first).map(|b| b.block_type());
    let target = if current == Some(block_type) {
        BlockType::UNSTYLED
    } else {
        block_type.clone()
    };

    let already = (first..=last)
        .filter_map(|idx| content.block_at(idx))
        .all(|b| *b.block_type() == target);
    if already {
        return state.clone();
    }

    let mut next = content.clone();
    for idx in first..=last {
        next.update_block(idx, |b| b.set_type(target.clone()));
    }
    state.push(next, state.selection(), ChangeType::ChangeBlockType)
}

/// Flip `style` on the selection.
///
/// A collapsed selection flips the style in the pending override, so the
/// next typed characters pick it up. A range removes the style when the
/// character at its start carries it and adds it to the whole range otherwise.
pub fn toggle_inline_style(state: &EditorState, style: &InlineStyle) -> EditorState {
    let selection = state.selection();
    if selection.is_collapsed() {
        let next = toggled(&state.current_inline_style(), style);
        let base = state.style_at_selection();
        let style_override = (next != base).then_some(next);
        return state.with_inline_style_override(style_override);
    }

    let add = !state.style_at_selection().contains(style);
    let content = state.content();
    let (start, end) = selection.ordered(content);
    let Some((first, last)) = selected_block_range(state) else {
        return state.clone();
    };

    let mut next = content.clone();
    let mut changed = false;
    for idx in first..=last {
        let Some(len) = next.block_at(idx).map(|b| b.len()) else {
            continue;
        };
        let from = if idx == first { start.offset } else { 0 };
        let to = if idx == last { end.offset } else { len };
        if from >= to {
            continue;
        }
        next.update_block(idx, |b| changed |= b.apply_style(from..to, style, add));
    }

    if !changed {
        return state.clone();
    }
    state.push(next, selection, ChangeType::ChangeInlineStyle)
}

/// Tab handling for list items.
///
/// Only a selection inside a single list-item block is adjusted. Depth moves
/// by one and stays within `0..=max_depth`. Anything else returns the input.
pub fn adjust_depth(
    state: &EditorState,
    direction: IndentDirection,
    max_depth: u8,
) -> EditorState {
    let selection = state.selection();
    if selection.anchor().key != selection.focus().key {
        return state.clone();
    }
    let content = state.content();
    let Some(idx) = content.index_of(selection.anchor().key) else {
        return state.clone();
    };
    let Some(block) = content.block_at(idx) else {
        return state.clone();
    };
    if !block.block_type().is_list_item() {
        return state.clone();
    }

    let depth = block.depth();
    let target = match direction {
        IndentDirection::Indent => depth.saturating_add(1).min(max_depth),
        IndentDirection::Outdent => depth.saturating_sub(1),
    };
    if target == depth {
        return state.clone();
    }

    let mut next = content.clone();
    next.update_block(idx, |b| b.set_depth(target));
    state.push(next, selection, ChangeType::AdjustDepth)
}

/// Backspace at the very start of a styled block strips the style instead
/// of deleting.
///
/// Applies when the selection is collapsed at offset 0 of a block that is
/// empty or is the first block. A nested list item loses one level of
/// depth; any other non-unstyled block becomes unstyled. A code block that
/// follows a non-empty code block is left alone so the two can merge.
/// Returns `None` when the backspace should delete characters instead.
pub fn remove_block_style(state: &EditorState) -> Option<EditorState> {
    let selection = state.selection();
    if !selection.is_collapsed() || selection.anchor().offset != 0 {
        return None;
    }

    let content = state.content();
    let key = selection.anchor().key;
    let idx = content.index_of(key)?;
    let block = content.block_at(idx)?;
    if !block.is_empty() && idx != 0 {
        return None;
    }

    let block_type = block.block_type();
    if *block_type == BlockType::CODE_BLOCK {
        let joins_code = content
            .block_before(key)
            .is_some_and(|b| *b.block_type() == BlockType::CODE_BLOCK && !b.is_empty());
        if joins_code {
            return None;
        }
    }

    if block_type.is_list_item() && block.depth() > 0 {
        let depth = block.depth() - 1;
        let mut next = content.clone();
        next.update_block(idx, |b| b.set_depth(depth));
        return Some(state.push(next, selection, ChangeType::AdjustDepth));
    }

    if *block_type != BlockType::UNSTYLED {
        let mut next = content.clone();
        next.update_block(idx, |b| b.set_type(BlockType::UNSTYLED));
        return Some(state.push(next, selection, ChangeType::ChangeBlockType));
    }

    None
}

/// Remove everything between `start` and `end`, joining the two edge blocks.
/// The start block keeps its key, type and depth.
pub(crate) fn remove_range(content: &ContentState, start: Position, end: Position) -> ContentState {
    let mut next = content.clone();
    let (Some(first), Some(last)) = (content.index_of(start.key), content.index_of(end.key)) else {
        return next;
    };

    if first == last {
        next.update_block(first, |b| b.remove(start.offset..end.offset));
        return next;
    }

    let Some(tail) = content.block_at(last).map(|b| {
        let mut tail = b.clone();
        tail.remove(0..end.offset);
        tail
    }) else {
        return next;
    };
    next.update_block(first, |b| {
        let len = b.len();
        b.remove(start.offset..len);
        b.append(&tail);
    });
    next.remove_blocks(first + 1..last + 1);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::BlockKey;
    use crate::model::selection::SelectionState;

    fn state_with(blocks: &[(BlockType, &str)], selection: SelectionState) -> EditorState {
        EditorState::create_with_content(ContentState::from_typed_blocks(blocks))
            .with_selection(selection)
    }

    fn key(raw: u32) -> BlockKey {
        BlockKey::new(raw)
    }

    #[test]
    fn test_toggle_block_type_sets_and_resets() {
        let state = EditorState::create_empty();
        let quoted = toggle_block_type(&state, &BlockType::BLOCKQUOTE);
        assert_eq!(
            quoted.content().first_block().map(|b| b.block_type().clone()),
            Some(BlockType::BLOCKQUOTE)
        );
        let reset = toggle_block_type(&quoted, &BlockType::BLOCKQUOTE);
        assert_eq!(reset.content(), state.content());
    }

    #[test]
    fn test_toggle_block_type_spans_selected_blocks() {
        let state = state_with(
            &[
                (BlockType::UNSTYLED, "one"),
                (BlockType::UNSTYLED, "two"),
                (BlockType::UNSTYLED, "three"),
            ],
            SelectionState::new(Position::new(key(0), 1), Position::new(key(1), 1)),
        );
        let next = toggle_block_type(&state, &BlockType::HEADER_ONE);
        let types: Vec<_> = next.content().blocks().map(|b| b.block_type().clone()).collect();
        assert_eq!(
            types,
            vec![BlockType::HEADER_ONE, BlockType::HEADER_ONE, BlockType::UNSTYLED]
        );
        assert!(next.content().shares_block(state.content(), key(2)));
    }

    #[test]
    fn test_toggle_inline_style_on_range() {
        let state = state_with(
            &[(BlockType::UNSTYLED, "hello")],
            SelectionState::within(key(0), 1, 4),
        );
        let bold = toggle_inline_style(&state, &InlineStyle::BOLD);
        let block = bold.content().first_block().expect("block");
        assert!(!block.style_at(0).expect("style").contains(&InlineStyle::BOLD));
        assert!(block.style_at(1).expect("style").contains(&InlineStyle::BOLD));
        assert!(block.style_at(3).expect("style").contains(&InlineStyle::BOLD));
        assert!(!block.style_at(4).expect("style").contains(&InlineStyle::BOLD));

        let plain = toggle_inline_style(&bold, &InlineStyle::BOLD);
        assert_eq!(plain, state);
    }

    #[test]
    fn test_toggle_inline_style_collapsed_sets_override() {
        let state = EditorState::create_empty();
        let next = toggle_inline_style(&state, &InlineStyle::ITALIC);
        assert!(next.current_inline_style().contains(&InlineStyle::ITALIC));
        assert_eq!(next.content(), state.content());

        let back = toggle_inline_style(&next, &InlineStyle::ITALIC);
        assert_eq!(back, state);
        assert!(back.inline_style_override().is_none());
    }

    #[test]
    fn test_adjust_depth_ignores_non_list_blocks() {
        let state = EditorState::create_empty();
        let next = adjust_depth(&state, IndentDirection::Indent, 4);
        assert!(EditorState::ptr_eq(&state, &next));
    }

    #[test]
    fn test_adjust_depth_bounds() {
        let state = state_with(
            &[(BlockType::UNORDERED_LIST_ITEM, "item")],
            SelectionState::within(key(0), 0, 0),
        );
        let deeper = adjust_depth(&state, IndentDirection::Indent, 1);
        assert_eq!(deeper.content().first_block().map(|b| b.depth()), Some(1));

        let capped = adjust_depth(&deeper, IndentDirection::Indent, 1);
        assert!(EditorState::ptr_eq(&deeper, &capped));

        let floor = adjust_depth(&state, IndentDirection::Outdent, 1);
        assert!(EditorState::ptr_eq(&state, &floor));
    }

    #[test]
    fn test_remove_block_style_on_empty_quote() {
        let state = state_with(
            &[(BlockType::UNSTYLED, "text"), (BlockType::BLOCKQUOTE, "")],
            SelectionState::within(key(1), 0, 0),
        );
        let next = remove_block_style(&state).expect("handled");
        assert_eq!(
            next.content().block_at(1).map(|b| b.block_type().clone()),
            Some(BlockType::UNSTYLED)
        );
    }

    #[test]
    fn test_remove_block_style_skips_non_empty_inner_block() {
        let state = state_with(
            &[(BlockType::UNSTYLED, "text"), (BlockType::BLOCKQUOTE, "quote")],
            SelectionState::within(key(1), 0, 0),
        );
        assert!(remove_block_style(&state).is_none());
    }

    #[test]
    fn test_remove_block_style_outdents_nested_list() {
        let content = ContentState::from_typed_blocks(&[(BlockType::ORDERED_LIST_ITEM, "")]);
        let state = adjust_depth(
            &EditorState::create_with_content(content),
            IndentDirection::Indent,
            4,
        );
        let next = remove_block_style(&state).expect("handled");
        let block = next.content().first_block().expect("block");
        assert_eq!(block.depth(), 0);
        assert_eq!(block.block_type(), &BlockType::ORDERED_LIST_ITEM);
    }

    #[test]
    fn test_remove_range_joins_blocks() {
        let content = ContentState::from_text("hello\nbig\nworld");
        let next = remove_range(
            &content,
            Position::new(key(0), 2),
            Position::new(key(2), 3),
        );
        assert_eq!(next.plain_text(), "held");
        assert_eq!(next.block_count(), 1);
    }
}
