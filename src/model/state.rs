//! Immutable editor snapshots
//!
//! An [`EditorState`] bundles content, selection, the pending inline style
//! override and undo history. Snapshots are never mutated: every transform
//! returns a new one, and identity is checked with [`EditorState::ptr_eq`].

use std::sync::Arc;

use serde::Serialize;

use super::content::{BlockKey, ContentBlock, ContentState};
use super::selection::{Position, SelectionState};
use super::style::StyleSet;

/// Maximum number of undo entries kept per snapshot lineage
pub const MAX_UNDO: usize = 1000;

/// What kind of edit produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeType {
    InsertCharacters,
    InsertFragment,
    SplitBlock,
    BackspaceCharacter,
    DeleteCharacter,
    RemoveRange,
    ChangeBlockType,
    ChangeInlineStyle,
    AdjustDepth,
    Undo,
    Redo,
}

impl ChangeType {
    /// Consecutive changes of these kinds share one undo entry
    fn coalesces(self) -> bool {
        matches!(
            self,
            ChangeType::InsertCharacters
                | ChangeType::BackspaceCharacter
                | ChangeType::DeleteCharacter
        )
    }
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    content: Arc<ContentState>,
    selection: SelectionState,
}

#[derive(Debug)]
struct HistoryNode {
    entry: HistoryEntry,
    below: Option<Arc<HistoryNode>>,
}

/// Persistent stack of history entries. Snapshots share every node, so
/// pushing and popping never copy the stack.
///
/// `len` is the reachable depth and never exceeds [`MAX_UNDO`]. Nodes past
/// it stay linked until the chain reaches twice the cap, then the reachable
/// part is rebuilt.
#[derive(Debug, Clone, Default)]
struct History {
    head: Option<Arc<HistoryNode>>,
    len: usize,
    depth: usize,
}

impl History {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&self, entry: HistoryEntry) -> Self {
        let pushed = Self {
            head: Some(Arc::new(HistoryNode {
                entry,
                below: self.head.clone(),
            })),
            len: (self.len + 1).min(MAX_UNDO),
            depth: self.depth + 1,
        };
        if pushed.depth > 2 * MAX_UNDO {
            pushed.compacted()
        } else {
            pushed
        }
    }

    fn pop(&self) -> Option<(HistoryEntry, Self)> {
        if self.len == 0 {
            return None;
        }
        let node = self.head.as_ref()?;
        Some((
            node.entry.clone(),
            Self {
                head: node.below.clone(),
                len: self.len - 1,
                depth: self.depth - 1,
            },
        ))
    }

    /// Relink only the reachable entries, releasing the rest
    fn compacted(&self) -> Self {
        let mut kept = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if kept.len() == self.len {
                break;
            }
            kept.push(node.entry.clone());
            cursor = node.below.as_deref();
        }
        kept.into_iter()
            .rev()
            .fold(History::default(), |history, entry| history.push(entry))
    }
}

#[derive(Debug)]
struct Inner {
    content: Arc<ContentState>,
    selection: SelectionState,
    inline_style_override: Option<StyleSet>,
    undo_stack: History,
    redo_stack: History,
    last_change: Option<ChangeType>,
}

/// Immutable snapshot of the edited document
#[derive(Debug, Clone)]
pub struct EditorState {
    inner: Arc<Inner>,
}

impl EditorState {
    /// A snapshot holding one empty unstyled block
    pub fn create_empty() -> Self {
        Self::create_with_content(ContentState::empty())
    }

    /// A snapshot over `content` with the caret at the start of the first block
    pub fn create_with_content(content: ContentState) -> Self {
        let key = content
            .first_block()
            .map(|b| b.key())
            .unwrap_or(BlockKey::new(0));
        Self::from_inner(Inner {
            content: Arc::new(content),
            selection: SelectionState::collapsed(Position::new(key, 0)),
            inline_style_override: None,
            undo_stack: History::default(),
            redo_stack: History::default(),
            last_change: None,
        })
    }

    fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Identity comparison: true only for clones of the same snapshot
    pub fn ptr_eq(a: &EditorState, b: &EditorState) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn content(&self) -> &ContentState {
        &self.inner.content
    }

    pub fn selection(&self) -> SelectionState {
        self.inner.selection
    }

    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inner.inline_style_override.as_ref()
    }

    pub fn last_change_type(&self) -> Option<ChangeType> {
        self.inner.last_change
    }

    pub fn can_undo(&self) -> bool {
        !self.inner.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.inner.redo_stack.is_empty()
    }

    pub fn plain_text(&self) -> String {
        self.inner.content.plain_text()
    }

    /// The block holding the start of the selection
    pub fn selection_block(&self) -> Option<&ContentBlock> {
        let (start, _) = self.inner.selection.ordered(&self.inner.content);
        self.inner.content.block_for_key(start.key)
    }

    /// Style that the next typed character receives
    pub fn current_inline_style(&self) -> StyleSet {
        match &self.inner.inline_style_override {
            Some(set) => set.clone(),
            None => self.style_at_selection(),
        }
    }

    /// Style at the selection, ignoring any pending override
    pub fn style_at_selection(&self) -> StyleSet {
        let content = self.content();
        let selection = self.selection();
        let (start, _) = selection.ordered(content);
        let Some(block) = content.block_for_key(start.key) else {
            return StyleSet::new();
        };

        let offset = start.offset;
        let found = if selection.is_collapsed() {
            if offset > 0 {
                block.style_at(offset - 1)
            } else {
                block.style_at(0)
            }
        } else if offset < block.len() {
            block.style_at(offset)
        } else {
            offset.checked_sub(1).and_then(|prev| block.style_at(prev))
        };

        match found {
            Some(set) => set.clone(),
            None => Self::look_upward_for_style(content, start.key),
        }
    }

    /// Style of the last character of the nearest non-empty block above `key`
    fn look_upward_for_style(content: &ContentState, key: BlockKey) -> StyleSet {
        let Some(idx) = content.index_of(key) else {
            return StyleSet::new();
        };
        (0..idx)
            .rev()
            .filter_map(|i| content.block_at(i))
            .find(|b| !b.is_empty())
            .and_then(|b| b.style_at(b.len() - 1))
            .cloned()
            .unwrap_or_default()
    }

    /// Record `content` as a new undoable change
    pub(crate) fn push(
        &self,
        content: ContentState,
        selection: SelectionState,
        change: ChangeType,
    ) -> Self {
        let boundary = !(change.coalesces() && self.inner.last_change == Some(change));
        let undo_stack = if boundary {
            self.inner.undo_stack.push(self.history_entry())
        } else {
            self.inner.undo_stack.clone()
        };

        let selection = selection.clamped(&content);
        Self::from_inner(Inner {
            content: Arc::new(content),
            selection,
            inline_style_override: None,
            undo_stack,
            redo_stack: History::default(),
            last_change: Some(change),
        })
    }

    /// Move the selection. Clears the inline override and ends any typing run.
    pub(crate) fn with_selection(&self, selection: SelectionState) -> Self {
        Self::from_inner(Inner {
            content: Arc::clone(&self.inner.content),
            selection: selection.clamped(&self.inner.content),
            inline_style_override: None,
            undo_stack: self.inner.undo_stack.clone(),
            redo_stack: self.inner.redo_stack.clone(),
            last_change: None,
        })
    }

    pub(crate) fn with_inline_style_override(&self, style: Option<StyleSet>) -> Self {
        Self::from_inner(Inner {
            content: Arc::clone(&self.inner.content),
            selection: self.inner.selection,
            inline_style_override: style,
            undo_stack: self.inner.undo_stack.clone(),
            redo_stack: self.inner.redo_stack.clone(),
            last_change: self.inner.last_change,
        })
    }

    fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            content: Arc::clone(&self.inner.content),
            selection: self.inner.selection,
        }
    }

    /// Restore the previous content. Identity-equal when there is nothing to undo.
    pub fn undo(&self) -> Self {
        let Some((entry, undo_stack)) = self.inner.undo_stack.pop() else {
            return self.clone();
        };
        let redo_stack = self.inner.redo_stack.push(self.history_entry());
        Self::from_inner(Inner {
            content: entry.content,
            selection: entry.selection,
            inline_style_override: None,
            undo_stack,
            redo_stack,
            last_change: Some(ChangeType::Undo),
        })
    }

    /// Reapply the last undone content. Identity-equal when there is nothing to redo.
    pub fn redo(&self) -> Self {
        let Some((entry, redo_stack)) = self.inner.redo_stack.pop() else {
            return self.clone();
        };
        let undo_stack = self.inner.undo_stack.push(self.history_entry());
        Self::from_inner(Inner {
            content: entry.content,
            selection: entry.selection,
            inline_style_override: None,
            undo_stack,
            redo_stack,
            last_change: Some(ChangeType::Redo),
        })
    }
}

/// Structural equality: content, selection and pending override.
/// Undo history is not compared.
impl PartialEq for EditorState {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
            || (self.inner.content == other.inner.content
                && self.inner.selection == other.inner.selection
                && self.inner.inline_style_override == other.inner.inline_style_override)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::create_empty()
    }
}
