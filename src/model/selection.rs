//! Selection: an anchor and a focus, each a character offset inside a block

use serde::Serialize;

use super::content::{BlockKey, ContentState};

/// A caret position inside the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub key: BlockKey,
    pub offset: usize,
}

impl Position {
    pub const fn new(key: BlockKey, offset: usize) -> Self {
        Self { key, offset }
    }
}

/// The selection of a snapshot. Collapsed when anchor equals focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    anchor: Position,
    focus: Position,
}

impl SelectionState {
    pub const fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    pub const fn collapsed(at: Position) -> Self {
        Self {
            anchor: at,
            focus: at,
        }
    }

    /// Select `start..end` inside a single block
    pub const fn within(key: BlockKey, start: usize, end: usize) -> Self {
        Self::new(Position::new(key, start), Position::new(key, end))
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn focus(&self) -> Position {
        self.focus
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Whether focus precedes anchor in document order
    pub fn is_backward(&self, content: &ContentState) -> bool {
        let anchor_idx = content.index_of(self.anchor.key);
        let focus_idx = content.index_of(self.focus.key);
        match (anchor_idx, focus_idx) {
            (Some(a), Some(f)) if a != f => f < a,
            _ => self.focus.offset < self.anchor.offset,
        }
    }

    /// Start and end in document order
    pub fn ordered(&self, content: &ContentState) -> (Position, Position) {
        if self.is_backward(content) {
            (self.focus, self.anchor)
        } else {
            (self.anchor, self.focus)
        }
    }

    /// Clamp both ends to existing blocks and in-range offsets
    pub fn clamped(&self, content: &ContentState) -> Self {
        let clamp = |pos: Position| -> Position {
            match content.block_for_key(pos.key) {
                Some(block) => Position::new(pos.key, pos.offset.min(block.len())),
                None => content
                    .last_block()
                    .map(|b| Position::new(b.key(), b.len()))
                    .unwrap_or(pos),
            }
        };
        Self::new(clamp(self.anchor), clamp(self.focus))
    }
}
