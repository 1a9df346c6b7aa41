//! Block content: the ordered list of styled paragraphs inside a snapshot
//!
//! Blocks are held behind `Arc` and edited through `Arc::make_mut`, so a
//! transform only copies the blocks it touches. Untouched blocks stay shared
//! between consecutive snapshots.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use ropey::Rope;
use serde::Serialize;

use super::style::{BlockType, StyleSet};

/// Filler some hosts leave in an otherwise empty block
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Stable identifier of a block within one content tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockKey(u32);

impl BlockKey {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// A contiguous run of characters sharing the same inline styles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    pub styles: StyleSet,
}

/// One paragraph: text plus one style set per character
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    key: BlockKey,
    block_type: BlockType,
    depth: u8,
    text: Rope,
    styles: Vec<StyleSet>,
}

impl ContentBlock {
    /// Create an unstyled block with unformatted text
    pub fn new(key: BlockKey, text: &str) -> Self {
        let text = Rope::from_str(text);
        let styles = vec![StyleSet::new(); text.len_chars()];
        Self {
            key,
            block_type: BlockType::UNSTYLED,
            depth: 0,
            text,
            styles,
        }
    }

    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = block_type;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn key(&self) -> BlockKey {
        self.key
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        (offset < self.len()).then(|| self.text.char(offset))
    }

    pub fn style_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    /// Collapse the per-character styles into runs
    pub fn style_runs(&self) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::new();
        for (offset, styles) in self.styles.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.styles == *styles => run.end = offset + 1,
                _ => runs.push(StyleRun {
                    start: offset,
                    end: offset + 1,
                    styles: styles.clone(),
                }),
            }
        }
        runs
    }

    pub(crate) fn set_type(&mut self, block_type: BlockType) {
        self.block_type = block_type;
    }

    pub(crate) fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Insert `text` at `offset`, giving every new character `style`
    pub(crate) fn insert(&mut self, offset: usize, text: &str, style: &StyleSet) {
        let offset = offset.min(self.len());
        let before = self.len();
        self.text.insert(offset, text);
        let added = self.text.len_chars() - before;
        self.styles
            .splice(offset..offset, std::iter::repeat(style.clone()).take(added));
    }

    pub(crate) fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        if start == end {
            return;
        }
        self.text.remove(start..end);
        self.styles.drain(start..end);
    }

    /// Split at `offset`; the tail becomes a new block with `key` that keeps
    /// this block's type and depth
    pub(crate) fn split_off(&mut self, offset: usize, key: BlockKey) -> ContentBlock {
        let offset = offset.min(self.len());
        let text = self.text.split_off(offset);
        let styles = self.styles.split_off(offset);
        ContentBlock {
            key,
            block_type: self.block_type.clone(),
            depth: self.depth,
            text,
            styles,
        }
    }

    pub(crate) fn append(&mut self, other: &ContentBlock) {
        self.text.append(other.text.clone());
        self.styles.extend(other.styles.iter().cloned());
    }

    /// Add or remove `style` on every character in `range`.
    /// Returns whether any character changed.
    pub(crate) fn apply_style(
        &mut self,
        range: Range<usize>,
        style: &super::style::InlineStyle,
        add: bool,
    ) -> bool {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let mut changed = false;
        for set in &mut self.styles[start..end] {
            changed |= if add {
                set.insert(style.clone())
            } else {
                set.remove(style)
            };
        }
        changed
    }
}

/// The full ordered block list of a document
#[derive(Debug, Clone)]
pub struct ContentState {
    blocks: Vec<Arc<ContentBlock>>,
    next_key: u32,
}

impl PartialEq for ContentState {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl ContentState {
    /// A document with a single empty unstyled block
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// One unstyled block per line of `text`
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<(BlockType, &str)> =
            text.split('\n').map(|line| (BlockType::UNSTYLED, line)).collect();
        Self::from_typed_blocks(&lines)
    }

    /// Build content from `(type, text)` pairs.
    ///
    /// An empty slice yields an empty block map; queries on such content
    /// return `None` and transforms leave it untouched.
    pub fn from_typed_blocks(blocks: &[(BlockType, &str)]) -> Self {
        let blocks: Vec<Arc<ContentBlock>> = blocks
            .iter()
            .enumerate()
            .map(|(idx, (block_type, text))| {
                Arc::new(ContentBlock::new(BlockKey(idx as u32), text).with_type(block_type.clone()))
            })
            .collect();
        let next_key = blocks.len() as u32;
        Self { blocks, next_key }
    }

    pub fn blocks(&self) -> impl Iterator<Item = &ContentBlock> {
        self.blocks.iter().map(|b| b.as_ref())
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn block_at(&self, idx: usize) -> Option<&ContentBlock> {
        self.blocks.get(idx).map(|b| b.as_ref())
    }

    pub fn first_block(&self) -> Option<&ContentBlock> {
        self.block_at(0)
    }

    pub fn last_block(&self) -> Option<&ContentBlock> {
        self.blocks.last().map(|b| b.as_ref())
    }

    pub fn index_of(&self, key: BlockKey) -> Option<usize> {
        self.blocks.iter().position(|b| b.key == key)
    }

    pub fn block_for_key(&self, key: BlockKey) -> Option<&ContentBlock> {
        self.index_of(key).and_then(|idx| self.block_at(idx))
    }

    pub fn block_before(&self, key: BlockKey) -> Option<&ContentBlock> {
        let idx = self.index_of(key)?;
        idx.checked_sub(1).and_then(|prev| self.block_at(prev))
    }

    pub fn block_after(&self, key: BlockKey) -> Option<&ContentBlock> {
        let idx = self.index_of(key)?;
        self.block_at(idx + 1)
    }

    /// True once the document holds any character or more than one block
    ///
    /// Zero-width spaces in a lone block do not count.
    pub fn has_text(&self) -> bool {
        self.blocks.len() > 1
            || self
                .blocks
                .first()
                .is_some_and(|b| b.text().chars().any(|c| c != ZERO_WIDTH_SPACE))
    }

    /// Block texts joined with newlines
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether both trees hold the very same allocation for block `key`
    pub fn shares_block(&self, other: &ContentState, key: BlockKey) -> bool {
        match (self.index_of(key), other.index_of(key)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&self.blocks[a], &other.blocks[b]),
            _ => false,
        }
    }

    pub(crate) fn allocate_key(&mut self) -> BlockKey {
        let key = BlockKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Copy-on-write access to the block at `idx`
    pub(crate) fn update_block(&mut self, idx: usize, f: impl FnOnce(&mut ContentBlock)) {
        if let Some(block) = self.blocks.get_mut(idx) {
            f(Arc::make_mut(block));
        }
    }

    pub(crate) fn insert_block(&mut self, idx: usize, block: ContentBlock) {
        let idx = idx.min(self.blocks.len());
        self.blocks.insert(idx, Arc::new(block));
    }

    pub(crate) fn remove_blocks(&mut self, range: Range<usize>) {
        let end = range.end.min(self.blocks.len());
        let start = range.start.min(end);
        self.blocks.drain(start..end);
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::style::InlineStyle;

    #[test]
    fn test_empty_has_single_unstyled_block() {
        let content = ContentState::empty();
        assert_eq!(content.block_count(), 1);
        assert_eq!(
            content.first_block().map(|b| b.block_type().clone()),
            Some(BlockType::UNSTYLED)
        );
        assert!(!content.has_text());
    }

    #[test]
    fn test_zero_width_space_is_not_text() {
        let content = ContentState::from_text("\u{200B}\u{200B}");
        assert!(!content.has_text());

        let content = ContentState::from_text("\u{200B}a");
        assert!(content.has_text());
    }

    #[test]
    fn test_two_empty_blocks_count_as_text() {
        let content = ContentState::from_text("\n");
        assert_eq!(content.block_count(), 2);
        assert!(content.has_text());
    }

    #[test]
    fn test_insert_keeps_styles_parallel() {
        let mut block = ContentBlock::new(BlockKey::new(0), "held");
        let bold: StyleSet = [InlineStyle::BOLD].into_iter().collect();
        block.insert(2, "XY", &bold);
        assert_eq!(block.text(), "heXYld");
        assert_eq!(block.style_at(2), Some(&bold));
        assert_eq!(block.style_at(4), Some(&StyleSet::new()));
        assert_eq!(block.style_runs().len(), 3);
    }

    #[test]
    fn test_split_and_append_roundtrip() {
        let mut block = ContentBlock::new(BlockKey::new(0), "hello world").with_type(BlockType::BLOCKQUOTE);
        let tail = block.split_off(5, BlockKey::new(1));
        assert_eq!(block.text(), "hello");
        assert_eq!(tail.text(), " world");
        assert_eq!(tail.block_type(), &BlockType::BLOCKQUOTE);

        block.append(&tail);
        assert_eq!(block.text(), "hello world");
        assert_eq!(block.style_runs().len(), 1);
    }

    #[test]
    fn test_update_block_copies_only_touched_block() {
        let before = ContentState::from_text("one\ntwo");
        let mut after = before.clone();
        after.update_block(1, |b| b.set_type(BlockType::BLOCKQUOTE));

        assert!(after.shares_block(&before, BlockKey::new(0)));
        assert!(!after.shares_block(&before, BlockKey::new(1)));
        assert_ne!(after, before);
    }
}
