//! Style tokens: block types, inline styles and per-character style sets

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A block-level style applied to a whole paragraph.
///
/// Block types are mutually exclusive: every block has exactly one.
/// Tokens are case-sensitive and compared by value, so a type built at
/// runtime from a config string equals the matching constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(Cow<'static, str>);

impl BlockType {
    pub const UNSTYLED: BlockType = BlockType::from_static("unstyled");
    pub const HEADER_ONE: BlockType = BlockType::from_static("header-one");
    pub const HEADER_TWO: BlockType = BlockType::from_static("header-two");
    pub const HEADER_THREE: BlockType = BlockType::from_static("header-three");
    pub const HEADER_FOUR: BlockType = BlockType::from_static("header-four");
    pub const HEADER_FIVE: BlockType = BlockType::from_static("header-five");
    pub const HEADER_SIX: BlockType = BlockType::from_static("header-six");
    pub const BLOCKQUOTE: BlockType = BlockType::from_static("blockquote");
    pub const UNORDERED_LIST_ITEM: BlockType = BlockType::from_static("unordered-list-item");
    pub const ORDERED_LIST_ITEM: BlockType = BlockType::from_static("ordered-list-item");
    pub const CODE_BLOCK: BlockType = BlockType::from_static("code-block");

    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// List items are the only blocks that carry a meaningful depth
    pub fn is_list_item(&self) -> bool {
        *self == Self::UNORDERED_LIST_ITEM || *self == Self::ORDERED_LIST_ITEM
    }
}

impl Default for BlockType {
    fn default() -> Self {
        Self::UNSTYLED
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BlockType {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for BlockType {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// A character-level style. Any number may be active on a run at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineStyle(Cow<'static, str>);

impl InlineStyle {
    pub const BOLD: InlineStyle = InlineStyle::from_static("BOLD");
    pub const ITALIC: InlineStyle = InlineStyle::from_static("ITALIC");
    pub const UNDERLINE: InlineStyle = InlineStyle::from_static("UNDERLINE");
    pub const CODE: InlineStyle = InlineStyle::from_static("CODE");
    pub const STRIKETHROUGH: InlineStyle = InlineStyle::from_static("STRIKETHROUGH");

    pub const fn from_static(token: &'static str) -> Self {
        Self(Cow::Borrowed(token))
    }

    pub fn new(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for InlineStyle {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for InlineStyle {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// The set of inline styles carried by a single character
pub type StyleSet = BTreeSet<InlineStyle>;

/// Return `set` with `style` flipped
pub fn toggled(set: &StyleSet, style: &InlineStyle) -> StyleSet {
    let mut next = set.clone();
    if !next.remove(style) {
        next.insert(style.clone());
    }
    next
}
