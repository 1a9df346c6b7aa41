//! Toolbar controls
//!
//! Button descriptors for the block and inline style toolbars. A button is
//! `active` when its style applies at the selection, so the host can
//! highlight it.

use serde::Serialize;

use crate::controller::EditorController;
use crate::model::{BlockType, DocumentModel, InlineStyle};

/// A labelled style a toolbar button toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleControl<S> {
    pub label: &'static str,
    pub style: S,
}

pub const BLOCK_TYPES: &[StyleControl<BlockType>] = &[
    StyleControl { label: "H1", style: BlockType::HEADER_ONE },
    StyleControl { label: "H2", style: BlockType::HEADER_TWO },
    StyleControl { label: "H3", style: BlockType::HEADER_THREE },
    StyleControl { label: "H4", style: BlockType::HEADER_FOUR },
    StyleControl { label: "H5", style: BlockType::HEADER_FIVE },
    StyleControl { label: "H6", style: BlockType::HEADER_SIX },
    StyleControl { label: "Blockquote", style: BlockType::BLOCKQUOTE },
    StyleControl { label: "UL", style: BlockType::UNORDERED_LIST_ITEM },
    StyleControl { label: "OL", style: BlockType::ORDERED_LIST_ITEM },
    StyleControl { label: "Code Block", style: BlockType::CODE_BLOCK },
];

pub const INLINE_STYLES: &[StyleControl<InlineStyle>] = &[
    StyleControl { label: "Bold", style: InlineStyle::BOLD },
    StyleControl { label: "Italic", style: InlineStyle::ITALIC },
    StyleControl { label: "Underline", style: InlineStyle::UNDERLINE },
    StyleControl { label: "Monospace", style: InlineStyle::CODE },
];

/// A button as the host renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarButton<S> {
    pub label: &'static str,
    pub style: S,
    pub active: bool,
}

/// Block style buttons; the one matching the selection's block is active
pub fn block_controls<M: DocumentModel>(
    controller: &EditorController<M>,
) -> Vec<ToolbarButton<BlockType>> {
    let current = controller.current_block_type();
    BLOCK_TYPES
        .iter()
        .map(|control| ToolbarButton {
            label: control.label,
            style: control.style.clone(),
            active: current.as_ref() == Some(&control.style),
        })
        .collect()
}

/// Inline style buttons; each is active when the next typed character
/// would carry its style
pub fn inline_controls<M: DocumentModel>(
    controller: &EditorController<M>,
) -> Vec<ToolbarButton<InlineStyle>> {
    let current = controller.current_inline_style();
    INLINE_STYLES
        .iter()
        .map(|control| ToolbarButton {
            label: control.label,
            style: control.style.clone(),
            active: current.contains(&control.style),
        })
        .collect()
}

/// Extra container class a host applies to blocks of this type
pub fn block_style_class(block_type: &BlockType) -> Option<&'static str> {
    if *block_type == BlockType::BLOCKQUOTE {
        Some("RichEditor-blockquote")
    } else {
        None
    }
}
