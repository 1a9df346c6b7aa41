//! Style toggles driven by toolbar controls

use crate::model::{BlockType, DocumentModel, InlineStyle};

use super::EditorController;

impl<M: DocumentModel> EditorController<M> {
    /// Toggle a block type on every block touched by the selection
    pub fn toggle_block_style(&mut self, block_type: &BlockType) {
        let next = self.model.toggle_block_type(&self.value, block_type);
        tracing::debug!(%block_type, "toggle block style");
        self.apply_change(next);
    }

    /// Toggle an inline style on the selection, or on the pending style at a
    /// collapsed cursor
    pub fn toggle_inline_style(&mut self, style: &InlineStyle) {
        let next = self.model.toggle_inline_style(&self.value, style);
        tracing::debug!(%style, "toggle inline style");
        self.apply_change(next);
    }
}
