//! State dump for diagnostics
//!
//! Serializes a snapshot of the controller to JSON (`richedit --dump`).

use serde::Serialize;

use richedit::model::{BlockType, EditorState, InlineStyle, StyleRun};
use richedit::toolbar::{self, ToolbarButton};
use richedit::EditorController;

#[derive(Serialize)]
pub struct StateDump {
    pub revision: u64,
    pub placeholder: String,
    pub placeholder_visible: bool,
    pub blocks: Vec<BlockDump>,
    pub selection: SelectionDump,
    pub inline_style: Vec<String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub block_controls: Vec<ToolbarButton<BlockType>>,
    pub inline_controls: Vec<ToolbarButton<InlineStyle>>,
}

#[derive(Serialize)]
pub struct BlockDump {
    pub key: String,
    pub block_type: String,
    pub depth: u8,
    pub text: String,
    pub style_runs: Vec<StyleRun>,
}

#[derive(Serialize)]
pub struct SelectionDump {
    pub anchor: (String, usize),
    pub focus: (String, usize),
    pub is_collapsed: bool,
}

impl StateDump {
    pub fn from_controller(controller: &EditorController) -> Self {
        let state = controller.current_value();
        Self {
            revision: controller.revision(),
            placeholder: controller.placeholder().to_string(),
            placeholder_visible: controller.placeholder_visible(),
            blocks: block_dumps(state),
            selection: SelectionDump::from_state(state),
            inline_style: controller
                .current_inline_style()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            block_controls: toolbar::block_controls(controller),
            inline_controls: toolbar::inline_controls(controller),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

impl SelectionDump {
    fn from_state(state: &EditorState) -> Self {
        let selection = state.selection();
        Self {
            anchor: (selection.anchor().key.to_string(), selection.anchor().offset),
            focus: (selection.focus().key.to_string(), selection.focus().offset),
            is_collapsed: selection.is_collapsed(),
        }
    }
}

fn block_dumps(state: &EditorState) -> Vec<BlockDump> {
    state
        .content()
        .blocks()
        .map(|block| BlockDump {
            key: block.key().to_string(),
            block_type: block.block_type().to_string(),
            depth: block.depth(),
            text: block.text(),
            style_runs: block.style_runs(),
        })
        .collect()
}
