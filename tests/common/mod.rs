//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use richedit::keymap::{KeyCode, Keystroke, Modifiers};
use richedit::messages::Msg;
use richedit::model::{
    BlockType, ContentState, DocumentModel, EditorState, IndentDirection, InlineStyle, StyleSet,
};
use richedit::update::update;
use richedit::{Cmd, EditorController, NamedCommand};

/// A controller whose document holds `text` (one block per line), caret at
/// the start
pub fn controller_with_text(text: &str) -> EditorController {
    let mut controller = EditorController::default();
    controller.apply_change(EditorState::create_with_content(ContentState::from_text(
        text,
    )));
    controller
}

/// A controller whose document holds typed blocks, caret at the start
pub fn controller_with_blocks(blocks: &[(BlockType, &str)]) -> EditorController {
    let mut controller = EditorController::default();
    controller.apply_change(EditorState::create_with_content(
        ContentState::from_typed_blocks(blocks),
    ));
    controller
}

/// Send messages in order, collecting emitted commands
pub fn run(controller: &mut EditorController, msgs: Vec<Msg>) -> Vec<Cmd> {
    msgs.into_iter()
        .filter_map(|msg| update(controller, msg))
        .collect()
}

pub fn type_text(controller: &mut EditorController, text: &str) {
    update(controller, Msg::InsertText(text.to_string()));
}

pub fn press(controller: &mut EditorController, key: KeyCode, mods: Modifiers) -> Option<Cmd> {
    update(controller, Msg::Key(Keystroke::new(key, mods)))
}

pub fn press_cmd(controller: &mut EditorController, c: char) -> Option<Cmd> {
    press(controller, KeyCode::Char(c), Modifiers::cmd())
}

pub fn block_texts(controller: &EditorController) -> Vec<String> {
    controller
        .current_value()
        .content()
        .blocks()
        .map(|b| b.text())
        .collect()
}

pub fn block_types(controller: &EditorController) -> Vec<BlockType> {
    controller
        .current_value()
        .content()
        .blocks()
        .map(|b| b.block_type().clone())
        .collect()
}

pub fn block_depths(controller: &EditorController) -> Vec<u8> {
    controller
        .current_value()
        .content()
        .blocks()
        .map(|b| b.depth())
        .collect()
}

// ============================================================================
// Recording document model
// ============================================================================

/// Minimal document value for [`RecordingModel`]; identity is `id`
#[derive(Debug, Clone, PartialEq)]
pub struct FakeDoc {
    pub id: u32,
    pub has_text: bool,
    pub first_block: Option<BlockType>,
}

impl FakeDoc {
    pub fn new(id: u32, has_text: bool, first_block: Option<BlockType>) -> Self {
        Self {
            id,
            has_text,
            first_block,
        }
    }
}

/// A document model that logs every call and claims a configurable set of
/// builtin commands
#[derive(Debug, Default)]
pub struct RecordingModel {
    pub claimed: Vec<NamedCommand>,
    pub calls: RefCell<Vec<String>>,
    next_id: Cell<u32>,
}

impl RecordingModel {
    pub fn claiming(claimed: &[&str]) -> Self {
        Self {
            claimed: claimed.iter().map(|c| NamedCommand::new(*c)).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn fresh(&self, like: &FakeDoc) -> FakeDoc {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        FakeDoc {
            id: 1000 + id,
            ..like.clone()
        }
    }
}

impl DocumentModel for RecordingModel {
    type Value = FakeDoc;

    fn create_empty(&self) -> FakeDoc {
        FakeDoc::new(0, false, Some(BlockType::UNSTYLED))
    }

    fn handle_builtin_command(&self, value: &FakeDoc, command: &NamedCommand) -> Option<FakeDoc> {
        self.record(format!("builtin:{}", command));
        self.claimed.contains(command).then(|| self.fresh(value))
    }

    fn handle_tab_indent(
        &self,
        value: &FakeDoc,
        direction: IndentDirection,
        max_depth: u8,
    ) -> FakeDoc {
        self.record(format!("tab:{:?}:{}", direction, max_depth));
        value.clone()
    }

    fn toggle_block_type(&self, value: &FakeDoc, block_type: &BlockType) -> FakeDoc {
        self.record(format!("block:{}", block_type));
        let mut next = self.fresh(value);
        next.first_block = if value.first_block.as_ref() == Some(block_type) {
            Some(BlockType::UNSTYLED)
        } else {
            Some(block_type.clone())
        };
        next
    }

    fn toggle_inline_style(&self, value: &FakeDoc, style: &InlineStyle) -> FakeDoc {
        self.record(format!("inline:{}", style));
        self.fresh(value)
    }

    fn has_text(&self, value: &FakeDoc) -> bool {
        value.has_text
    }

    fn first_block_type(&self, value: &FakeDoc) -> Option<BlockType> {
        value.first_block.clone()
    }

    fn selection_block_type(&self, value: &FakeDoc) -> Option<BlockType> {
        value.first_block.clone()
    }

    fn current_inline_style(&self, _value: &FakeDoc) -> StyleSet {
        StyleSet::new()
    }

    fn default_key_binding(&self, keystroke: &Keystroke) -> Option<NamedCommand> {
        self.record(format!("binding:{}", keystroke));
        let cmd = Modifiers::cmd();
        match keystroke.key {
            KeyCode::Char('b') if keystroke.mods == cmd => Some(NamedCommand::BOLD),
            KeyCode::Char('e') if keystroke.mods == cmd => Some(NamedCommand::new("")),
            _ => None,
        }
    }

    fn is_same(&self, a: &FakeDoc, b: &FakeDoc) -> bool {
        a.id == b.id
    }
}
