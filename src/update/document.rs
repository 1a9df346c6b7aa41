//! Key and command handling for the document
//!
//! Commands the controller leaves unhandled fall through to the document
//! model's own editing pipeline, the same path a host's native input would
//! take.

use crate::command::NamedCommand;
use crate::commands::Cmd;
use crate::controller::{CommandOutcome, EditorController};
use crate::keymap::{KeyCommand, Keystroke};
use crate::model::{editing, SelectionState};

/// Classify a keystroke and act on it
pub fn handle_key(controller: &mut EditorController, keystroke: &Keystroke) -> Option<Cmd> {
    match controller.classify_key(keystroke) {
        KeyCommand::Named(command) => handle_command(controller, &command),
        KeyCommand::PassThrough => {
            if keystroke.is_tab() {
                return None;
            }
            if let Some(text) = keystroke.text() {
                insert_text(controller, &text);
            }
            None
        }
    }
}

/// Dispatch a named command, falling back to the editing pipeline
pub fn handle_command(controller: &mut EditorController, command: &NamedCommand) -> Option<Cmd> {
    match controller.handle_key_command(command) {
        CommandOutcome::Applied => None,
        CommandOutcome::Saved => Some(Cmd::Save),
        CommandOutcome::Unhandled => {
            match editing::handle_editor_command(controller.current_value(), command) {
                Some(next) => controller.apply_change(next),
                None => tracing::debug!(%command, "command ignored"),
            }
            None
        }
    }
}

pub(super) fn insert_text(controller: &mut EditorController, text: &str) {
    if text.is_empty() {
        return;
    }
    let next = editing::insert_text(controller.current_value(), text);
    controller.apply_change(next);
}

pub(super) fn select(controller: &mut EditorController, selection: SelectionState) {
    let next = editing::select(controller.current_value(), selection);
    controller.apply_change(next);
}

pub(super) fn select_all(controller: &mut EditorController) {
    let next = editing::select_all(controller.current_value());
    controller.apply_change(next);
}
