//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;

use crate::commands::Cmd;
use crate::controller::EditorController;
use crate::messages::Msg;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::{handle_command, handle_key};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(controller: &mut EditorController, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(controller, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(controller, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(controller: &mut EditorController, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Key(keystroke) => document::handle_key(controller, &keystroke),
        Msg::Command(command) => document::handle_command(controller, &command),
        Msg::InsertText(text) => {
            document::insert_text(controller, &text);
            None
        }
        Msg::Select(selection) => {
            document::select(controller, selection);
            None
        }
        Msg::SelectAll => {
            document::select_all(controller);
            None
        }
        Msg::Change(next) => {
            controller.apply_change(next);
            None
        }
        Msg::ToggleBlockType(block_type) => {
            controller.toggle_block_style(&block_type);
            None
        }
        Msg::ToggleInlineStyle(style) => {
            controller.toggle_inline_style(&style);
            None
        }
        Msg::ContainerClicked => Some(Cmd::FocusEditor),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document state and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(controller: &mut EditorController, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_state(controller.current_value());
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(controller, msg);

    let after = StateSnapshot::from_state(controller.current_value());
    if let Some(diff) = before.diff(&after) {
        debug!(target: "state", %diff, revision = controller.revision(), "state changed");
    }
    if let Some(ref cmd) = result {
        debug!(target: "message", ?cmd, "emitted");
    }

    result
}

/// Display name for a message, without bulky payloads
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Key(k) => format!("Key({})", k),
        Msg::Command(c) => format!("Command({})", c),
        Msg::InsertText(t) => format!("InsertText({:?})", t),
        Msg::Select(_) => "Select".to_string(),
        Msg::SelectAll => "SelectAll".to_string(),
        Msg::Change(_) => "Change".to_string(),
        Msg::ToggleBlockType(t) => format!("ToggleBlockType({})", t),
        Msg::ToggleInlineStyle(s) => format!("ToggleInlineStyle({})", s),
        Msg::ContainerClicked => "ContainerClicked".to_string(),
    }
}
