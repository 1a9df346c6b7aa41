//! Default keybindings for the editor
//!
//! The embedded keymap.yaml is the source of truth; `default_bindings`
//! mirrors it for callers that must not touch the filesystem.

use std::path::Path;

use crate::command::NamedCommand;
use crate::config_paths;

use super::binding::Keybinding;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. keymap.yaml in the current directory
/// 3. User keymap at ~/.config/richedit/keymap.yaml
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    let local = Path::new("keymap.yaml");
    if local.exists() {
        bindings = merge_layer(bindings, local);
    }

    if let Some(user_path) = config_paths::keymap_file() {
        if user_path.exists() {
            bindings = merge_layer(bindings, &user_path);
        }
    }

    bindings
}

/// Load an explicit keymap file on top of the embedded defaults
pub fn load_keymap_with_override(path: &Path) -> Result<Vec<Keybinding>, super::KeymapError> {
    let overrides = load_keymap_file(path)?;
    let base = parse_keymap_yaml(DEFAULT_KEYMAP_YAML).unwrap_or_else(|_| default_bindings());
    Ok(merge_bindings(base, overrides))
}

fn merge_layer(bindings: Vec<Keybinding>, path: &Path) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(layer) => {
            tracing::info!(
                "Merging keymap from {} ({} bindings)",
                path.display(),
                layer.len()
            );
            merge_bindings(bindings, layer)
        }
        Err(e) => {
            tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
            bindings
        }
    }
}

/// Merge override bindings into base bindings
///
/// - same keystroke → replaces the base binding
/// - command `unbound` → removes base bindings for that keystroke
/// - otherwise → appended
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.is_unbind() {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        match result.iter().position(|b| b.keystroke == binding.keystroke) {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let shift = Modifiers::SHIFT;
    let alt = Modifiers::ALT;
    let none = Modifiers::NONE;

    let mut bindings = vec![
        bind(KeyCode::Char('s'), cmd, NamedCommand::SAVE),
        // Inline styles
        bind(KeyCode::Char('b'), cmd, NamedCommand::BOLD),
        bind(KeyCode::Char('i'), cmd, NamedCommand::ITALIC),
        bind(KeyCode::Char('u'), cmd, NamedCommand::UNDERLINE),
        bind(KeyCode::Char('j'), cmd, NamedCommand::CODE),
        // History
        bind(KeyCode::Char('z'), cmd, NamedCommand::UNDO),
        bind(KeyCode::Char('z'), cmd_shift, NamedCommand::REDO),
        // Blocks
        bind(KeyCode::Enter, none, NamedCommand::SPLIT_BLOCK),
        bind(KeyCode::Enter, shift, NamedCommand::SPLIT_BLOCK),
        bind(KeyCode::Char('m'), Modifiers::CTRL, NamedCommand::SPLIT_BLOCK),
        // Deletion
        bind(KeyCode::Backspace, none, NamedCommand::BACKSPACE),
        bind(KeyCode::Backspace, alt, NamedCommand::BACKSPACE_WORD),
        bind(KeyCode::Delete, none, NamedCommand::DELETE),
        bind(KeyCode::Delete, alt, NamedCommand::DELETE_WORD),
    ];

    #[cfg(target_os = "macos")]
    bindings.push(bind(
        KeyCode::Backspace,
        cmd,
        NamedCommand::BACKSPACE_TO_START_OF_LINE,
    ));

    #[cfg(not(target_os = "macos"))]
    bindings.push(bind(KeyCode::Char('y'), Modifiers::CTRL, NamedCommand::REDO));

    bindings
}

/// The embedded default keymap YAML
pub fn default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

fn bind(key: KeyCode, mods: Modifiers, command: NamedCommand) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
