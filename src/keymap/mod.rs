//! Keyboard mapping
//!
//! - Maps keystrokes to named commands
//! - Platform-specific "cmd" modifier (Cmd on macOS, Ctrl elsewhere)
//! - User customization via YAML keymap files
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → classify() → KeyCommand::Named / PassThrough
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults plus local and user overrides
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! ```

mod binding;
mod classifier;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use classifier::{classify, KeyCommand};
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, default_keymap_yaml, load_default_keymap, load_keymap_with_override,
    merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
