//! richedit - control layer for a rich-text input widget
//!
//! Owns the live document value and turns keystrokes, named commands and
//! toolbar actions into document transitions, following the Elm
//! Architecture: [`Msg`] in, [`update`](update::update), [`Cmd`] out.

pub mod command;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod script;
pub mod toolbar;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use command::NamedCommand;
pub use commands::Cmd;
pub use config::EditorConfig;
pub use controller::{EditorController, HandleValue};
pub use keymap::KeyCommand;
pub use messages::Msg;
pub use model::{DocumentModel, EditorState, RichDocumentModel};
