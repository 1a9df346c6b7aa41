//! Tracing setup and state-transition diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=richedit::controller=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/richedit/logs/richedit.log.YYYY-MM-DD`
//! with daily rotation. File logging uses debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{self, LOG_FILE_PREFIX};
use crate::model::{ChangeType, EditorState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of a document value for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub block_count: usize,
    pub char_count: usize,
    pub anchor: (String, usize),
    pub focus: (String, usize),
    pub block_type: Option<String>,
    pub inline_style: Vec<String>,
    pub last_change: Option<ChangeType>,
}

impl StateSnapshot {
    pub fn from_state(state: &EditorState) -> Self {
        let selection = state.selection();
        Self {
            block_count: state.content().block_count(),
            char_count: state.content().blocks().map(|b| b.len()).sum(),
            anchor: (
                selection.anchor().key.to_string(),
                selection.anchor().offset,
            ),
            focus: (selection.focus().key.to_string(), selection.focus().offset),
            block_type: state
                .selection_block()
                .map(|b| b.block_type().as_str().to_string()),
            inline_style: state
                .current_inline_style()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            last_change: state.last_change_type(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.block_count != other.block_count {
            changes.push(format!(
                "blocks: {} → {}",
                self.block_count, other.block_count
            ));
        }
        if self.char_count != other.char_count {
            changes.push(format!("chars: {} → {}", self.char_count, other.char_count));
        }
        if self.anchor != other.anchor || self.focus != other.focus {
            changes.push(format!(
                "selection: {}:{}..{}:{} → {}:{}..{}:{}",
                self.anchor.0,
                self.anchor.1,
                self.focus.0,
                self.focus.1,
                other.anchor.0,
                other.anchor.1,
                other.focus.0,
                other.focus.1
            ));
        }
        if self.block_type != other.block_type {
            changes.push(format!(
                "block type: {} → {}",
                self.block_type.as_deref().unwrap_or("-"),
                other.block_type.as_deref().unwrap_or("-")
            ));
        }
        if self.inline_style != other.inline_style {
            changes.push(format!(
                "inline: [{}] → [{}]",
                self.inline_style.join(","),
                other.inline_style.join(",")
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
