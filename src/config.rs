//! Editor configuration
//!
//! Stores user preferences in `~/.config/richedit/config.yaml`:
//!
//! ```yaml
//! placeholder: "Write here..."
//! max_tab_depth: 4
//! save_command: save
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::command::NamedCommand;

/// Deepest list nesting reachable with Tab by default
pub const DEFAULT_MAX_TAB_DEPTH: u8 = 4;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("no config directory available")]
    NoConfigDir,
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Text shown while the document is empty
    pub placeholder: String,
    /// Tab / Shift+Tab list depth bound
    pub max_tab_depth: u8,
    /// Command token reserved for the host's save action
    pub save_command: NamedCommand,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: "Say something...".to_string(),
            max_tab_depth: DEFAULT_MAX_TAB_DEPTH,
            save_command: NamedCommand::SAVE,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    /// Parse config from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.save_command.is_blank() {
            return Err(ConfigError::Parse("save_command must not be empty".into()));
        }
        Ok(config)
    }

    /// Save config to an explicit file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(io_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the user config file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }
}
