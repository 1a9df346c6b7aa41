//! Command-line argument parsing
//!
//! Supports:
//! - Replaying a key script from a file or stdin
//! - Explicit config and keymap files
//! - JSON state dump

use clap::Parser;
use std::path::PathBuf;

/// Replay a key script through the rich-text editor core
#[derive(Parser, Debug)]
#[command(
    name = "richedit",
    version,
    about = "Replay a key script through the rich-text editor core"
)]
pub struct CliArgs {
    /// Key script to replay; reads stdin when omitted or "-"
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Editor config file (defaults to ~/.config/richedit/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keymap file merged over the built-in bindings
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Print the final state as JSON
    #[arg(long)]
    pub dump: bool,
}

impl CliArgs {
    /// Script path, or `None` for stdin
    pub fn script_path(&self) -> Option<&PathBuf> {
        self.script
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_reads_stdin() {
        let args = CliArgs::try_parse_from(["richedit"]).unwrap();
        assert!(args.script_path().is_none());
        assert!(!args.dump);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let args = CliArgs::try_parse_from(["richedit", "-"]).unwrap();
        assert!(args.script_path().is_none());
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::try_parse_from([
            "richedit",
            "demo.keys",
            "--config",
            "c.yaml",
            "-k",
            "k.yaml",
            "--dump",
        ])
        .unwrap();
        assert_eq!(args.script_path(), Some(&PathBuf::from("demo.keys")));
        assert_eq!(args.config, Some(PathBuf::from("c.yaml")));
        assert_eq!(args.keymap, Some(PathBuf::from("k.yaml")));
        assert!(args.dump);
    }
}
