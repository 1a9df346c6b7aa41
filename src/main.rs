use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use richedit::commands::Cmd;
use richedit::config::EditorConfig;
use richedit::keymap::{load_default_keymap, load_keymap_with_override, Keymap};
use richedit::script::parse_script;
use richedit::toolbar;
use richedit::update::update;
use richedit::{EditorController, RichDocumentModel};

mod cli;
mod debug_dump;

use cli::CliArgs;
use debug_dump::StateDump;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    richedit::tracing::init();

    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EditorConfig::load(),
    };

    let bindings = match &args.keymap {
        Some(path) => load_keymap_with_override(path)
            .with_context(|| format!("loading keymap {}", path.display()))?,
        None => load_default_keymap(),
    };

    let model = RichDocumentModel::with_keymap(Keymap::with_bindings(bindings));
    let mut controller = EditorController::with_config(model, &config);

    let source = read_script(&args)?;
    let msgs = parse_script(&source).context("parsing key script")?;
    tracing::info!("replaying {} messages", msgs.len());

    let mut saves = 0usize;
    for msg in msgs {
        match update(&mut controller, msg) {
            Some(Cmd::Save) => {
                saves += 1;
                tracing::info!(revision = controller.revision(), "save requested");
            }
            Some(Cmd::FocusEditor) => tracing::debug!("focus requested"),
            None => {}
        }
    }

    if args.dump {
        println!("{}", StateDump::from_controller(&controller).to_json());
    } else {
        print_summary(&controller, saves);
    }

    Ok(())
}

fn read_script(args: &CliArgs) -> Result<String> {
    match args.script_path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("reading script from stdin")?;
            Ok(source)
        }
    }
}

fn print_summary(controller: &EditorController, saves: usize) {
    let state = controller.current_value();
    for block in state.content().blocks() {
        let indent = "  ".repeat(block.depth() as usize);
        println!("{}[{}] {}", indent, block.block_type(), block.text());
    }

    if controller.placeholder_visible() {
        println!("placeholder: {:?}", controller.placeholder());
    }

    let active: Vec<&str> = toolbar::block_controls(controller)
        .iter()
        .filter(|b| b.active)
        .map(|b| b.label)
        .chain(
            toolbar::inline_controls(controller)
                .iter()
                .filter(|b| b.active)
                .map(|b| b.label),
        )
        .collect();
    println!("active: {}", active.join(", "));
    println!("revision: {}, saves: {}", controller.revision(), saves);
}
