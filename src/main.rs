use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use editor_shortcuts::cli::{display_position, ApplyRequest, CliArgs, CliCommand};
use editor_shortcuts::commands::registrations;
use editor_shortcuts::config::ShortcutsConfig;
use editor_shortcuts::dispatch::{DispatchOutcome, Dispatcher};
use editor_shortcuts::host::{ActionRegistry, Editor, MemoryEditor};
use editor_shortcuts::keymap::{load_default_keymap, Keymap, SIDEBAR_TOGGLES};
use editor_shortcuts::line_ops::ColumnPolicy;

fn main() -> Result<()> {
    editor_shortcuts::tracing::init();

    let args = CliArgs::parse();
    let config = ShortcutsConfig::load();
    let keymap = Keymap::with_bindings(load_default_keymap());

    match args.command {
        CliCommand::Keys => {
            print_keys(&keymap);
            Ok(())
        }
        CliCommand::Apply(apply) => {
            let request = apply.into_request().map_err(anyhow::Error::msg)?;
            run_apply(request, config, keymap)
        }
    }
}

fn print_keys(keymap: &Keymap) {
    for def in registrations(keymap) {
        let hotkeys: Vec<String> = def.hotkeys.iter().map(|h| h.to_string()).collect();
        let hotkeys = if hotkeys.is_empty() {
            "(unbound)".to_string()
        } else {
            hotkeys.join(", ")
        };
        println!("{:<22} {:<24} {:<22} {}", def.id, def.name, def.icon, hotkeys);
    }
}

fn run_apply(request: ApplyRequest, mut config: ShortcutsConfig, keymap: Keymap) -> Result<()> {
    if request.preserve_column {
        config.column_policy = ColumnPolicy::Preserve;
    }

    let text = fs::read_to_string(&request.file)
        .with_context(|| format!("Failed to read {}", request.file.display()))?;
    let mut editor = MemoryEditor::with_selection(&text, request.selection);

    // No real sidebars here; report what would have been toggled
    let mut host = ActionRegistry::new();
    for &id in SIDEBAR_TOGGLES {
        host.register(id, move || eprintln!("host command: {}", id));
    }

    let dispatcher = Dispatcher::new(&config, keymap);
    let outcome = dispatcher
        .execute(request.command, &mut editor, &mut host)
        .with_context(|| format!("Failed to run {}", request.command.id()))?;

    match outcome {
        DispatchOutcome::Edited { label, replacements } => {
            tracing::info!(%label, replacements, "applied {}", request.command.id());
        }
        DispatchOutcome::Unchanged => eprintln!("{}: nothing to do", request.command.id()),
        DispatchOutcome::HostCommands { .. } => {}
    }

    let selection = editor.selection();
    if selection.is_empty() {
        eprintln!("cursor: {}", display_position(selection.head));
    } else {
        eprintln!(
            "selection: {} -> {}",
            display_position(selection.anchor),
            display_position(selection.head)
        );
    }

    if request.write {
        fs::write(&request.file, editor.text())
            .with_context(|| format!("Failed to write {}", request.file.display()))?;
    } else {
        print!("{}", editor.text());
    }

    Ok(())
}
