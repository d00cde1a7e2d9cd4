//! Default keybindings
//!
//! The shipped bindings live in keymap.yaml at the project root and are embedded
//! at compile time. A hardcoded copy backs them up if the embedded file ever
//! fails to parse.

use std::path::{Path, PathBuf};

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// The user's keymap file, `~/.config/editor-shortcuts/keymap.yaml` on Unix
pub fn get_user_config_path() -> Option<PathBuf> {
    crate::config_paths::keymap_file()
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. keymap.yaml in current directory (project-local overrides)
/// 3. User config at ~/.config/editor-shortcuts/keymap.yaml
///
/// Bindings with `command: Unbound` remove matching bindings from earlier layers.
pub fn load_default_keymap() -> Vec<Keybinding> {
    load_layered_keymap(Path::new("keymap.yaml"), get_user_config_path().as_deref())
}

/// Embedded defaults merged with the project and user files, when present
pub fn load_layered_keymap(project: &Path, user: Option<&Path>) -> Vec<Keybinding> {
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

    for path in std::iter::once(project).chain(user) {
        if !path.exists() {
            continue;
        }
        match load_keymap_file(path) {
            Ok(layer) => {
                tracing::info!(
                    "Merging keymap from {} ({} bindings)",
                    path.display(),
                    layer.len()
                );
                bindings = merge_bindings(bindings, layer);
            }
            Err(e) => {
                tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
            }
        }
    }

    bindings
}

/// Merge override bindings into base bindings
///
/// - Same keystroke and conditions as a base binding: replaces it
/// - Command is `Unbound`: removes every base binding on that keystroke
/// - Otherwise the binding is added
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != binding.keystroke);
            continue;
        }

        match result.iter().position(|b| b.overrides(&binding)) {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded default keybindings, identical to the embedded keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let alt = Modifiers::ALT;
    let ctrl = Modifiers::CTRL;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;

    vec![
        bind(KeyCode::Backspace, ctrl_shift, Command::DeleteLine),
        bind(KeyCode::Up, alt, Command::MoveLineUp),
        bind(KeyCode::Down, alt, Command::MoveLineDown),
        bind(KeyCode::Char('d'), alt, Command::DuplicateLine),
        bind(KeyCode::Char('b'), ctrl, Command::ToggleBothSidebars),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
