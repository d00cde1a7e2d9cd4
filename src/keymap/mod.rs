//! Configurable keyboard mapping
//!
//! Maps keystrokes to the shortcut commands:
//! - Platform-specific modifier handling (`cmd` is Cmd on macOS, Ctrl elsewhere)
//! - User customization via layered YAML keymap files
//! - Conditional bindings evaluated against the editor's selection
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup_with_context() → Command → Dispatcher
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults merged with project and user overrides
//! let keymap = Keymap::with_bindings(load_default_keymap());
//!
//! // Or a single YAML file
//! let keymap = Keymap::with_bindings(load_keymap_file(Path::new("keymap.yaml"))?);
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::{Command, CommandAction, SIDEBAR_TOGGLES};
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, get_user_config_path, load_default_keymap,
    load_layered_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
