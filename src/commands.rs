//! Command registration table
//!
//! Everything a host needs to register the shortcuts: stable id, palette name,
//! icon and the hotkeys currently bound in the keymap, expressed in the host's
//! modifier/key vocabulary.

use std::fmt;

use crate::keymap::{Command, Keymap, Keystroke};

/// A hotkey in the host's vocabulary, e.g. `{ modifiers: ["Alt"], key: "ArrowUp" }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    pub modifiers: Vec<&'static str>,
    pub key: String,
}

impl From<Keystroke> for Hotkey {
    fn from(stroke: Keystroke) -> Self {
        Self {
            modifiers: stroke.mods.host_names(),
            key: stroke.key.host_name(),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", m)?;
        }
        write!(f, "{}", self.key)
    }
}

/// One command as the host registers it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    pub command: Command,
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub hotkeys: Vec<Hotkey>,
}

impl CommandDef {
    pub fn new(command: Command, keymap: &Keymap) -> Self {
        Self {
            command,
            id: command.id(),
            name: command.display_name(),
            icon: command.icon(),
            hotkeys: keymap
                .keystrokes_for(command)
                .into_iter()
                .map(Hotkey::from)
                .collect(),
        }
    }
}

/// Registration entries for every command, in registration order
pub fn registrations(keymap: &Keymap) -> Vec<CommandDef> {
    Command::ALL
        .into_iter()
        .map(|command| CommandDef::new(command, keymap))
        .collect()
}
