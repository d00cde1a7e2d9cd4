//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`; one keystroke may carry several conditional bindings
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Look up a keystroke, ignoring conditional bindings
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    /// Look up a keystroke with context for conditional bindings
    ///
    /// Conditional bindings whose conditions hold win over unconditional ones.
    /// Without a context, only unconditional bindings match.
    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;

        if let Some(ctx) = context {
            let conditional = indices.iter().map(|&i| &self.bindings[i]).find(|b| {
                b.when
                    .as_deref()
                    .is_some_and(|conds| Condition::evaluate_all(conds, ctx))
            });
            if let Some(binding) = conditional {
                return Some(binding.command);
            }
        }

        indices
            .iter()
            .map(|&i| &self.bindings[i])
            .find(|b| b.when.is_none())
            .map(|b| b.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Get the keybinding for a command (first match)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Every keystroke bound to `command`, in binding order
    pub fn keystrokes_for(&self, command: Command) -> Vec<Keystroke> {
        self.bindings
            .iter()
            .filter(|b| b.command == command)
            .map(|b| b.keystroke)
            .collect()
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn alt_up() -> Keystroke {
        Keystroke::new(KeyCode::Up, Modifiers::ALT)
    }

    fn alt_d() -> Keystroke {
        Keystroke::new(KeyCode::Char('d'), Modifiers::ALT)
    }

    fn ctrl_b() -> Keystroke {
        Keystroke::new(KeyCode::Char('b'), Modifiers::CTRL)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(alt_up(), Command::MoveLineUp)]);

        assert_eq!(keymap.lookup(&alt_up()), Some(Command::MoveLineUp));
        assert_eq!(keymap.lookup(&ctrl_b()), None);
    }

    #[test]
    fn test_conditional_binding_preferred_when_it_holds() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(alt_d(), Command::DuplicateLine),
            Keybinding::new(alt_d(), Command::DeleteLine).when(vec![Condition::HasSelection]),
        ]);

        let caret = KeyContext::default();
        let selected = KeyContext {
            has_selection: true,
            ..KeyContext::default()
        };

        assert_eq!(
            keymap.lookup_with_context(&alt_d(), Some(&caret)),
            Some(Command::DuplicateLine)
        );
        assert_eq!(
            keymap.lookup_with_context(&alt_d(), Some(&selected)),
            Some(Command::DeleteLine)
        );
        // Without context conditional bindings are skipped
        assert_eq!(keymap.lookup(&alt_d()), Some(Command::DuplicateLine));
    }

    #[test]
    fn test_only_conditional_binding_without_context() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(alt_d(), Command::DuplicateLine).when(vec![Condition::NoSelection])
        ]);
        assert_eq!(keymap.lookup(&alt_d()), None);
        assert_eq!(
            keymap.lookup_with_context(&alt_d(), Some(&KeyContext::default())),
            Some(Command::DuplicateLine)
        );
    }

    #[test]
    fn test_binding_for_command() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(alt_up(), Command::MoveLineUp),
            Keybinding::new(ctrl_b(), Command::ToggleBothSidebars),
            Keybinding::new(alt_d(), Command::ToggleBothSidebars),
        ]);

        let binding = keymap.binding_for(Command::ToggleBothSidebars);
        assert_eq!(binding.map(|b| b.keystroke), Some(ctrl_b()));
        assert_eq!(
            keymap.keystrokes_for(Command::ToggleBothSidebars),
            vec![ctrl_b(), alt_d()]
        );
        assert!(keymap.binding_for(Command::DeleteLine).is_none());
    }

    #[test]
    fn test_display_for_command() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_b(), Command::ToggleBothSidebars)]);

        let display = keymap.display_for(Command::ToggleBothSidebars).unwrap();
        assert!(display.contains('B'));
    }
}
