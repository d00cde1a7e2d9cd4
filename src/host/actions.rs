//! Registry of named host actions

use std::collections::HashMap;

use super::{HostAction, HostCommands};

/// Host commands keyed by id, e.g. `app:toggle-left-sidebar`.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn HostAction>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the action for `id`
    pub fn register(&mut self, id: impl Into<String>, action: impl HostAction + 'static) {
        self.actions.insert(id.into(), Box::new(action));
    }

    /// Remove the action for `id`, returning whether one existed
    pub fn unregister(&mut self, id: &str) -> bool {
        self.actions.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.ids())
            .finish()
    }
}

impl HostCommands for ActionRegistry {
    fn find(&mut self, id: &str) -> Option<&mut dyn HostAction> {
        let action: &mut dyn HostAction = self.actions.get_mut(id)?.as_mut();
        Some(action)
    }
}
