//! Contract with the host editor.
//!
//! The line operations never touch a live buffer. The dispatcher reads a
//! snapshot through [`Editor`] (which is also a [`TextBuffer`]) and applies the
//! resulting plan through its mutation methods. Application-level commands such
//! as the sidebar toggles are reached through [`HostCommands`], an optional
//! capability lookup: a missing command is `None`, never a crash.

mod actions;
mod memory;

use crate::editable::{CursorEnd, Position, Selection, TextBuffer, TransactionLabel};

pub use actions::ActionRegistry;
pub use memory::MemoryEditor;

/// Editing surface the host exposes for the duration of one command.
pub trait Editor: TextBuffer {
    /// Read one end of the primary selection
    fn cursor(&self, which: CursorEnd) -> Position;

    /// Current anchor/head pair
    fn selection(&self) -> Selection {
        Selection::new(self.cursor(CursorEnd::Anchor), self.cursor(CursorEnd::Head))
    }

    /// Replace the text between `from` and `to`, tagged for undo grouping
    fn replace_range(&mut self, text: &str, from: Position, to: Position, label: TransactionLabel);

    /// Collapse the selection to a caret
    fn set_cursor(&mut self, pos: Position);

    /// Set an anchor/head selection
    fn set_selection(&mut self, anchor: Position, head: Position);

    /// Close the edit group opened by the preceding `replace_range` calls.
    ///
    /// Hosts that group by label alone can ignore this.
    fn commit_transaction(&mut self) {}
}

/// An invokable host action
pub trait HostAction {
    fn invoke(&mut self);
}

impl<F: FnMut()> HostAction for F {
    fn invoke(&mut self) {
        self()
    }
}

/// Lookup of host application commands by their string id.
pub trait HostCommands {
    /// The action registered under `id`, if the host has one
    fn find(&mut self, id: &str) -> Option<&mut dyn HostAction>;
}

/// Host with no application commands at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHostCommands;

impl HostCommands for NoHostCommands {
    fn find(&mut self, _id: &str) -> Option<&mut dyn HostAction> {
        None
    }
}
