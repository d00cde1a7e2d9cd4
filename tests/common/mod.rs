//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use editor_shortcuts::dispatch::{DispatchOutcome, Dispatcher};
use editor_shortcuts::host::{ActionRegistry, Editor, MemoryEditor, NoHostCommands};
use editor_shortcuts::keymap::{default_bindings, Command, Keymap};
use editor_shortcuts::{ColumnPolicy, Position, Selection, ShortcutsConfig};

/// Editor over `lines` joined with `\n`, caret at (line, column)
pub fn test_editor(lines: &[&str], line: usize, column: usize) -> MemoryEditor {
    MemoryEditor::with_selection(
        &lines.join("\n"),
        Selection::collapsed(Position::new(line, column)),
    )
}

/// Editor with a selection from anchor to head
pub fn test_editor_with_selection(
    lines: &[&str],
    anchor_line: usize,
    anchor_col: usize,
    head_line: usize,
    head_col: usize,
) -> MemoryEditor {
    MemoryEditor::with_selection(
        &lines.join("\n"),
        Selection::new(
            Position::new(anchor_line, anchor_col),
            Position::new(head_line, head_col),
        ),
    )
}

/// Dispatcher with default config and default bindings
pub fn dispatcher() -> Dispatcher {
    dispatcher_with(ColumnPolicy::Clamp)
}

pub fn dispatcher_with(column_policy: ColumnPolicy) -> Dispatcher {
    Dispatcher::new(
        &ShortcutsConfig { column_policy },
        Keymap::with_bindings(default_bindings()),
    )
}

/// Run `command` with no host commands available
pub fn run(editor: &mut MemoryEditor, command: Command) -> DispatchOutcome {
    dispatcher()
        .execute(command, editor, &mut NoHostCommands)
        .expect("dispatch should succeed")
}

pub fn cursor(editor: &MemoryEditor) -> Position {
    editor.selection().head
}

pub fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

/// Host with recording actions registered under each of `ids`
pub fn recording_host(ids: &[&'static str]) -> (ActionRegistry, Rc<RefCell<Vec<&'static str>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut host = ActionRegistry::new();
    for &id in ids {
        let calls = Rc::clone(&calls);
        host.register(id, move || calls.borrow_mut().push(id));
    }
    (host, calls)
}
