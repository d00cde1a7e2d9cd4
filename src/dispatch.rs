//! Command dispatch
//!
//! Turns a [`Command`] into work against the host: line operations are computed
//! from a snapshot of the editor, validated, then applied through
//! [`Editor::replace_range`] as one named transaction. Sidebar toggling goes
//! through the host's optional command lookup.

use crate::config::ShortcutsConfig;
use crate::editable::TransactionLabel;
use crate::host::{Editor, HostCommands};
use crate::keymap::{Command, CommandAction, KeyContext, Keymap, Keystroke};
use crate::line_ops::{self, ColumnPolicy, CursorUpdate, EditOperation, PlanError, ReplacementPlan};

/// What a dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Replacements were applied under `label`
    Edited {
        label: TransactionLabel,
        replacements: usize,
    },
    /// The command had nothing to do (e.g. moving the first line up)
    Unchanged,
    /// Host commands were looked up; `missing` ones are absent from the host
    HostCommands {
        invoked: Vec<&'static str>,
        missing: Vec<&'static str>,
    },
}

/// Errors from dispatching a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    UnknownCommand(String),
    /// The computed plan does not fit the buffer; nothing was applied
    InvalidPlan(PlanError),
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::UnknownCommand(id) => write!(f, "Unknown command: {}", id),
            DispatchError::InvalidPlan(e) => write!(f, "Invalid edit plan: {}", e),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::InvalidPlan(e) => Some(e),
            DispatchError::UnknownCommand(_) => None,
        }
    }
}

impl From<PlanError> for DispatchError {
    fn from(e: PlanError) -> Self {
        DispatchError::InvalidPlan(e)
    }
}

/// Maps commands and keystrokes to line operations and host actions
#[derive(Debug, Clone)]
pub struct Dispatcher {
    column_policy: ColumnPolicy,
    keymap: Keymap,
}

impl Dispatcher {
    pub fn new(config: &ShortcutsConfig, keymap: Keymap) -> Self {
        Self {
            column_policy: config.column_policy,
            keymap,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn column_policy(&self) -> ColumnPolicy {
        self.column_policy
    }

    /// Run the command bound to `keystroke` in the editor's current context
    ///
    /// Returns `Ok(None)` when nothing is bound.
    pub fn handle_keystroke<E, H>(
        &self,
        keystroke: Keystroke,
        editor: &mut E,
        host: &mut H,
    ) -> Result<Option<DispatchOutcome>, DispatchError>
    where
        E: Editor + ?Sized,
        H: HostCommands + ?Sized,
    {
        let ctx = KeyContext::from_selection(&editor.selection());
        let Some(command) = self.keymap.lookup_with_context(&keystroke, Some(&ctx)) else {
            tracing::trace!(%keystroke, "no binding");
            return Ok(None);
        };
        self.execute(command, editor, host).map(Some)
    }

    /// Run a command by its stable id, e.g. `move-line-up`
    pub fn execute_by_id<E, H>(
        &self,
        id: &str,
        editor: &mut E,
        host: &mut H,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        E: Editor + ?Sized,
        H: HostCommands + ?Sized,
    {
        let command =
            Command::from_id(id).ok_or_else(|| DispatchError::UnknownCommand(id.to_string()))?;
        self.execute(command, editor, host)
    }

    pub fn execute<E, H>(
        &self,
        command: Command,
        editor: &mut E,
        host: &mut H,
    ) -> Result<DispatchOutcome, DispatchError>
    where
        E: Editor + ?Sized,
        H: HostCommands + ?Sized,
    {
        tracing::debug!(command = command.id(), "dispatch");
        match command.action() {
            Some(CommandAction::Edit(op)) => self.run_operation(op, editor),
            Some(CommandAction::Host(ids)) => Ok(invoke_host_commands(ids, host)),
            None => Ok(DispatchOutcome::Unchanged),
        }
    }

    /// Compute `op` against the editor's snapshot and apply it
    pub fn run_operation<E: Editor + ?Sized>(
        &self,
        op: EditOperation,
        editor: &mut E,
    ) -> Result<DispatchOutcome, DispatchError> {
        let plan = line_ops::compute(op, &*editor, &editor.selection(), self.column_policy);
        apply_plan(&plan, editor)
    }
}

/// Validate `plan` against the editor, then apply it as one transaction
///
/// On a validation error the editor is left untouched.
pub fn apply_plan<E: Editor + ?Sized>(
    plan: &ReplacementPlan,
    editor: &mut E,
) -> Result<DispatchOutcome, DispatchError> {
    if plan.is_noop() {
        return Ok(DispatchOutcome::Unchanged);
    }
    if let Err(e) = plan.validate(&*editor) {
        tracing::warn!(label = %plan.label, "rejected edit plan: {}", e);
        return Err(e.into());
    }

    for r in &plan.replacements {
        editor.replace_range(&r.text, r.from, r.to, plan.label);
    }
    match plan.cursor {
        CursorUpdate::Keep => {}
        CursorUpdate::Cursor(pos) => editor.set_cursor(pos),
        CursorUpdate::Selection { anchor, head } => editor.set_selection(anchor, head),
    }
    editor.commit_transaction();

    Ok(DispatchOutcome::Edited {
        label: plan.label,
        replacements: plan.replacements.len(),
    })
}

/// Invoke each host command that exists; missing ones are logged and skipped
fn invoke_host_commands<H: HostCommands + ?Sized>(
    ids: &'static [&'static str],
    host: &mut H,
) -> DispatchOutcome {
    let mut invoked = Vec::new();
    let mut missing = Vec::new();

    for &id in ids {
        match host.find(id) {
            Some(action) => {
                action.invoke();
                invoked.push(id);
            }
            None => {
                tracing::warn!("Host command {} not found, skipping", id);
                missing.push(id);
            }
        }
    }

    DispatchOutcome::HostCommands { invoked, missing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{Position, Selection};
    use crate::host::{ActionRegistry, MemoryEditor, NoHostCommands};
    use crate::keymap::{default_bindings, KeyCode, Modifiers, SIDEBAR_TOGGLES};
    use crate::line_ops::Replacement;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            &ShortcutsConfig::default(),
            Keymap::with_bindings(default_bindings()),
        )
    }

    fn caret(line: usize, column: usize) -> Selection {
        Selection::collapsed(Position::new(line, column))
    }

    #[test]
    fn test_execute_by_id_moves_line() {
        let mut ed = MemoryEditor::with_selection("A\nB\nC", caret(1, 0));
        let outcome = dispatcher()
            .execute_by_id("move-line-up", &mut ed, &mut NoHostCommands)
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::Edited {
                label: TransactionLabel::MoveLine,
                replacements: 2
            }
        );
        assert_eq!(ed.text(), "B\nA\nC");
        assert_eq!(ed.selection(), caret(0, 0));
        assert_eq!(ed.history().undo_count(), 1);
    }

    #[test]
    fn test_unknown_command() {
        let mut ed = MemoryEditor::new("A");
        let err = dispatcher()
            .execute_by_id("explode", &mut ed, &mut NoHostCommands)
            .unwrap_err();
        assert_eq!(err, DispatchError::UnknownCommand("explode".to_string()));
        assert_eq!(err.to_string(), "Unknown command: explode");
    }

    #[test]
    fn test_boundary_is_unchanged_and_not_recorded() {
        let mut ed = MemoryEditor::with_selection("A\nB", caret(0, 0));
        let outcome = dispatcher()
            .execute(Command::MoveLineUp, &mut ed, &mut NoHostCommands)
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Unchanged);
        assert!(!ed.history().can_undo());
    }

    #[test]
    fn test_invalid_plan_leaves_buffer_untouched() {
        let mut ed = MemoryEditor::with_selection("ab\ncd", caret(0, 1));
        let mut plan = ReplacementPlan::noop(TransactionLabel::DeleteLine);
        plan.replacements.push(Replacement::new(
            Position::new(0, 0),
            Position::new(1, 0),
            "",
        ));
        plan.replacements.push(Replacement::new(
            Position::new(1, 0),
            Position::new(1, 5),
            "",
        ));

        let err = apply_plan(&plan, &mut ed).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidPlan(_)));
        assert_eq!(ed.text(), "ab\ncd");
        assert_eq!(ed.selection(), caret(0, 1));
        assert!(!ed.history().can_undo());
    }

    #[test]
    fn test_sidebars_toggle_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut host = ActionRegistry::new();
        for &id in SIDEBAR_TOGGLES {
            let calls = Rc::clone(&calls);
            host.register(id, move || calls.borrow_mut().push(id));
        }

        let mut ed = MemoryEditor::new("text");
        let outcome = dispatcher()
            .execute(Command::ToggleBothSidebars, &mut ed, &mut host)
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::HostCommands {
                invoked: SIDEBAR_TOGGLES.to_vec(),
                missing: vec![]
            }
        );
        assert_eq!(*calls.borrow(), SIDEBAR_TOGGLES.to_vec());
        assert_eq!(ed.text(), "text");
    }

    #[test]
    fn test_missing_sidebar_is_skipped() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut host = ActionRegistry::new();
        host.register("app:toggle-right-sidebar", move || {
            *counter.borrow_mut() += 1
        });

        let mut ed = MemoryEditor::new("");
        let outcome = dispatcher()
            .execute(Command::ToggleBothSidebars, &mut ed, &mut host)
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::HostCommands {
                invoked: vec!["app:toggle-right-sidebar"],
                missing: vec!["app:toggle-left-sidebar"]
            }
        );
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_handle_keystroke() {
        let mut ed = MemoryEditor::with_selection("one\ntwo", caret(0, 2));
        let d = dispatcher();

        let alt_d = Keystroke::char_with_mods('d', Modifiers::ALT);
        let outcome = d
            .handle_keystroke(alt_d, &mut ed, &mut NoHostCommands)
            .unwrap();
        assert!(matches!(outcome, Some(DispatchOutcome::Edited { .. })));
        assert_eq!(ed.text(), "one\none\ntwo");
        assert_eq!(ed.selection(), caret(1, 2));

        let unbound = Keystroke::key(KeyCode::F(7));
        assert_eq!(
            d.handle_keystroke(unbound, &mut ed, &mut NoHostCommands),
            Ok(None)
        );
    }

    #[test]
    fn test_unbound_command_does_nothing() {
        let mut ed = MemoryEditor::new("A\nB");
        let outcome = dispatcher()
            .execute(Command::Unbound, &mut ed, &mut NoHostCommands)
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Unchanged);
        assert_eq!(ed.text(), "A\nB");
    }
}
