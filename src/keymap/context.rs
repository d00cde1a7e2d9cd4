//! Context system for conditional keybindings
//!
//! Enables bindings that only activate under certain conditions,
//! such as "Alt+Up moves a block only when lines are selected".

use serde::Deserialize;

use crate::editable::Selection;

/// Editor state relevant to keybinding evaluation
#[derive(Debug, Clone, Default)]
pub struct KeyContext {
    /// Whether there's a non-empty selection
    pub has_selection: bool,
    /// Whether the selection spans more than one line
    pub line_selection: bool,
    /// Whether the editor (vs. some other pane) has focus
    pub editor_focused: bool,
}

impl KeyContext {
    /// Context for a focused editor with the given selection
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            has_selection: !selection.is_empty(),
            line_selection: selection.is_line_selection(),
            editor_focused: true,
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    HasSelection,
    NoSelection,
    /// Selection spans several lines
    LineSelection,
    EditorFocused,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::HasSelection => ctx.has_selection,
            Condition::NoSelection => !ctx.has_selection,
            Condition::LineSelection => ctx.line_selection,
            Condition::EditorFocused => ctx.editor_focused,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::Position;

    #[test]
    fn test_default_context() {
        let ctx = KeyContext::default();
        assert!(!ctx.has_selection);
        assert!(!ctx.line_selection);
        assert!(!ctx.editor_focused);
    }

    #[test]
    fn test_context_from_selection() {
        let caret = Selection::collapsed(Position::new(2, 1));
        let ctx = KeyContext::from_selection(&caret);
        assert!(!ctx.has_selection);
        assert!(ctx.editor_focused);

        let span = Selection::new(Position::new(0, 1), Position::new(0, 3));
        let ctx = KeyContext::from_selection(&span);
        assert!(ctx.has_selection);
        assert!(!ctx.line_selection);

        let block = Selection::new(Position::new(3, 0), Position::new(1, 0));
        let ctx = KeyContext::from_selection(&block);
        assert!(ctx.has_selection);
        assert!(ctx.line_selection);
    }

    #[test]
    fn test_condition_has_selection() {
        let mut ctx = KeyContext::default();
        assert!(!Condition::HasSelection.evaluate(&ctx));
        assert!(Condition::NoSelection.evaluate(&ctx));

        ctx.has_selection = true;
        assert!(Condition::HasSelection.evaluate(&ctx));
        assert!(!Condition::NoSelection.evaluate(&ctx));
    }

    #[test]
    fn test_evaluate_all() {
        let mut ctx = KeyContext::default();
        assert!(Condition::evaluate_all(&[], &ctx));

        ctx.has_selection = true;
        ctx.editor_focused = true;
        let conditions = vec![Condition::HasSelection, Condition::EditorFocused];
        assert!(Condition::evaluate_all(&conditions, &ctx));

        let conditions = vec![Condition::HasSelection, Condition::LineSelection];
        assert!(!Condition::evaluate_all(&conditions, &ctx));
    }
}
