//! Line-range editing: delete, move up/down and duplicate whole lines.
//!
//! Every operation is a pure function of a [`TextBuffer`] snapshot and the
//! current [`Selection`]. Nothing here mutates a buffer; each call returns a
//! [`ReplacementPlan`] that the dispatcher applies through the host editor.
//!
//! ```text
//! host → (buffer, selection) → compute(op) → ReplacementPlan → host.replace_range(..)
//! ```
//!
//! A selection whose anchor and head sit on different lines is a *line
//! selection* and the operation acts on the whole block of lines it touches.
//! Otherwise the operation acts on the caret's line.

mod plan;

use serde::{Deserialize, Serialize};

use crate::editable::{Position, Selection, TextBuffer, TransactionLabel};

pub use plan::{CursorUpdate, PlanError, Replacement, ReplacementPlan};

/// The four line operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    DeleteLine,
    MoveUp,
    MoveDown,
    Duplicate,
}

impl EditOperation {
    /// Transaction label the host groups this operation's edits under
    pub fn label(self) -> TransactionLabel {
        match self {
            EditOperation::DeleteLine => TransactionLabel::DeleteLine,
            EditOperation::MoveUp | EditOperation::MoveDown => TransactionLabel::MoveLine,
            EditOperation::Duplicate => TransactionLabel::DuplicateLine,
        }
    }
}

/// How the caret column is carried onto a line with different content.
///
/// Applies to single-line move and duplicate, where the caret keeps its
/// column while changing lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Clamp to the length of the line the caret lands on
    #[default]
    Clamp,
    /// Keep the numeric column and let the host clamp it
    Preserve,
}

impl ColumnPolicy {
    pub fn resolve(self, column: usize, line_length: usize) -> usize {
        match self {
            ColumnPolicy::Clamp => column.min(line_length),
            ColumnPolicy::Preserve => column,
        }
    }
}

/// Block of whole lines touched by a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub is_multi_line: bool,
    pub start_line: usize,
    pub end_line: usize,
}

/// Lines spanned by `selection`, in document order
pub fn resolve_line_range(selection: &Selection) -> LineRange {
    LineRange {
        is_multi_line: selection.is_line_selection(),
        start_line: selection.anchor.line.min(selection.head.line),
        end_line: selection.anchor.line.max(selection.head.line),
    }
}

/// Compute the plan for `op` against `buffer` and `selection`
pub fn compute<B: TextBuffer + ?Sized>(
    op: EditOperation,
    buffer: &B,
    selection: &Selection,
    policy: ColumnPolicy,
) -> ReplacementPlan {
    let selection = clamp_selection(buffer, selection);
    let plan = match op {
        EditOperation::DeleteLine => delete_line(buffer, &selection),
        EditOperation::MoveUp => move_up(buffer, &selection, policy),
        EditOperation::MoveDown => move_down(buffer, &selection, policy),
        EditOperation::Duplicate => duplicate(buffer, &selection, policy),
    };
    tracing::debug!(
        operation = ?op,
        label = %plan.label,
        replacements = plan.replacements.len(),
        cursor = ?plan.cursor,
        "computed line plan"
    );
    plan
}

/// Delete the caret's line, or every line a line selection touches.
///
/// A block that ends on the last line also takes the newline before it, so no
/// blank line is left at the end of the buffer. Deleting the only line leaves
/// one empty line.
pub fn delete_line<B: TextBuffer + ?Sized>(buffer: &B, selection: &Selection) -> ReplacementPlan {
    let range = resolve_line_range(selection);
    let last_line = buffer.last_line();
    let mut plan = ReplacementPlan::noop(TransactionLabel::DeleteLine);

    if range.is_multi_line {
        let LineRange {
            start_line,
            end_line,
            ..
        } = range;

        if end_line == last_line {
            let from = if start_line > 0 {
                Position::new(start_line - 1, buffer.line_length(start_line - 1))
            } else {
                Position::new(start_line, 0)
            };
            let to = Position::new(end_line, buffer.line_length(end_line));
            plan.push(from, to, "");
        } else {
            plan.push(
                Position::new(start_line, 0),
                Position::new(end_line + 1, 0),
                "",
            );
        }

        let removed = end_line - start_line + 1;
        let remaining = buffer.line_count().saturating_sub(removed).max(1);
        plan.cursor = CursorUpdate::Cursor(Position::new(start_line.min(remaining - 1), 0));
    } else {
        // Two dependent steps: empty the line, then drop its newline
        let line = selection.head.line;
        let len = buffer.line_length(line);
        if len > 0 {
            plan.push(Position::new(line, 0), Position::new(line, len), "");
        }
        if line < last_line {
            plan.push(Position::new(line, 0), Position::new(line + 1, 0), "");
        }
    }

    plan
}

/// Swap the caret's line (or the selected block) with the line above it.
pub fn move_up<B: TextBuffer + ?Sized>(
    buffer: &B,
    selection: &Selection,
    policy: ColumnPolicy,
) -> ReplacementPlan {
    let range = resolve_line_range(selection);
    let mut plan = ReplacementPlan::noop(TransactionLabel::MoveLine);
    if range.start_line == 0 {
        return plan;
    }

    if range.is_multi_line {
        let LineRange {
            start_line,
            end_line,
            ..
        } = range;
        let above = line_text(buffer, start_line - 1);
        let selected = buffer.lines_in(start_line, end_line);
        let moved_last_len = buffer.line_length(end_line);

        plan.push(
            Position::new(start_line - 1, 0),
            Position::new(end_line, moved_last_len),
            format!("{}\n{}", selected.join("\n"), above),
        );
        plan.cursor = CursorUpdate::Selection {
            anchor: Position::new(start_line - 1, 0),
            head: Position::new(end_line - 1, moved_last_len),
        };
    } else {
        let line = selection.head.line;
        let current = line_text(buffer, line);
        let previous = line_text(buffer, line - 1);
        let current_len = current.chars().count();
        let previous_len = previous.chars().count();

        plan.push(
            Position::new(line - 1, 0),
            Position::new(line - 1, previous_len),
            current,
        );
        plan.push(
            Position::new(line, 0),
            Position::new(line, current_len),
            previous,
        );
        plan.cursor = CursorUpdate::Cursor(Position::new(
            line - 1,
            policy.resolve(selection.head.column, current_len),
        ));
    }

    plan
}

/// Swap the caret's line (or the selected block) with the line below it.
pub fn move_down<B: TextBuffer + ?Sized>(
    buffer: &B,
    selection: &Selection,
    policy: ColumnPolicy,
) -> ReplacementPlan {
    let range = resolve_line_range(selection);
    let mut plan = ReplacementPlan::noop(TransactionLabel::MoveLine);
    if range.end_line >= buffer.last_line() {
        return plan;
    }

    if range.is_multi_line {
        let LineRange {
            start_line,
            end_line,
            ..
        } = range;
        let below = line_text(buffer, end_line + 1);
        let selected = buffer.lines_in(start_line, end_line);
        let below_len = buffer.line_length(end_line + 1);
        let moved_last_len = buffer.line_length(end_line);

        plan.push(
            Position::new(start_line, 0),
            Position::new(end_line + 1, below_len),
            format!("{}\n{}", below, selected.join("\n")),
        );
        plan.cursor = CursorUpdate::Selection {
            anchor: Position::new(start_line + 1, 0),
            head: Position::new(end_line + 1, moved_last_len),
        };
    } else {
        let line = selection.head.line;
        let current = line_text(buffer, line);
        let next = line_text(buffer, line + 1);
        let current_len = current.chars().count();
        let next_len = next.chars().count();

        plan.push(
            Position::new(line + 1, 0),
            Position::new(line + 1, next_len),
            current,
        );
        plan.push(Position::new(line, 0), Position::new(line, current_len), next);
        plan.cursor = CursorUpdate::Cursor(Position::new(
            line + 1,
            policy.resolve(selection.head.column, current_len),
        ));
    }

    plan
}

/// Insert a copy of the caret's line below it and move the caret onto the copy.
///
/// Always acts on the head's line, even for a line selection.
pub fn duplicate<B: TextBuffer + ?Sized>(
    buffer: &B,
    selection: &Selection,
    policy: ColumnPolicy,
) -> ReplacementPlan {
    let line = selection.head.line;
    let text = line_text(buffer, line);
    let len = text.chars().count();
    let end = Position::new(line, len);

    let mut plan = ReplacementPlan::noop(TransactionLabel::DuplicateLine);
    plan.push(end, end, format!("\n{}", text));
    plan.cursor = CursorUpdate::Cursor(Position::new(
        line + 1,
        policy.resolve(selection.head.column, len),
    ));
    plan
}

fn line_text<B: TextBuffer + ?Sized>(buffer: &B, line: usize) -> String {
    buffer.line(line).map(|l| l.into_owned()).unwrap_or_default()
}

/// Pull selection lines back inside the buffer so no operation indexes past it.
///
/// Columns are left alone: ranges are built from line lengths, and the caret
/// column is handled by [`ColumnPolicy`].
fn clamp_selection<B: TextBuffer + ?Sized>(buffer: &B, selection: &Selection) -> Selection {
    let last_line = buffer.last_line();
    let clamp = |pos: Position| Position::new(pos.line.min(last_line), pos.column);
    Selection::new(clamp(selection.anchor), clamp(selection.head))
}
