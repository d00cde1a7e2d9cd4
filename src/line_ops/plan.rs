//! Replacement plans: the output of every line operation.

use crate::editable::{Position, TextBuffer, TransactionLabel};

/// Replace the text between `from` and `to` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: Position,
    pub to: Position,
    pub text: String,
}

impl Replacement {
    pub fn new(from: Position, to: Position, text: impl Into<String>) -> Self {
        Self {
            from,
            to,
            text: text.into(),
        }
    }

    /// Zero-width source range
    pub fn is_insertion(&self) -> bool {
        self.from == self.to
    }
}

/// What to do with the caret once all replacements are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorUpdate {
    /// Leave the host's own position mapping in effect
    #[default]
    Keep,
    /// Collapse to a caret
    Cursor(Position),
    /// Set an anchor/head selection
    Selection { anchor: Position, head: Position },
}

/// Ordered replacements plus the resulting cursor, tagged with one label.
///
/// Replacements are applied in order; each one addresses the buffer as left by
/// the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan {
    pub label: TransactionLabel,
    pub replacements: Vec<Replacement>,
    pub cursor: CursorUpdate,
}

impl ReplacementPlan {
    /// Plan that changes nothing
    pub fn noop(label: TransactionLabel) -> Self {
        Self {
            label,
            replacements: Vec::new(),
            cursor: CursorUpdate::Keep,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.replacements.is_empty() && self.cursor == CursorUpdate::Keep
    }

    pub(crate) fn push(&mut self, from: Position, to: Position, text: impl Into<String>) {
        self.replacements.push(Replacement::new(from, to, text));
    }

    /// Check every replacement endpoint against the buffer state it will see.
    ///
    /// Line lengths are simulated step by step, so a plan that is valid only
    /// because of an earlier step passes. Cursor columns are not checked: with
    /// [`ColumnPolicy::Preserve`](super::ColumnPolicy) they may legitimately
    /// exceed the line length.
    pub fn validate<B: TextBuffer + ?Sized>(&self, buffer: &B) -> Result<(), PlanError> {
        let mut lengths: Vec<usize> = (0..buffer.line_count())
            .map(|i| buffer.line_length(i))
            .collect();

        for (step, r) in self.replacements.iter().enumerate() {
            if r.from > r.to {
                return Err(PlanError::InvertedRange {
                    step,
                    from: r.from,
                    to: r.to,
                });
            }
            check_position(&lengths, step, r.from)?;
            check_position(&lengths, step, r.to)?;

            let head = r.from.column;
            let tail = lengths[r.to.line] - r.to.column;
            let segments: Vec<usize> = r.text.split('\n').map(|s| s.chars().count()).collect();
            let last = segments.len() - 1;
            let new_lengths: Vec<usize> = segments
                .iter()
                .enumerate()
                .map(|(i, &len)| {
                    let mut total = len;
                    if i == 0 {
                        total += head;
                    }
                    if i == last {
                        total += tail;
                    }
                    total
                })
                .collect();
            lengths.splice(r.from.line..=r.to.line, new_lengths);
        }

        let line_count = lengths.len();
        let check_line = |pos: Position| {
            if pos.line >= line_count {
                Err(PlanError::CursorOutOfRange {
                    position: pos,
                    line_count,
                })
            } else {
                Ok(())
            }
        };
        match self.cursor {
            CursorUpdate::Keep => Ok(()),
            CursorUpdate::Cursor(pos) => check_line(pos),
            CursorUpdate::Selection { anchor, head } => {
                check_line(anchor)?;
                check_line(head)
            }
        }
    }
}

fn check_position(lengths: &[usize], step: usize, pos: Position) -> Result<(), PlanError> {
    match lengths.get(pos.line) {
        None => Err(PlanError::LineOutOfRange {
            step,
            line: pos.line,
            line_count: lengths.len(),
        }),
        Some(&len) if pos.column > len => Err(PlanError::ColumnOutOfRange {
            step,
            position: pos,
            line_length: len,
        }),
        Some(_) => Ok(()),
    }
}

/// Reasons a plan cannot be applied to a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    LineOutOfRange {
        step: usize,
        line: usize,
        line_count: usize,
    },
    ColumnOutOfRange {
        step: usize,
        position: Position,
        line_length: usize,
    },
    InvertedRange {
        step: usize,
        from: Position,
        to: Position,
    },
    CursorOutOfRange {
        position: Position,
        line_count: usize,
    },
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::LineOutOfRange {
                step,
                line,
                line_count,
            } => write!(
                f,
                "replacement {}: line {} out of range ({} lines)",
                step, line, line_count
            ),
            PlanError::ColumnOutOfRange {
                step,
                position,
                line_length,
            } => write!(
                f,
                "replacement {}: column {} past end of line {} (length {})",
                step, position.column, position.line, line_length
            ),
            PlanError::InvertedRange { step, from, to } => {
                write!(f, "replacement {}: range {} .. {} is inverted", step, from, to)
            }
            PlanError::CursorOutOfRange {
                position,
                line_count,
            } => write!(
                f,
                "resulting cursor {} out of range ({} lines)",
                position, line_count
            ),
        }
    }
}

impl std::error::Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    #[test]
    fn test_noop_plan() {
        let plan = ReplacementPlan::noop(TransactionLabel::MoveLine);
        assert!(plan.is_noop());
        assert!(plan.validate(&vec!["a"]).is_ok());
    }

    #[test]
    fn test_validate_sequential_steps() {
        // Second step is only valid once the first has emptied line 1
        let mut plan = ReplacementPlan::noop(TransactionLabel::DeleteLine);
        plan.push(pos(1, 0), pos(1, 3), "");
        plan.push(pos(1, 0), pos(2, 0), "");
        assert!(plan.validate(&vec!["a", "bcd", "e"]).is_ok());

        // Reversed order addresses columns that do not exist yet
        let mut bad = ReplacementPlan::noop(TransactionLabel::DeleteLine);
        bad.push(pos(1, 0), pos(2, 0), "");
        bad.push(pos(1, 0), pos(1, 3), "");
        assert_eq!(
            bad.validate(&vec!["a", "bcd", "e"]),
            Err(PlanError::ColumnOutOfRange {
                step: 1,
                position: pos(1, 3),
                line_length: 1,
            })
        );
    }

    #[test]
    fn test_validate_multiline_insert_grows_lines() {
        let mut plan = ReplacementPlan::noop(TransactionLabel::DuplicateLine);
        plan.push(pos(0, 3), pos(0, 3), "\nfoo");
        plan.cursor = CursorUpdate::Cursor(pos(1, 2));
        assert!(plan.validate(&vec!["foo"]).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_line() {
        let mut plan = ReplacementPlan::noop(TransactionLabel::MoveLine);
        plan.push(pos(0, 0), pos(3, 0), "");
        assert!(matches!(
            plan.validate(&vec!["a", "b"]),
            Err(PlanError::LineOutOfRange { line: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut plan = ReplacementPlan::noop(TransactionLabel::MoveLine);
        plan.push(pos(1, 0), pos(0, 0), "");
        assert!(matches!(
            plan.validate(&vec!["a", "b"]),
            Err(PlanError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_validate_cursor_line() {
        let mut plan = ReplacementPlan::noop(TransactionLabel::DeleteLine);
        plan.push(pos(0, 1), pos(1, 1), "");
        plan.cursor = CursorUpdate::Cursor(pos(1, 0));
        assert!(matches!(
            plan.validate(&vec!["a", "b"]),
            Err(PlanError::CursorOutOfRange { .. })
        ));
    }
}
