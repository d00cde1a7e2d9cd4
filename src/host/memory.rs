//! In-memory host editor backed by a rope.
//!
//! Behaves like a minimal host: clamps incoming positions, maps the selection
//! through each replacement, and groups replacements into named transactions
//! that undo and redo as a unit. Inserted text follows the line ending the
//! document was loaded with.

use std::borrow::Cow;

use crate::editable::{
    CursorEnd, EditHistory, EditStep, LineEnding, Position, RopeBuffer, Selection, TextBuffer, Transaction,
    TransactionLabel,
};

use super::Editor;

/// Rope-backed [`Editor`] with a single selection and undo history.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    buffer: RopeBuffer,
    selection: Selection,
    history: EditHistory,
    line_ending: LineEnding,
    /// Transaction collecting replacements until the next commit
    pending: Option<Transaction>,
}

impl MemoryEditor {
    /// Create an editor with the caret at the start of the buffer
    pub fn new(text: &str) -> Self {
        Self {
            buffer: RopeBuffer::from_text(text),
            line_ending: LineEnding::detect(text),
            ..Self::default()
        }
    }

    /// Create an editor with the given selection (clamped to the buffer)
    pub fn with_selection(text: &str, selection: Selection) -> Self {
        let mut editor = Self::new(text);
        editor.set_selection(selection.anchor, selection.head);
        editor
    }

    /// Full buffer content
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Buffer content split into lines
    pub fn lines(&self) -> Vec<String> {
        self.lines_in(0, self.last_line())
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Revert the most recent transaction; returns false when there is none
    pub fn undo(&mut self) -> bool {
        self.commit_transaction();
        let Some(tx) = self.history.pop_undo() else {
            return false;
        };
        let inverse = tx.inverse();
        for step in &inverse.steps {
            self.apply_step(step);
        }
        self.selection = inverse.selection_after;
        tracing::debug!(label = %tx.label, "undo");
        true
    }

    /// Re-apply the most recently undone transaction
    pub fn redo(&mut self) -> bool {
        self.commit_transaction();
        let Some(stored) = self.history.pop_redo() else {
            return false;
        };
        let forward = stored.inverse();
        for step in &forward.steps {
            self.apply_step(step);
        }
        self.selection = forward.selection_after;
        tracing::debug!(label = %forward.label, "redo");
        true
    }

    fn apply_step(&mut self, step: &EditStep) {
        let end = step.offset + step.deleted_text.chars().count();
        self.buffer.replace(step.offset..end, &step.inserted_text);
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.column.min(self.line_length(line)))
    }

    fn offset_of(&self, pos: Position) -> usize {
        self.buffer.position_to_offset(pos.line, pos.column)
    }

    fn position_of(&self, offset: usize) -> Position {
        let (line, column) = self.buffer.offset_to_position(offset);
        Position::new(line, column)
    }
}

impl TextBuffer for MemoryEditor {
    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        self.buffer.line(line)
    }

    fn line_length(&self, line: usize) -> usize {
        self.buffer.line_length(line)
    }
}

impl Editor for MemoryEditor {
    fn cursor(&self, which: CursorEnd) -> Position {
        self.selection.end(which)
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position, label: TransactionLabel) {
        let text = self.line_ending.apply(text);
        let (from, to) = {
            let a = self.clamp(from);
            let b = self.clamp(to);
            (a.min(b), a.max(b))
        };
        let start = self.offset_of(from);
        let end = self.offset_of(to);
        if start == end && text.is_empty() {
            return;
        }

        if self.pending.as_ref().is_some_and(|tx| tx.label != label) {
            self.commit_transaction();
        }
        let selection_before = self.selection;
        let anchor = self.offset_of(self.selection.anchor);
        let head = self.offset_of(self.selection.head);

        let deleted = self.buffer.slice(start..end);
        self.buffer.replace(start..end, &text);

        // Offsets inside the replaced span collapse to its start
        let inserted = text.chars().count();
        let map = |offset: usize| {
            if offset < start {
                offset
            } else if offset >= end {
                offset - (end - start) + inserted
            } else {
                start
            }
        };
        self.selection = Selection::new(self.position_of(map(anchor)), self.position_of(map(head)));

        self.pending
            .get_or_insert_with(|| Transaction::new(label, selection_before))
            .steps
            .push(EditStep::new(start, deleted, text.into_owned()));
    }

    fn set_cursor(&mut self, pos: Position) {
        self.selection = Selection::collapsed(self.clamp(pos));
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.selection = Selection::new(self.clamp(anchor), self.clamp(head));
    }

    fn commit_transaction(&mut self) {
        if let Some(mut tx) = self.pending.take() {
            tx.selection_after = self.selection;
            tracing::trace!(label = %tx.label, steps = tx.steps.len(), "commit transaction");
            self.history.push(tx);
        }
    }
}
