//! Named edit transactions and the undo/redo history that groups them.

use super::selection::Selection;

/// Tag attached to every replacement so the host can group one command's
/// edits into a single undoable step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionLabel {
    DeleteLine,
    MoveLine,
    DuplicateLine,
}

impl TransactionLabel {
    /// Stable wire name of the label
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionLabel::DeleteLine => "delete-line",
            TransactionLabel::MoveLine => "move-line",
            TransactionLabel::DuplicateLine => "duplicate-line",
        }
    }
}

impl std::fmt::Display for TransactionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applied replacement, recorded in char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStep {
    /// Char offset where the edit occurred
    pub offset: usize,
    /// Text that was removed (empty for pure inserts)
    pub deleted_text: String,
    /// Text that was inserted (empty for pure deletes)
    pub inserted_text: String,
}

impl EditStep {
    pub fn new(offset: usize, deleted_text: String, inserted_text: String) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
        }
    }

    /// Get the inverse step for undo
    pub fn inverse(&self) -> Self {
        Self {
            offset: self.offset,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
        }
    }
}

/// All steps of one command, undone and redone as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub label: TransactionLabel,
    pub steps: Vec<EditStep>,
    pub selection_before: Selection,
    pub selection_after: Selection,
}

impl Transaction {
    pub fn new(label: TransactionLabel, selection_before: Selection) -> Self {
        Self {
            label,
            steps: Vec::new(),
            selection_before,
            selection_after: selection_before,
        }
    }

    /// Inverse transaction: steps inverted in reverse order, selections swapped
    pub fn inverse(&self) -> Self {
        Self {
            label: self.label,
            steps: self.steps.iter().rev().map(EditStep::inverse).collect(),
            selection_before: self.selection_after,
            selection_after: self.selection_before,
        }
    }
}

/// Edit history with undo/redo stacks of transactions.
///
/// `pop_undo` and `pop_redo` both return a transaction whose *inverse* the
/// caller applies.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new edit history with default max size
    pub fn new() -> Self {
        Self::with_max_size(1000)
    }

    /// Create a new edit history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Push a transaction onto the undo stack (clears redo stack)
    pub fn push(&mut self, tx: Transaction) {
        if tx.steps.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(tx);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
    }

    /// Pop a transaction from the undo stack (moves its inverse to redo)
    pub fn pop_undo(&mut self) -> Option<Transaction> {
        let tx = self.undo_stack.pop()?;
        self.redo_stack.push(tx.inverse());
        Some(tx)
    }

    /// Pop a transaction from the redo stack (moves its inverse to undo)
    pub fn pop_redo(&mut self) -> Option<Transaction> {
        let tx = self.redo_stack.pop()?;
        self.undo_stack.push(tx.inverse());
        Some(tx)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
