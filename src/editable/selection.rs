//! Selection type: an anchor/head pair.

use super::cursor::Position;

/// Which end of the selection to read, mirroring the host's cursor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEnd {
    /// Where the selection started (fixed point)
    Anchor,
    /// Where the caret is (moving point)
    Head,
    /// Earlier of anchor and head in document order
    From,
    /// Later of anchor and head in document order
    To,
}

/// A text selection with anchor (start point) and head (cursor position).
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Earlier of anchor and head
    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// Later of anchor and head
    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Read one end of the selection
    pub fn end(&self, which: CursorEnd) -> Position {
        match which {
            CursorEnd::Anchor => self.anchor,
            CursorEnd::Head => self.head,
            CursorEnd::From => self.from(),
            CursorEnd::To => self.to(),
        }
    }

    /// Check if selection is reversed (head before anchor)
    pub fn is_reversed(&self) -> bool {
        self.head < self.anchor
    }

    /// A line selection has its anchor and head on different lines
    pub fn is_line_selection(&self) -> bool {
        self.anchor.line != self.head.line
    }
}
