//! Text buffer traits and implementations.
//!
//! `TextBuffer` is the read-only line surface the line operations consume.
//! `RopeBuffer` is the mutable rope-backed buffer behind the in-memory host.
//!
//! Lines are separated by `\n` only. A `\r` directly before it belongs to the
//! line ending; form feeds and Unicode separators are ordinary characters.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

/// Read-only line view into a text buffer.
///
/// Columns are counted in characters. Lines never include their newline.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Get line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Length of a specific line in characters (excluding newline), 0 if out of range
    fn line_length(&self, line: usize) -> usize {
        self.line(line).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Index of the last line
    fn last_line(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Collect lines `start..=end` as owned strings
    fn lines_in(&self, start: usize, end: usize) -> Vec<String> {
        (start..=end)
            .map(|i| self.line(i).map(Cow::into_owned).unwrap_or_default())
            .collect()
    }
}

impl<S: AsRef<str>> TextBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len().max(1)
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        match self.get(line) {
            Some(s) => Some(Cow::Borrowed(s.as_ref())),
            None if line == 0 && self.is_empty() => Some(Cow::Borrowed("")),
            None => None,
        }
    }
}

impl<S: AsRef<str>> TextBuffer for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        self.as_slice().line(line)
    }
}

/// Line ending a document was loaded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect from the first line break in `text`
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Rewrite the `\n` separators of `text` to this ending
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            LineEnding::CrLf if text.contains('\n') => {
                Cow::Owned(text.replace("\r\n", "\n").replace('\n', "\r\n"))
            }
            _ => Cow::Borrowed(text),
        }
    }
}

// =============================================================================
// RopeBuffer - multi-line document storage
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Convert (line, column) to char offset, clamping both to the buffer
    pub fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    /// Convert char offset to (line, column)
    pub fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Get slice of text as String (by character indices)
    pub fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Replace the char range with `text`
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }

    /// Get full content as String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line).to_string();
        if s.ends_with('\n') {
            s.pop();
            if s.ends_with('\r') {
                s.pop();
            }
        }
        Some(Cow::Owned(s))
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }
}
