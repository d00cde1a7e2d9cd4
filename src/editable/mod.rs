//! Editing data model shared by the line operations and host adapters.
//!
//! - [`Position`] / [`Selection`]: caret and anchor/head pairs in line/column space
//! - [`TextBuffer`]: read-only line surface consumed by the line operations
//! - [`RopeBuffer`]: rope-backed storage for the in-memory host
//! - [`EditHistory`]: undo/redo of named transactions

mod buffer;
mod cursor;
mod history;
mod selection;

pub use buffer::{LineEnding, RopeBuffer, TextBuffer};
pub use cursor::Position;
pub use history::{EditHistory, EditStep, Transaction, TransactionLabel};
pub use selection::{CursorEnd, Selection};
