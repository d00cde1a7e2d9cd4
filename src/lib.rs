//! Line editing shortcuts for a host text editor
//!
//! Delete, move and duplicate whole lines, plus toggling both sidebars. The
//! line operations are pure functions producing replacement plans; the
//! dispatcher applies them to any host implementing [`host::Editor`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dispatch;
pub mod editable;
pub mod host;
pub mod keymap;
pub mod line_ops;
pub mod tracing;

// Re-export commonly used types
pub use config::ShortcutsConfig;
pub use dispatch::{DispatchError, DispatchOutcome, Dispatcher};
pub use editable::{CursorEnd, Position, Selection};
pub use keymap::{Command, Keymap};
pub use line_ops::{ColumnPolicy, EditOperation, ReplacementPlan};
