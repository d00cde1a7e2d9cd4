//! Command-line argument parsing
//!
//! Supports:
//! - Running one shortcut command against a file
//! - Listing commands with their effective key bindings

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::editable::{Position, Selection};
use crate::keymap::Command;

/// Line editing shortcuts: delete, move and duplicate lines
#[derive(Parser, Debug)]
#[command(name = "editor-shortcuts", version, about = "Line editing shortcuts")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run a command against a file and print the result
    Apply(ApplyArgs),
    /// List commands with their ids, icons and key bindings
    Keys,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Text file to edit
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Command id, e.g. move-line-up
    #[arg(short = 'c', long, value_name = "ID")]
    pub command: String,

    /// Selection anchor line (1-indexed)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub line: usize,

    /// Selection anchor column (1-indexed)
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,

    /// Selection head line; omit for a plain caret
    #[arg(long, value_name = "N")]
    pub to_line: Option<usize>,

    /// Selection head column (used with --to-line)
    #[arg(long, value_name = "N", requires = "to_line")]
    pub to_column: Option<usize>,

    /// Keep the caret column when changing lines instead of clamping it
    #[arg(long)]
    pub preserve_column: bool,

    /// Write the result back to FILE instead of printing it
    #[arg(short = 'w', long)]
    pub write: bool,
}

/// A validated `apply` invocation with 0-indexed positions
#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub file: PathBuf,
    pub command: Command,
    pub selection: Selection,
    pub preserve_column: bool,
    pub write: bool,
}

impl ApplyArgs {
    /// Resolve the command id and convert positions to 0-indexed
    pub fn into_request(self) -> Result<ApplyRequest, String> {
        let command = Command::from_id(&self.command).ok_or_else(|| {
            let known: Vec<&str> = Command::ALL.iter().map(|c| c.id()).collect();
            format!(
                "Unknown command '{}' (expected one of: {})",
                self.command,
                known.join(", ")
            )
        })?;

        let anchor = to_position(self.line, self.column);
        let head = self
            .to_line
            .map(|line| to_position(line, self.to_column))
            .unwrap_or(anchor);

        Ok(ApplyRequest {
            file: self.file,
            command,
            selection: Selection::new(anchor, head),
            preserve_column: self.preserve_column,
            write: self.write,
        })
    }
}

/// Convert from 1-indexed (user input) to 0-indexed (internal)
fn to_position(line: usize, column: Option<usize>) -> Position {
    Position::new(
        line.saturating_sub(1),
        column.unwrap_or(1).saturating_sub(1),
    )
}

/// Format a position 1-indexed, as the user typed it
pub fn display_position(pos: Position) -> String {
    format!("{}:{}", pos.line + 1, pos.column + 1)
}
