//! Command enum representing every action that can be bound to a key
//!
//! Commands are the bridge between keybindings and the dispatcher. Each one
//! resolves to a [`CommandAction`]: either a line operation computed by
//! `line_ops`, or a list of host application commands to invoke.

use crate::line_ops::EditOperation;

/// Host command ids toggled by [`Command::ToggleBothSidebars`], in order
pub const SIDEBAR_TOGGLES: &[&str] = &["app:toggle-left-sidebar", "app:toggle-right-sidebar"];

/// All commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Delete the current line, or every line the selection touches
    DeleteLine,
    /// Swap the current line (or selected block) with the line above
    MoveLineUp,
    /// Swap the current line (or selected block) with the line below
    MoveLineDown,
    /// Insert a copy of the current line below it
    DuplicateLine,
    /// Toggle the host's left and right sidebars
    ToggleBothSidebars,
    /// Explicitly unbound - disables a default binding
    Unbound,
}

/// What executing a command amounts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Edit(EditOperation),
    /// Host application commands, invoked in order when present
    Host(&'static [&'static str]),
}

impl Command {
    /// Every registrable command, in registration order
    pub const ALL: [Command; 5] = [
        Command::DeleteLine,
        Command::MoveLineUp,
        Command::MoveLineDown,
        Command::DuplicateLine,
        Command::ToggleBothSidebars,
    ];

    /// Resolve this command to the work it performs
    ///
    /// Returns `None` for [`Command::Unbound`].
    pub fn action(self) -> Option<CommandAction> {
        use Command::*;

        match self {
            DeleteLine => Some(CommandAction::Edit(EditOperation::DeleteLine)),
            MoveLineUp => Some(CommandAction::Edit(EditOperation::MoveUp)),
            MoveLineDown => Some(CommandAction::Edit(EditOperation::MoveDown)),
            DuplicateLine => Some(CommandAction::Edit(EditOperation::Duplicate)),
            ToggleBothSidebars => Some(CommandAction::Host(SIDEBAR_TOGGLES)),
            Unbound => None,
        }
    }

    /// The line operation behind this command, if it edits text
    pub fn operation(self) -> Option<EditOperation> {
        match self.action()? {
            CommandAction::Edit(op) => Some(op),
            CommandAction::Host(_) => None,
        }
    }

    /// Stable id the host registers this command under
    pub fn id(self) -> &'static str {
        use Command::*;

        match self {
            DeleteLine => "delete-current-line",
            MoveLineUp => "move-line-up",
            MoveLineDown => "move-line-down",
            DuplicateLine => "duplicate-line",
            ToggleBothSidebars => "toggle-both-sidebars",
            Unbound => "unbound",
        }
    }

    /// Human-readable name for the command palette
    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            DeleteLine => "Delete current line",
            MoveLineUp => "Move current line up",
            MoveLineDown => "Move current line down",
            DuplicateLine => "Duplicate current line",
            ToggleBothSidebars => "Toggle both sidebars",
            Unbound => "Unbound",
        }
    }

    /// Icon id shown next to the command in the host UI
    pub fn icon(self) -> &'static str {
        use Command::*;

        match self {
            DeleteLine => "delete",
            MoveLineUp => "arrow-up-from-line",
            MoveLineDown => "arrow-down-from-line",
            DuplicateLine => "layers-2",
            ToggleBothSidebars => "columns-3",
            Unbound => "",
        }
    }

    /// Look up a registrable command by its stable id
    pub fn from_id(id: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_commands_map_to_operations() {
        assert_eq!(
            Command::DeleteLine.operation(),
            Some(EditOperation::DeleteLine)
        );
        assert_eq!(Command::MoveLineUp.operation(), Some(EditOperation::MoveUp));
        assert_eq!(
            Command::MoveLineDown.operation(),
            Some(EditOperation::MoveDown)
        );
        assert_eq!(
            Command::DuplicateLine.operation(),
            Some(EditOperation::Duplicate)
        );
    }

    #[test]
    fn test_sidebar_command_is_host_action() {
        assert_eq!(Command::ToggleBothSidebars.operation(), None);
        assert_eq!(
            Command::ToggleBothSidebars.action(),
            Some(CommandAction::Host(SIDEBAR_TOGGLES))
        );
    }

    #[test]
    fn test_command_unbound_has_no_action() {
        assert_eq!(Command::Unbound.action(), None);
        assert!(!Command::ALL.contains(&Command::Unbound));
    }

    #[test]
    fn test_ids_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_id(command.id()), Some(command));
        }
        assert_eq!(Command::from_id("unbound"), None);
        assert_eq!(Command::from_id("nope"), None);
    }
}
