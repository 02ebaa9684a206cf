//! Key handling for the kiosk terminal

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use kiosk_app::Board;

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Show a specific board.
    Show(Board),
    /// Show the next board, wrapping around.
    NextBoard,
    /// Refetch the active board.
    Refresh,
}

/// Map a key event to a command.
///
/// Only press events count; repeats and releases are ignored.
#[must_use]
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('1') => Some(Command::Show(Board::Posts)),
        KeyCode::Char('2') => Some(Command::Show(Board::Users)),
        // With two boards, previous and next coincide.
        KeyCode::Tab | KeyCode::Right | KeyCode::Left => Some(Command::NextBoard),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Refresh),
        _ => None,
    }
}
