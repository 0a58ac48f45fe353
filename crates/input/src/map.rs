//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Arrow keys, `wasd`, and vi-style `hjkl` all move; `r` restarts and `q`
/// quits. Everything else is `Command::Unrecognized`.
pub fn map_key_event(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('k') | KeyCode::Char('K') => Command::Move(Direction::Up),
        KeyCode::Char('h') | KeyCode::Char('H') => Command::Move(Direction::Left),
        KeyCode::Char('j') | KeyCode::Char('J') => Command::Move(Direction::Down),
        KeyCode::Char('l') | KeyCode::Char('L') => Command::Move(Direction::Right),
        KeyCode::Char(c) => Command::from_char(c),
        _ => Command::Unrecognized,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
