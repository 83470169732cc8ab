//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dq_core::Command;

/// Convert a key event to an exploration command
///
/// Letters follow the one-key alphabet (`e`, `d`, `l`, `h`, `s`); arrows
/// walk left and right. Returns `None` for keys the UI handles itself,
/// such as `?` and control chords.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Control chords are handled by the app
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char('?') => None,
        KeyCode::Char(c) => Some(Command::from_key(c)),

        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),
        KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
