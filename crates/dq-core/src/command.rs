//! Player commands and where they come from
//!
//! The exploration engine consumes one [`Command`] per turn from a
//! [`CommandSource`]. Terminal front-ends and line readers normalize their
//! raw input into the single-key alphabet below.

use std::collections::VecDeque;
use std::fmt;

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// One turn of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum Command {
    /// Take the left door
    #[strum(serialize = "go left")]
    Left,
    /// Take the right door
    #[strum(serialize = "go right")]
    Right,
    /// Show collected clues in alphabetical order
    #[strum(serialize = "list clues")]
    ListClues,
    /// Show suspects and the clues attributed to them
    #[strum(serialize = "list suspects")]
    ListAssociations,
    /// Stop exploring
    #[strum(serialize = "quit")]
    Quit,
    /// Any key outside the alphabet
    #[strum(serialize = "invalid")]
    Invalid(char),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Invalid(key) => write!(f, "invalid '{key}'"),
            other => {
                let name: &'static str = other.into();
                f.write_str(name)
            }
        }
    }
}

impl Command {
    /// Map a key to a command, ignoring case
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'e' => Command::Left,
            'd' => Command::Right,
            'l' => Command::ListClues,
            'h' => Command::ListAssociations,
            's' => Command::Quit,
            other => Command::Invalid(other),
        }
    }

    /// Key bound to this command
    pub fn key(&self) -> char {
        match self {
            Command::Left => 'e',
            Command::Right => 'd',
            Command::ListClues => 'l',
            Command::ListAssociations => 'h',
            Command::Quit => 's',
            Command::Invalid(c) => *c,
        }
    }

    /// Every valid command, in menu order
    pub fn menu() -> impl Iterator<Item = Command> {
        Command::iter().filter(|c| !matches!(c, Command::Invalid(_)))
    }
}

/// Reduce one line of input to a command
///
/// The first non-blank character decides. A blank line counts as quit.
pub fn normalize_line(line: &str) -> Command {
    line.chars()
        .find(|c| !c.is_whitespace())
        .map_or(Command::Quit, Command::from_key)
}

/// Anything that can hand the engine its next command
///
/// Implementations must synthesize [`Command::Quit`] once their input is
/// exhausted, so a session always terminates.
pub trait CommandSource {
    fn next_command(&mut self) -> Command;
}

/// Commands queued in memory, then quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Command>,
}

impl ScriptedSource {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }

    /// Build from raw keys, e.g. `"eels"`
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Command::from_key))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl CommandSource for ScriptedSource {
    fn next_command(&mut self) -> Command {
        self.queue.pop_front().unwrap_or(Command::Quit)
    }
}
