//! Line-oriented command source over any buffered reader

use std::io::BufRead;

use dq_core::{normalize_line, Command, CommandSource};

/// Reads one command per line; end of input or a read error quits
pub struct LineSource<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// Next raw line without its terminator, or `None` at end of input
    pub fn next_line(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => {
                self.exhausted = true;
                None
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(trimmed);
                Some(line)
            }
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R: BufRead> CommandSource for LineSource<R> {
    fn next_command(&mut self) -> Command {
        self.next_line()
            .map_or(Command::Quit, |line| normalize_line(&line))
    }
}
