//! Line-mode front-end: prompts on a writer, one command per input line

use std::io::{self, BufRead, Write};

use dq_core::{judge, try_run_session, Explorer, Verdict};

use crate::error::AppError;
use crate::source::LineSource;

/// Play a whole session, then ask for an accusation unless `guess` is given
pub fn run_plain<R: BufRead, W: Write>(
    explorer: &mut Explorer,
    input: R,
    out: &mut W,
    guess: Option<&str>,
) -> Result<Verdict, AppError> {
    let mut source = LineSource::new(input);
    print_banner(out, explorer)?;

    try_run_session(explorer, &mut source, |explorer| {
        print_step(out, explorer).map_err(AppError::from)
    })?;

    print_summary(out, explorer)?;

    let verdict = match guess {
        Some(name) => judge(explorer.suspects(), Some(name)),
        None if explorer.suspects().most_cited().is_empty() => judge(explorer.suspects(), None),
        None => {
            write!(out, "\nWho is the culprit? ")?;
            out.flush()?;
            let answer = source.next_line();
            judge(explorer.suspects(), answer.as_deref())
        }
    };
    writeln!(out, "{verdict}")?;
    writeln!(out, "The end.")?;
    Ok(verdict)
}

pub fn print_banner<W: Write>(out: &mut W, explorer: &Explorer) -> io::Result<()> {
    let start = explorer.mansion().room(explorer.mansion().root());
    writeln!(out, "Welcome to the Mansion")?;
    writeln!(out, "You start at: {}", start.name)?;
    writeln!(
        out,
        "Commands: 'e' left, 'd' right, 'l' list clues, 'h' list suspects, 's' quit"
    )
}

/// Events of the last command, then the move prompt while the session runs
fn print_step<W: Write>(out: &mut W, explorer: &Explorer) -> io::Result<()> {
    for event in explorer.events() {
        if matches!(event, dq_core::ExploreEvent::Entered { .. }) {
            writeln!(out)?;
        }
        writeln!(out, "{event}")?;
    }
    if explorer.is_ended() {
        return Ok(());
    }

    let moves = explorer.available_moves();
    writeln!(out, "Choose a direction or action:")?;
    writeln!(
        out,
        "  (e) left  -> {}",
        moves.left.unwrap_or("(not available)")
    )?;
    writeln!(
        out,
        "  (d) right -> {}",
        moves.right.unwrap_or("(not available)")
    )?;
    writeln!(out, "  (l) list clues found (alphabetical order)")?;
    writeln!(out, "  (h) list suspects and their clues")?;
    writeln!(out, "  (s) leave the exploration")?;
    write!(out, "Option: ")?;
    out.flush()
}

/// Numbered path, clue summary and association table
pub fn print_summary<W: Write>(out: &mut W, explorer: &Explorer) -> io::Result<()> {
    let path = explorer.path_names();
    let noun = if path.len() == 1 { "room" } else { "rooms" };
    writeln!(out, "\nPath taken ({} {noun}):", path.len())?;
    for (i, name) in path.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, name)?;
    }
    if explorer.path().is_full() {
        writeln!(out, "  (path record full, later rooms not listed)")?;
    }

    writeln!(out, "\nClue summary:")?;
    if explorer.ledger().is_empty() {
        writeln!(out, "  No clues collected.")?;
    }
    for clue in explorer.ledger() {
        writeln!(out, "  - {clue}")?;
    }

    writeln!(out, "\nSuspects:")?;
    if explorer.suspects().is_empty() {
        writeln!(out, "  None recorded.")?;
    }
    for entry in explorer.suspects().iter() {
        writeln!(
            out,
            "  {} ({}): {}",
            entry.name,
            entry.citations(),
            entry.clues.join(", ")
        )?;
    }
    Ok(())
}
