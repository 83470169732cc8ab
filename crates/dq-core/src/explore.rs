//! Exploration engine
//!
//! Drives one walk through the mansion. The engine sits in a room until a
//! command moves it, and ends when it enters a room with no doors or the
//! player quits. Entering a room with a pending clue records the clue in
//! the ledger and, when the clue names a suspect, in the suspect index.

use std::fmt;

use serde::Serialize;
use strum::Display;

use crate::command::{Command, CommandSource};
use crate::error::IndexError;
use crate::ledger::ClueLedger;
use crate::mansion::{Mansion, RoomId};
use crate::options::SessionOptions;
use crate::path::PathRecord;
use crate::suspects::{Association, SuspectEntry, SuspectIndex};

/// Which door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    #[strum(to_string = "reached a room with no exits")]
    ReachedLeaf,
    #[strum(to_string = "quit by the player")]
    Quit,
}

/// Where the engine is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreState {
    AtRoom(RoomId),
    Ended(EndReason),
}

/// Outcome of one [`Explorer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreResult {
    /// Waiting for the next command
    Continue,
    /// Session is over
    Ended(EndReason),
}

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreEvent {
    Entered { room: String },
    ClueFound { clue: String },
    ClueAlreadyKnown { clue: String },
    SuspectNoted { suspect: String, clue: String },
    ReachedLeaf { room: String },
    MoveUnavailable { side: Side },
    InvalidCommand { key: char },
    ClueList { clues: Vec<String> },
    Associations { entries: Vec<SuspectEntry> },
    Quit,
}

impl fmt::Display for ExploreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExploreEvent::Entered { room } => write!(f, "You are in: {room}"),
            ExploreEvent::ClueFound { clue } => {
                write!(f, "You found a clue: \"{clue}\" (added to your notebook)")
            }
            ExploreEvent::ClueAlreadyKnown { clue } => {
                write!(f, "You see the clue \"{clue}\", but it is already in your notebook.")
            }
            ExploreEvent::SuspectNoted { suspect, clue } => {
                write!(f, "The clue \"{clue}\" points to {suspect}.")
            }
            ExploreEvent::ReachedLeaf { room } => {
                write!(f, "{room} has no further doors. End of the path.")
            }
            ExploreEvent::MoveUnavailable { side } => {
                write!(f, "There is no room to the {side}. Try another option.")
            }
            ExploreEvent::InvalidCommand { key } => write!(
                f,
                "Invalid option '{key}'. Use 'e', 'd', 'l', 'h' or 's'."
            ),
            ExploreEvent::ClueList { clues } => {
                if clues.is_empty() {
                    return f.write_str("You have not found any clues yet.");
                }
                f.write_str("Clues found (alphabetical order):")?;
                for clue in clues {
                    write!(f, "\n  - {clue}")?;
                }
                Ok(())
            }
            ExploreEvent::Associations { entries } => {
                if entries.is_empty() {
                    return f.write_str("No suspects recorded yet.");
                }
                f.write_str("Suspects and their clues:")?;
                for entry in entries {
                    if entry.clues.is_empty() {
                        write!(f, "\n  {}: no clues", entry.name)?;
                    } else {
                        write!(
                            f,
                            "\n  {} ({}): {}",
                            entry.name,
                            entry.citations(),
                            entry.clues.join(", ")
                        )?;
                    }
                }
                Ok(())
            }
            ExploreEvent::Quit => f.write_str("Exploration ended by the player."),
        }
    }
}

/// Names of the rooms behind each door of the current room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moves<'a> {
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

/// Everything worth showing once the session is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub end_reason: Option<EndReason>,
    pub path: Vec<String>,
    pub clues: Vec<String>,
    pub suspects: Vec<SuspectEntry>,
    pub most_cited: Vec<String>,
}

/// Counts returned by [`Explorer::teardown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Released {
    pub rooms: usize,
    pub clues: usize,
    pub suspects: usize,
}

/// One exploration session
pub struct Explorer {
    mansion: Mansion,
    ledger: ClueLedger,
    suspects: SuspectIndex,
    path: PathRecord,
    state: ExploreState,
    current: RoomId,

    /// Events from the latest step
    events: Vec<ExploreEvent>,

    /// Every event of the session
    history: Vec<ExploreEvent>,
}

impl Explorer {
    /// Start a session at the mansion's root
    ///
    /// The root's clue is collected before the first command. A root with
    /// no doors ends the session immediately.
    pub fn new(mansion: Mansion, options: SessionOptions) -> Result<Self, IndexError> {
        let root = mansion.root();
        let mut explorer = Self {
            mansion,
            ledger: ClueLedger::new(),
            suspects: SuspectIndex::new(options.effective_buckets()),
            path: PathRecord::new(options.path_capacity),
            state: ExploreState::AtRoom(root),
            current: root,
            events: Vec::new(),
            history: Vec::new(),
        };
        explorer.enter(root)?;
        Ok(explorer)
    }

    pub fn state(&self) -> ExploreState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, ExploreState::Ended(_))
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.state {
            ExploreState::Ended(reason) => Some(reason),
            ExploreState::AtRoom(_) => None,
        }
    }

    /// Room the player stands in, or stood in last
    pub fn current_room(&self) -> RoomId {
        self.current
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    pub fn path(&self) -> &PathRecord {
        &self.path
    }

    /// Room names along the recorded path
    pub fn path_names(&self) -> Vec<String> {
        self.path
            .rooms()
            .iter()
            .map(|&id| self.mansion.room(id).name.clone())
            .collect()
    }

    /// Events produced by the latest step
    pub fn events(&self) -> &[ExploreEvent] {
        &self.events
    }

    /// Every event since the session started
    pub fn history(&self) -> &[ExploreEvent] {
        &self.history
    }

    /// Doors available from the current room; none once ended
    pub fn available_moves(&self) -> Moves<'_> {
        let ExploreState::AtRoom(id) = self.state else {
            return Moves::default();
        };
        let (left, right) = self.mansion.children(id);
        Moves {
            left: self.room_name(left),
            right: self.room_name(right),
        }
    }

    fn room_name(&self, id: Option<RoomId>) -> Option<&str> {
        id.map(|id| self.mansion.room(id).name.as_str())
    }

    fn emit(&mut self, event: ExploreEvent) {
        self.history.push(event.clone());
        self.events.push(event);
    }

    /// Apply one command
    ///
    /// Once the session has ended every command is ignored.
    pub fn tick(&mut self, command: Command) -> Result<ExploreResult, IndexError> {
        self.events.clear();
        let current = match self.state {
            ExploreState::Ended(reason) => return Ok(ExploreResult::Ended(reason)),
            ExploreState::AtRoom(id) => id,
        };

        match command {
            Command::Left => self.step(current, Side::Left)?,
            Command::Right => self.step(current, Side::Right)?,
            Command::ListClues => {
                let clues = self.ledger.to_vec();
                self.emit(ExploreEvent::ClueList { clues });
            }
            Command::ListAssociations => {
                let entries = self.suspects.list_all();
                self.emit(ExploreEvent::Associations { entries });
            }
            Command::Quit => {
                self.state = ExploreState::Ended(EndReason::Quit);
                self.emit(ExploreEvent::Quit);
            }
            Command::Invalid(key) => self.emit(ExploreEvent::InvalidCommand { key }),
        }

        Ok(match self.state {
            ExploreState::AtRoom(_) => ExploreResult::Continue,
            ExploreState::Ended(reason) => ExploreResult::Ended(reason),
        })
    }

    fn step(&mut self, from: RoomId, side: Side) -> Result<(), IndexError> {
        let (left, right) = self.mansion.children(from);
        let target = match side {
            Side::Left => left,
            Side::Right => right,
        };
        match target {
            Some(next) => self.enter(next),
            None => {
                self.emit(ExploreEvent::MoveUnavailable { side });
                Ok(())
            }
        }
    }

    /// Move into `id` and apply its entry effect
    ///
    /// The only fallible step, attributing the room's clue to its suspect,
    /// runs before anything else changes, so an error leaves the explorer
    /// in the room it was in.
    fn enter(&mut self, id: RoomId) -> Result<(), IndexError> {
        let association = self.associate_clue(id)?;

        self.current = id;
        self.path.record(id);
        let room = self.mansion.room(id).name.clone();
        self.emit(ExploreEvent::Entered { room: room.clone() });
        self.record_clue(id, association);

        if self.mansion.is_leaf(id) {
            self.state = ExploreState::Ended(EndReason::ReachedLeaf);
            self.emit(ExploreEvent::ReachedLeaf { room });
        } else {
            self.state = ExploreState::AtRoom(id);
        }
        Ok(())
    }

    /// Pick up the clue in `id`, if it is still there
    #[cfg(test)]
    fn collect_clue(&mut self, id: RoomId) -> Result<(), IndexError> {
        let association = self.associate_clue(id)?;
        self.record_clue(id, association);
        Ok(())
    }

    /// Attribute a pending clue in `id` to its suspect
    fn associate_clue(&mut self, id: RoomId) -> Result<Association, IndexError> {
        let room = self.mansion.room(id);
        match &room.clue {
            Some(clue) if room.clue_pending => match clue.suspect.as_deref() {
                Some(suspect) => self.suspects.associate(&clue.text, suspect),
                None => Ok(Association::Ignored),
            },
            _ => Ok(Association::Ignored),
        }
    }

    /// Infallible half of clue collection: ledger, events, pending flag
    fn record_clue(&mut self, id: RoomId, association: Association) {
        let room = self.mansion.room(id);
        let Some(clue) = room.clue.clone() else {
            return;
        };
        if !room.clue_pending {
            self.emit(ExploreEvent::ClueAlreadyKnown { clue: clue.text });
            return;
        }

        if self.ledger.insert(&clue.text) {
            self.emit(ExploreEvent::ClueFound {
                clue: clue.text.clone(),
            });
        } else {
            self.emit(ExploreEvent::ClueAlreadyKnown {
                clue: clue.text.clone(),
            });
        }
        if let (Association::NewSuspect | Association::NewClue, Some(suspect)) =
            (association, clue.suspect)
        {
            self.emit(ExploreEvent::SuspectNoted {
                suspect,
                clue: clue.text,
            });
        }

        self.mansion.room_mut(id).clue_pending = false;
    }

    /// Snapshot of the session for end-of-game display
    pub fn report(&self) -> SessionReport {
        SessionReport {
            end_reason: self.end_reason(),
            path: self.path_names(),
            clues: self.ledger.to_vec(),
            suspects: self.suspects.list_all(),
            most_cited: self.suspects.most_cited(),
        }
    }

    /// Release the mansion and both indexes
    pub fn teardown(self) -> Released {
        Released {
            rooms: self.mansion.teardown(),
            clues: self.ledger.teardown(),
            suspects: self.suspects.teardown(),
        }
    }
}

/// Feed commands from `source` until the session ends
///
/// `on_step` sees the explorer once before the first command and again
/// after every command, which is where front-ends print events and the
/// move prompt.
pub fn run_session(
    explorer: &mut Explorer,
    source: &mut impl CommandSource,
    mut on_step: impl FnMut(&Explorer),
) -> Result<EndReason, IndexError> {
    try_run_session(explorer, source, |explorer| {
        on_step(explorer);
        Ok(())
    })
}

/// Like [`run_session`], but stops at the first error from `on_step`
///
/// No further command is read once `on_step` fails.
pub fn try_run_session<E: From<IndexError>>(
    explorer: &mut Explorer,
    source: &mut impl CommandSource,
    mut on_step: impl FnMut(&Explorer) -> Result<(), E>,
) -> Result<EndReason, E> {
    on_step(explorer)?;
    loop {
        if let Some(reason) = explorer.end_reason() {
            return Ok(reason);
        }
        let command = source.next_command();
        explorer.tick(command)?;
        on_step(explorer)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ScriptedSource;
    use crate::mansion::{Layout, RoomDef};

    fn scenario() -> Mansion {
        Mansion::build(&Layout {
            root: "Hall".to_string(),
            rooms: vec![
                RoomDef::new("Hall").left("Corredor").right("SalaEstar"),
                RoomDef::new("Corredor").left("Biblioteca").right("SalaEstudo"),
                RoomDef::new("Biblioteca")
                    .clue("Manuscrito Antigo")
                    .suspect("Professor X"),
                RoomDef::new("SalaEstudo"),
                RoomDef::new("SalaEstar").left("Cozinha").right("Jardim"),
                RoomDef::new("Cozinha")
                    .clue("Pegada de Lama")
                    .suspect("Jardineiro"),
                RoomDef::new("Jardim"),
            ],
        })
        .unwrap()
    }

    fn explorer() -> Explorer {
        Explorer::new(scenario(), SessionOptions::default()).unwrap()
    }

    #[test]
    fn test_starts_at_root() {
        let ex = explorer();
        assert_eq!(ex.state(), ExploreState::AtRoom(ex.mansion().root()));
        assert_eq!(ex.path_names(), ["Hall"]);
        assert_eq!(
            ex.events(),
            [ExploreEvent::Entered {
                room: "Hall".to_string()
            }]
        );
        let moves = ex.available_moves();
        assert_eq!(moves.left, Some("Corredor"));
        assert_eq!(moves.right, Some("SalaEstar"));
    }

    #[test]
    fn test_leaf_ends_session() {
        let mut ex = explorer();
        assert_eq!(ex.tick(Command::Left).unwrap(), ExploreResult::Continue);
        assert_eq!(
            ex.tick(Command::Left).unwrap(),
            ExploreResult::Ended(EndReason::ReachedLeaf)
        );
        assert!(ex.is_ended());
        assert_eq!(ex.available_moves(), Moves::default());
        assert_eq!(ex.ledger().to_vec(), ["Manuscrito Antigo"]);
        assert_eq!(ex.suspects().citation_count("Professor X"), 1);
        assert!(matches!(
            ex.events().last(),
            Some(ExploreEvent::ReachedLeaf { room }) if room == "Biblioteca"
        ));
    }

    #[test]
    fn test_commands_after_end_are_ignored() {
        let mut ex = explorer();
        ex.tick(Command::Quit).unwrap();
        assert_eq!(
            ex.tick(Command::Left).unwrap(),
            ExploreResult::Ended(EndReason::Quit)
        );
        assert!(ex.events().is_empty());
        assert_eq!(ex.path_names(), ["Hall"]);
    }

    #[test]
    fn test_failed_moves_do_not_extend_path() {
        let layout = Layout {
            root: "Hall".to_string(),
            rooms: vec![
                RoomDef::new("Hall").left("Corredor"),
                RoomDef::new("Corredor"),
            ],
        };
        let mut ex = Explorer::new(Mansion::build(&layout).unwrap(), SessionOptions::default())
            .unwrap();
        ex.tick(Command::Right).unwrap();
        assert_eq!(
            ex.events(),
            [ExploreEvent::MoveUnavailable { side: Side::Right }]
        );
        ex.tick(Command::Invalid('x')).unwrap();
        ex.tick(Command::ListClues).unwrap();
        ex.tick(Command::ListAssociations).unwrap();
        assert_eq!(ex.path_names(), ["Hall"]);
        assert_eq!(ex.state(), ExploreState::AtRoom(ex.mansion().root()));
    }

    #[test]
    fn test_listing_commands_are_read_only() {
        let mut ex = explorer();
        ex.tick(Command::ListClues).unwrap();
        assert_eq!(ex.events(), [ExploreEvent::ClueList { clues: vec![] }]);
        assert_eq!(
            ex.events()[0].to_string(),
            "You have not found any clues yet."
        );
        ex.tick(Command::ListAssociations).unwrap();
        assert_eq!(ex.events()[0].to_string(), "No suspects recorded yet.");
        assert!(ex.ledger().is_empty());
        assert!(ex.suspects().is_empty());
    }

    #[test]
    fn test_failed_entry_leaves_explorer_in_place() {
        let mut ex = explorer();
        ex.tick(Command::Left).unwrap();
        let corredor = ex.mansion().find("Corredor").unwrap();
        let library = ex.mansion().find("Biblioteca").unwrap();
        let history = ex.history().to_vec();

        ex.suspects.fail_next_associate();
        assert!(ex.tick(Command::Left).is_err());

        assert_eq!(ex.state(), ExploreState::AtRoom(corredor));
        assert_eq!(ex.current_room(), corredor);
        assert_eq!(ex.path_names(), ["Hall", "Corredor"]);
        assert_eq!(ex.history(), history.as_slice());
        assert!(ex.ledger().is_empty());
        assert!(ex.suspects().is_empty());
        assert!(ex.mansion().room(library).clue_pending);

        // retrying succeeds once memory is available again
        assert_eq!(
            ex.tick(Command::Left).unwrap(),
            ExploreResult::Ended(EndReason::ReachedLeaf)
        );
        assert_eq!(ex.ledger().to_vec(), ["Manuscrito Antigo"]);
        assert_eq!(ex.suspects().citation_count("Professor X"), 1);
    }

    #[test]
    fn test_second_collection_reports_already_known() {
        let mut ex = explorer();
        ex.tick(Command::Left).unwrap();
        ex.tick(Command::Left).unwrap();
        let library = ex.mansion().find("Biblioteca").unwrap();

        ex.events.clear();
        ex.collect_clue(library).unwrap();
        assert_eq!(
            ex.events(),
            [ExploreEvent::ClueAlreadyKnown {
                clue: "Manuscrito Antigo".to_string()
            }]
        );
        assert_eq!(ex.ledger().len(), 1);
        assert_eq!(ex.suspects().citation_count("Professor X"), 1);
    }

    #[test]
    fn test_same_clue_planted_twice() {
        let layout = Layout {
            root: "Hall".to_string(),
            rooms: vec![
                RoomDef::new("Hall")
                    .left("Copa")
                    .clue("Luva Rasgada")
                    .suspect("Mordomo"),
                RoomDef::new("Copa")
                    .left("Despensa")
                    .clue("Luva Rasgada")
                    .suspect("Cozinheira"),
                RoomDef::new("Despensa"),
            ],
        };
        let mut ex = Explorer::new(Mansion::build(&layout).unwrap(), SessionOptions::default())
            .unwrap();
        ex.tick(Command::Left).unwrap();
        assert_eq!(
            ex.events(),
            [
                ExploreEvent::Entered {
                    room: "Copa".to_string()
                },
                ExploreEvent::ClueAlreadyKnown {
                    clue: "Luva Rasgada".to_string()
                },
                ExploreEvent::SuspectNoted {
                    suspect: "Cozinheira".to_string(),
                    clue: "Luva Rasgada".to_string()
                },
            ]
        );
        assert_eq!(ex.ledger().len(), 1);
        assert_eq!(ex.suspects().citation_count("Mordomo"), 1);
        assert_eq!(ex.suspects().citation_count("Cozinheira"), 1);
    }

    #[test]
    fn test_root_leaf_ends_immediately() {
        let layout = Layout {
            root: "Sótão".to_string(),
            rooms: vec![RoomDef::new("Sótão").clue("Diário").suspect("Governanta")],
        };
        let ex = Explorer::new(Mansion::build(&layout).unwrap(), SessionOptions::default())
            .unwrap();
        assert_eq!(ex.end_reason(), Some(EndReason::ReachedLeaf));
        assert_eq!(ex.ledger().to_vec(), ["Diário"]);
        assert_eq!(ex.path_names(), ["Sótão"]);
    }

    #[test]
    fn test_path_capacity_truncates_display_only() {
        let options = SessionOptions::default().with_path_capacity(2);
        let mut ex = Explorer::new(scenario(), options).unwrap();
        ex.tick(Command::Right).unwrap();
        ex.tick(Command::Left).unwrap();
        assert_eq!(ex.end_reason(), Some(EndReason::ReachedLeaf));
        assert_eq!(ex.path_names(), ["Hall", "SalaEstar"]);
        // The clue in the dropped room was still collected.
        assert_eq!(ex.ledger().to_vec(), ["Pegada de Lama"]);
    }

    #[test]
    fn test_try_run_session_stops_on_callback_error() {
        let mut ex = explorer();
        let mut source = ScriptedSource::from_keys("eels");
        let mut calls = 0;
        let result: Result<EndReason, IndexError> = try_run_session(&mut ex, &mut source, |_| {
            calls += 1;
            if calls == 2 {
                let overflow = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
                return Err(IndexError::OutOfMemory {
                    clue: String::new(),
                    suspect: String::new(),
                    source: overflow,
                });
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
        // only the first command was consumed
        assert_eq!(source.remaining(), 3);
        assert_eq!(ex.path_names(), ["Hall", "Corredor"]);
    }

    #[test]
    fn test_run_session_end_to_end() {
        let mut ex = explorer();
        let mut source = ScriptedSource::from_keys("eels");
        let mut steps = 0;
        let reason = run_session(&mut ex, &mut source, |_| steps += 1).unwrap();
        assert_eq!(reason, EndReason::ReachedLeaf);
        // Initial view plus two moves; the leaf ends it before 'l'.
        assert_eq!(steps, 3);
        assert_eq!(source.remaining(), 2);

        let report = ex.report();
        assert_eq!(report.path, ["Hall", "Corredor", "Biblioteca"]);
        assert_eq!(report.clues, ["Manuscrito Antigo"]);
        assert_eq!(report.most_cited, ["Professor X"]);
    }

    #[test]
    fn test_teardown_counts() {
        let mut ex = explorer();
        ex.tick(Command::Right).unwrap();
        ex.tick(Command::Left).unwrap();
        let released = ex.teardown();
        assert_eq!(
            released,
            Released {
                rooms: 7,
                clues: 1,
                suspects: 1
            }
        );
    }

    #[test]
    fn test_association_display_lists_clues() {
        let event = ExploreEvent::Associations {
            entries: vec![
                SuspectEntry {
                    name: "Jardineiro".to_string(),
                    clues: vec!["Pegada de Lama".to_string(), "Pó de Folhas".to_string()],
                },
                SuspectEntry {
                    name: "Fantasma".to_string(),
                    clues: vec![],
                },
            ],
        };
        assert_eq!(
            event.to_string(),
            "Suspects and their clues:\n  Jardineiro (2): Pegada de Lama, Pó de Folhas\n  Fantasma: no clues"
        );
    }
}
