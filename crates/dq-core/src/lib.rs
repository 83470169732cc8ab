//! dq-core: Core logic for the Detective Quest mansion
//!
//! This crate contains the exploration rules and the evidence indexes with
//! no terminal I/O. Front-ends feed it [`Command`]s and render the
//! [`ExploreEvent`]s it produces.
//!
//! - [`Mansion`]: binary tree of rooms built from a [`Layout`]
//! - [`ClueLedger`]: ordered, duplicate-free set of collected clues
//! - [`SuspectIndex`]: hash table from suspect to attributed clues
//! - [`Explorer`]: the state machine tying them together

pub mod command;
pub mod error;
pub mod explore;
pub mod ledger;
pub mod mansion;
pub mod options;
pub mod path;
pub mod suspects;
pub mod verdict;

pub use command::{normalize_line, Command, CommandSource, ScriptedSource};
pub use error::{IndexError, LayoutError};
pub use explore::{
    run_session, try_run_session, EndReason, ExploreEvent, ExploreResult, ExploreState,
    Explorer, Moves, Released, SessionReport, Side,
};
pub use ledger::ClueLedger;
pub use mansion::{Clue, Layout, Mansion, Room, RoomDef, RoomId};
pub use options::SessionOptions;
pub use path::PathRecord;
pub use suspects::{Association, SuspectEntry, SuspectIndex};
pub use verdict::{judge, Verdict};
