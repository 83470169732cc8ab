//! Error types for mansion construction and evidence bookkeeping
//!
//! Construction and index growth are the only fallible operations. Both
//! reserve memory before touching their structure, so an error always
//! leaves the structure exactly as it was before the call.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while turning a [`crate::Layout`] into a [`crate::Mansion`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has no rooms")]
    Empty,

    #[error("room #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("room '{name}' is defined more than once")]
    DuplicateRoom { name: String },

    #[error("root room '{name}' is not defined")]
    UnknownRoot { name: String },

    #[error("room '{parent}' points to undefined room '{child}'")]
    UnknownRoom { parent: String, child: String },

    #[error("room '{name}' is reachable through more than one door")]
    SharedRoom { name: String },

    #[error("room '{name}' cannot be reached from the root")]
    Unreachable { name: String },

    #[error("out of memory while building the mansion: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// Errors raised while growing the suspect index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("out of memory while recording '{clue}' against '{suspect}': {source}")]
    OutOfMemory {
        clue: String,
        suspect: String,
        #[source]
        source: TryReserveError,
    },
}
