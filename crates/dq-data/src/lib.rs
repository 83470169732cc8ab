//! dq-data: Static scene data for Detective Quest
//!
//! Contains the built-in mansion layout.

pub mod mansion;

pub use mansion::{default_layout, RoomEntry, MANSION_ROOMS, MANSION_ROOT};
