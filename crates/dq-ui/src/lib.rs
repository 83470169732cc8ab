//! dq-ui: Terminal UI layer using ratatui
//!
//! Panels for the current room, the path, the clue notebook and the
//! suspect table, plus help and accusation overlays.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::{App, UiMode};
