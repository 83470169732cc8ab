//! UI Widgets

mod help;
mod messages;
mod notebook;
mod path;
mod room;
mod suspects;

pub use help::HelpWidget;
pub use messages::MessagesWidget;
pub use notebook::NotebookWidget;
pub use path::PathWidget;
pub use room::RoomWidget;
pub use suspects::SuspectsWidget;
