//! Path record widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

/// Rooms entered so far, numbered from 1
pub struct PathWidget<'a> {
    rooms: &'a [String],
    truncated: bool,
}

impl<'a> PathWidget<'a> {
    pub fn new(rooms: &'a [String]) -> Self {
        Self {
            rooms,
            truncated: false,
        }
    }

    /// Mark the record as full, so later rooms are missing
    pub fn truncated(mut self, truncated: bool) -> Self {
        self.truncated = truncated;
        self
    }
}

impl Widget for PathWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.truncated {
            format!("Path ({} rooms, full)", self.rooms.len())
        } else {
            format!("Path ({} rooms)", self.rooms.len())
        };
        let items: Vec<ListItem> = self
            .rooms
            .iter()
            .enumerate()
            .map(|(i, name)| ListItem::new(format!("{}) {}", i + 1, name)))
            .collect();
        Widget::render(
            List::new(items).block(Block::default().title(title).borders(Borders::ALL)),
            area,
            buf,
        );
    }
}
