//! Clue notebook widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};

use dq_core::ClueLedger;

/// Collected clues in alphabetical order
pub struct NotebookWidget<'a> {
    ledger: &'a ClueLedger,
}

impl<'a> NotebookWidget<'a> {
    pub fn new(ledger: &'a ClueLedger) -> Self {
        Self { ledger }
    }
}

impl Widget for NotebookWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("Notebook ({})", self.ledger.len()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.ledger.is_empty() {
            Paragraph::new("No clues yet.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .ledger
            .iter()
            .map(|clue| ListItem::new(format!("- {clue}")).style(Style::default().fg(Color::Yellow)))
            .collect();
        Widget::render(List::new(items), inner, buf);
    }
}
