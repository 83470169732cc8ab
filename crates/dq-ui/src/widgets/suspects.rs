//! Suspect table widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};

use dq_core::SuspectIndex;

/// Suspects with their clues; the most cited are highlighted
pub struct SuspectsWidget<'a> {
    index: &'a SuspectIndex,
}

impl<'a> SuspectsWidget<'a> {
    pub fn new(index: &'a SuspectIndex) -> Self {
        Self { index }
    }
}

impl Widget for SuspectsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Suspects").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.index.is_empty() {
            Paragraph::new("No suspects yet.")
                .style(Style::default().fg(Color::DarkGray))
                .render(inner, buf);
            return;
        }

        let leaders = self.index.most_cited();
        let items: Vec<ListItem> = self
            .index
            .iter()
            .map(|entry| {
                let style = if leaders.contains(&entry.name) {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let clues = if entry.clues.is_empty() {
                    "no clues".to_string()
                } else {
                    entry.clues.join(", ")
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ({})", entry.name, entry.citations()), style),
                    Span::raw(format!(": {clues}")),
                ]))
            })
            .collect();
        Widget::render(List::new(items), inner, buf);
    }
}
