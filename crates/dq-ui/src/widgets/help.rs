//! Help screen widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use dq_core::Command;

/// Overlay listing the command keys
#[derive(Default)]
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    /// One line per command, e.g. `e  go left`
    pub fn lines() -> Vec<String> {
        let mut lines: Vec<String> = Command::menu()
            .map(|command| format!("  {}  {}", command.key(), command))
            .collect();
        lines.push("  ←/→  go left / go right".to_string());
        lines.push("  ?  toggle this help".to_string());
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let text: Vec<Line> = Self::lines().into_iter().map(Line::from).collect();
        Paragraph::new(text)
            .block(
                Block::default()
                    .title("Commands (Esc or ? to close)")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}
