//! Current room widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use dq_core::{Moves, Room};

/// Where the player stands and which doors lead on
pub struct RoomWidget<'a> {
    room: &'a Room,
    moves: Moves<'a>,
    ended: bool,
}

impl<'a> RoomWidget<'a> {
    pub fn new(room: &'a Room, moves: Moves<'a>) -> Self {
        Self {
            room,
            moves,
            ended: false,
        }
    }

    pub fn ended(mut self, ended: bool) -> Self {
        self.ended = ended;
        self
    }

    fn door_line(key: char, label: &str, target: Option<&str>) -> Line<'static> {
        let (text, color) = match target {
            Some(name) => (name.to_string(), Color::Green),
            None => ("(not available)".to_string(), Color::DarkGray),
        };
        Line::from(vec![
            Span::styled(format!("  ({key}) {label} -> "), Style::default().fg(Color::Gray)),
            Span::styled(text, Style::default().fg(color)),
        ])
    }
}

impl Widget for RoomWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            self.room.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))];

        if let Some(clue) = &self.room.clue {
            lines.push(Line::from(format!("Clue here: {}", clue.text)));
        }
        lines.push(Line::default());

        if self.ended {
            lines.push(Line::from("The exploration is over."));
        } else {
            lines.push(Self::door_line('e', "left ", self.moves.left));
            lines.push(Self::door_line('d', "right", self.moves.right));
        }

        Paragraph::new(lines)
            .block(Block::default().title("Room").borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
