//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use dq_core::{judge, Command, ExploreResult, Explorer, IndexError, Verdict};

use crate::input::key_to_command;
use crate::widgets::{
    HelpWidget, MessagesWidget, NotebookWidget, PathWidget, RoomWidget, SuspectsWidget,
};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Walking the mansion
    Exploring,
    /// Showing help
    Help,
    /// Exploration is over, typing the name of the accused
    Accuse { input: String },
    /// Showing the verdict; any key exits
    Verdict,
}

/// Main application state
pub struct App {
    explorer: Explorer,

    /// Current UI mode
    mode: UiMode,

    /// Should quit
    should_quit: bool,

    /// Text of the events produced by the last command
    messages: Vec<String>,

    verdict: Option<Verdict>,
}

impl App {
    /// Create the application around a freshly started exploration
    pub fn new(explorer: Explorer) -> Self {
        let mut app = Self {
            explorer,
            mode: UiMode::Exploring,
            should_quit: false,
            messages: Vec::new(),
            verdict: None,
        };
        app.collect_messages();
        if app.explorer.is_ended() {
            app.begin_accusation();
        }
        app
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn into_explorer(self) -> Explorer {
        self.explorer
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Ctrl-C leaves from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        match &self.mode {
            UiMode::Exploring => self.handle_exploring_input(key),
            UiMode::Help => {
                self.handle_help_input(key);
                None
            }
            UiMode::Accuse { .. } => {
                self.handle_accuse_input(key);
                None
            }
            UiMode::Verdict => {
                self.should_quit = true;
                None
            }
        }
    }

    fn handle_exploring_input(&mut self, key: KeyEvent) -> Option<Command> {
        if key.code == KeyCode::Char('?') {
            self.mode = UiMode::Help;
            return None;
        }
        key_to_command(key)
    }

    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('?') => {
                self.mode = UiMode::Exploring;
            }
            _ => {}
        }
    }

    fn handle_accuse_input(&mut self, key: KeyEvent) {
        let UiMode::Accuse { input } = &mut self.mode else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let guess = std::mem::take(input);
                self.accuse(Some(&guess));
            }
            KeyCode::Esc => self.accuse(None),
            _ => {}
        }
    }

    /// Run one command through the explorer
    pub fn execute(&mut self, command: Command) -> Result<ExploreResult, IndexError> {
        let result = self.explorer.tick(command)?;
        self.collect_messages();

        if let ExploreResult::Ended(_) = result {
            if self.mode == UiMode::Exploring {
                self.begin_accusation();
            }
        }

        Ok(result)
    }

    /// Judge `guess` and show the verdict
    pub fn accuse(&mut self, guess: Option<&str>) {
        let verdict = judge(self.explorer.suspects(), guess);
        self.messages.push(verdict.to_string());
        self.verdict = Some(verdict);
        self.mode = UiMode::Verdict;
    }

    fn begin_accusation(&mut self) {
        if self.explorer.suspects().most_cited().is_empty() {
            self.accuse(None);
        } else {
            self.mode = UiMode::Accuse {
                input: String::new(),
            };
        }
    }

    fn collect_messages(&mut self) {
        self.messages = self
            .explorer
            .events()
            .iter()
            .map(ToString::to_string)
            .collect();
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let explorer = &self.explorer;

        // Layout: panels at top, messages below, key hints at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(3)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let room = explorer.mansion().room(explorer.current_room());
        let room_widget =
            RoomWidget::new(room, explorer.available_moves()).ended(explorer.is_ended());
        frame.render_widget(room_widget, left[0]);

        let path = explorer.path_names();
        let path_widget = PathWidget::new(&path).truncated(explorer.path().is_full());
        frame.render_widget(path_widget, left[1]);

        frame.render_widget(NotebookWidget::new(explorer.ledger()), right[0]);
        frame.render_widget(SuspectsWidget::new(explorer.suspects()), right[1]);

        frame.render_widget(MessagesWidget::new(&self.messages), chunks[1]);

        let hints = Paragraph::new(Line::from(Span::styled(
            "e/← left  d/→ right  l clues  h suspects  s quit  ? help",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hints, chunks[2]);

        // Render modal overlays based on mode
        match &self.mode {
            UiMode::Exploring => {}
            UiMode::Help => {
                let area = centered_rect(60, 60, frame.area());
                frame.render_widget(HelpWidget::new(), area);
            }
            UiMode::Accuse { input } => self.render_accuse(frame, input),
            UiMode::Verdict => self.render_verdict(frame),
        }
    }

    fn render_accuse(&self, frame: &mut Frame, input: &str) {
        let area = centered_rect(60, 30, frame.area());
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from("Who is the culprit?"),
            Line::default(),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Yellow)),
                Span::raw(input.to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Enter to accuse, Esc to accuse nobody",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text).block(
            Block::default()
                .title("Accusation")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_verdict(&self, frame: &mut Frame) {
        let area = centered_rect(60, 30, frame.area());
        frame.render_widget(Clear, area);

        let (message, color) = match &self.verdict {
            Some(verdict) if verdict.is_match() => (verdict.to_string(), Color::Green),
            Some(verdict) => (verdict.to_string(), Color::Red),
            None => (String::new(), Color::White),
        };

        let text = vec![
            Line::from(Span::styled(message, Style::default().fg(color))),
            Line::default(),
            Line::from(Span::styled(
                "Press any key to exit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(Block::default().title("Verdict").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
