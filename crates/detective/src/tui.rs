//! Full-screen terminal session

use std::io;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use dq_core::{Explorer, Verdict};
use dq_ui::App;

use crate::error::AppError;

/// Run the ratatui front-end until the player dismisses the verdict
///
/// The terminal is restored even when the session fails.
pub fn run_tui(explorer: Explorer) -> Result<(Explorer, Option<Verdict>), AppError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(explorer);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    let verdict = app.verdict().cloned();
    Ok((app.into_explorer(), verdict))
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;

            if let Some(command) = app.handle_event(event) {
                app.execute(command)?;
            }

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}
