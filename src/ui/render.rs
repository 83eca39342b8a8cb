//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::{Constraint, Direction, Layout}, Frame, Terminal};
use std::time::Duration;

use super::app::App;
use super::components::{FilterBar, PrioritySelect, StatusBar, TasksList};
use super::events::handle_events;
use crate::config::Config;
use crate::constants::{FILTER_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::model::User;

/// Run the main TUI application
pub fn run_app(config: Config, user: User) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mouse_enabled = config.ui.mouse_enabled;
    let mut app = App::new(config, user);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app);

    // Save on the way out; losing edits because the terminal is being torn
    // down would be worse than a stale file
    if let Err(e) = app.user.save() {
        log::error!("saving user data on exit failed: {e:#}");
    }

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop: draw, then process at most one event per frame
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            let evt = event::read()?;
            let consumed = handle_events(evt, app)?;
            if consumed && app.should_quit {
                return Ok(());
            }
        }
    }
}

/// Render the full interface: filter bar, task list, status bar, overlays
fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(f.area());

    FilterBar::render(f, chunks[0], app);
    TasksList::render(f, chunks[1], app);
    StatusBar::render(f, chunks[2], app);

    // Overlays render on top of the base layout
    FilterBar::render_menu(f, app);
    FilterBar::render_custom_inputs(f, app);
    PrioritySelect::render(f, app);
}
