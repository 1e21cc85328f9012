//! pony-maze - Terminal client for the pony maze challenge
//!
//! Drives the remote maze service from the terminal: create a maze, fetch
//! and draw it, and move the pony with the arrow keys.

use std::io;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use pony_maze::application::{App, AppMode};
use pony_maze::infrastructure::{logging, HttpMazeApi, Settings};
use pony_maze::presentation::{render_ui, InputHandler};

/// Entry point for the pony maze client.
///
/// Parses settings, starts file logging, sets up the terminal and runs the
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::parse();
    logging::init(&settings.log_file)?;
    info!(base_url = %settings.base_url, player = %settings.player_name, "starting pony-maze");

    let api = HttpMazeApi::new(settings.base_url.clone());
    let mut app = App::new(Box::new(api)).with_settings(
        settings.dimensions(),
        settings.player_name.clone(),
        settings.transport_policy.into(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Service calls run inline on key presses; the next frame shows their
/// effect on the store.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
