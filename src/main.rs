//! ArtDrop - Terminal Mockup
//!
//! A terminal rendition of the ArtDrop art-kit delivery app design:
//! onboarding, browsing, checkout, simulated delivery tracking, reels,
//! messages and the artist dashboard, all over hard-coded mock data.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, TICK_MILLIS};
use domain::Catalog;
use infrastructure::CatalogRepository;
use presentation::{render_ui, InputHandler};

/// Entry point for the ArtDrop terminal mockup.
///
/// Loads the catalog (an optional JSON path may be passed as the first
/// argument, otherwise the built-in mock data is used), sets up the
/// terminal and runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues with
/// the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match std::env::args().nth(1) {
        Some(path) => CatalogRepository::load(&path)?,
        None => Catalog::default(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_catalog(catalog);
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
/// Renders the current screen, then waits up to one tick for a key.
/// A poll timeout is one timer tick, driving the simulated progress
/// screens; 'q' quits from any screen that is not capturing text.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(TICK_MILLIS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        event::KeyCode::Char('q') if !app.is_text_entry() => return Ok(()),
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        } else {
            app.tick();
        }
    }
}
