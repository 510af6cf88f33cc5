mod app;
mod config;
mod content;
mod event;
mod nav;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;

use app::App;
use config::Config;
use event::{AppEvent, EventHandler};

/// termfolio - a portfolio you can scroll in the terminal
#[derive(Parser, Debug)]
#[command(name = "termfolio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Open at a section (hero, about, why-me, experience, projects, contact)
    #[arg(short, long)]
    section: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging to file (avoids corrupting TUI output on stderr)
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/termfolio.log")
        .expect("Failed to open log file");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let args = Args::parse();
    let config = Config::default();
    log::info!("detected terminal theme: {:?}", config.theme);
    let tick_rate = config.timing.tick_rate;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config, args.section, size.width, size.height)?;

    let events = EventHandler::new(tick_rate);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle events
        match events.next()? {
            AppEvent::Key(key) => {
                app.handle_key(key)?;
            }
            AppEvent::Mouse(mouse) => {
                app.handle_mouse(mouse)?;
            }
            AppEvent::Resize(width, height) => {
                app.handle_resize(width, height);
            }
            AppEvent::Tick => {
                app.handle_tick();
            }
        }
    }

    Ok(())
}
