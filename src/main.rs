//! Dynaform TUI - schema-driven forms in the terminal
//!
//! A Ratatui-based TUI that renders a form for the selected form type,
//! validates required fields on submit and keeps submitted records in
//! per-type tables that can be edited or deleted.

mod app;
mod config;
mod error;
mod event;
mod platform;
mod schema;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::{AppEvent, EventPump};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tick rate for toast countdowns and progress easing (~30fps)
const TICK_RATE: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load()?;
    let schema = config.load_schema()?;
    tracing::info!("Loaded {} form types", schema.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(schema, &config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory; stderr would draw over the UI,
/// so it is only used when no log file can be opened.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dynaform_tui=info".into());

    let log_file = TuiConfig::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        File::create(path).ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventPump::spawn(TICK_RATE);
    terminal.draw(|frame| ui::draw(frame, app))?;

    while let Some(event) = events.next().await {
        let needs_redraw = match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key)?;
                true
            }
            // Terminal was resized - layout is recalculated on draw
            AppEvent::Input(Event::Resize(_, _)) => true,
            AppEvent::Input(_) => false,
            AppEvent::Tick => app.on_tick(Instant::now()),
        };

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }

        if needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
        }
    }

    Ok(())
}
