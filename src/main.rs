mod app;
mod config;
mod error;
mod ui;

use std::io::{self, Stderr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::category::Category;
use crate::app::tmdb::TmdbClient;
use crate::app::{App, ViewBranch};
use crate::config::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let log_file = cli
        .log_file
        .clone()
        .or_else(crate::config::default_log_file)
        .context("Could not determine a log location; pass --log-file")?;
    let guard = init_logging(&log_file)?;
    info!(?config, "starting");

    let image_base_url = config.image_base_url.clone();
    let client = TmdbClient::new(config).context("Failed to build HTTP client")?;

    install_panic_hook();

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Queries the terminal, so it has to run inside the alternate screen
    // and before any input is read.
    let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 16)));

    // create app and run it
    let mut app = App::new(Arc::new(client), image_base_url, Some(picker));
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "exited with error");
    }
    info!("shutting down");
    drop(guard);

    result
}

fn init_logging(log_file: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file_name = log_file
        .file_name()
        .context("Log file path has no file name")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Write to file; the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Leaves the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> Result<()> {
    app.mount();

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Apply whatever the fetch workers have finished
        app.process_messages();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                handle_key(app, key);
            }
        }

        app.on_tick();

        if app.exit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.exit = true,
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.previous_category(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(category) = c.to_digit(10).and_then(Category::from_number) {
                app.select_category(category);
            }
        }
        code => {
            // Selection only moves while the grid is on screen
            if !matches!(app.view.branch(), ViewBranch::Grid(_)) {
                return;
            }
            match code {
                KeyCode::Right | KeyCode::Char('l') => app.next_movie(),
                KeyCode::Left | KeyCode::Char('h') => app.previous_movie(),
                KeyCode::Down | KeyCode::Char('j') => app.movie_down(),
                KeyCode::Up | KeyCode::Char('k') => app.movie_up(),
                _ => {}
            }
        }
    }
}
