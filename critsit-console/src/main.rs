//! critsit interactive TUI console.
//!
//! Opens the incident log and presents the entry form, review list and delete list in
//! the terminal.
//!
//! # Usage
//!
//! ```text
//! critsit-console [--data <PATH>]
//! ```
//!
//! The data file defaults to `CRITSIT_DATA`, then `blog_data.json`. Logs are written to
//! `critsit-console.log` next to the data file because the terminal belongs to the UI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, poll};
use tracing_appender::non_blocking::WorkerGuard;

use critsit::{Config, IncidentLog};
use critsit_console::app::{self, AppState};
use critsit_console::dispatch;
use critsit_console::error::ConsoleError;
use critsit_console::tui;

/// Interactive form for recording and reviewing critical-situation incidents.
#[derive(Parser, Debug)]
#[command(name = "critsit-console", version, about)]
struct Cli {
    /// Path of the JSON data file (overrides CRITSIT_DATA).
    #[arg(long)]
    data: Option<PathBuf>,
}

/// Tick interval for the event loop (approximately 30 fps).
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// File name of the console's log, placed beside the data file.
const LOG_FILE_NAME: &str = "critsit-console.log";

/// Initialize `tracing` to write to [`LOG_FILE_NAME`] in the data file's directory.
///
/// Reads `RUST_LOG` for filtering, defaulting to `"warn"`. The returned guard must be
/// held until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if the log directory cannot be created.
fn init_logging(data_path: &Path) -> Result<WorkerGuard, ConsoleError> {
    use tracing_subscriber::EnvFilter;

    let log_dir = match data_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_path(cli.data);

    let _guard = init_logging(&config.data_path).context("Failed to initialize logging")?;

    let mut log = IncidentLog::open(&config.data_path);
    let mut state = AppState::new(
        config.data_path.display().to_string(),
        log.records().to_vec(),
    );

    let mut terminal = tui::init_terminal().context("Failed to initialize terminal")?;

    // Restore the terminal before printing any panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = tui::restore_terminal();
        original_hook(info);
    }));

    let result = run_event_loop(&mut terminal, &mut state, &mut log);

    // Restore the terminal regardless of success or failure.
    tui::restore_terminal().context("Failed to restore terminal")?;

    result.context("Console event loop failed")
}

/// Main event loop: renders, services pending requests, then polls for a key.
///
/// Runs until `state.should_quit` is set to `true`.
fn run_event_loop(
    terminal: &mut tui::Term,
    state: &mut AppState,
    log: &mut IncidentLog,
) -> Result<(), ConsoleError> {
    loop {
        tui::render(terminal, state)?;

        dispatch::handle_requests(state, log);

        if poll(TICK_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = app::handle_key_event(key, state)
        {
            state.apply_action(action);
        }

        if state.should_quit {
            return Ok(());
        }
    }
}
