mod api;
mod app;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod models;
mod quiz;
mod theme;
mod ui;
mod upload;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

use crate::api::{HttpBackend, QuizBackend};
use crate::app::{App, AppEvent, Command};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = cli::parse_args()?;
    let _log_guard = logging::init_logging(&config.log_file, config.verbose)?;
    info!(server = %config.server_url, "starting quizgen-tui");

    let backend: Arc<dyn QuizBackend> = Arc::new(
        HttpBackend::new(&config.server_url, config.request_timeout)
            .context("Failed to build HTTP client")?,
    );
    let runtime = Runtime::new().context("Failed to start tokio runtime")?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, &runtime, backend);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "quizgen-tui exited with an error");
    }
    info!("quizgen-tui stopped");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Runtime,
    backend: Arc<dyn QuizBackend>,
) -> Result<()> {
    let (tx, mut rx): (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) =
        mpsc::unbounded_channel();

    loop {
        // Apply finished requests before drawing
        while let Ok(event) = rx.try_recv() {
            app.apply(event);
        }
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = app.handle_key(key) {
                        spawn_command(runtime, Arc::clone(&backend), tx.clone(), command);
                    }
                }
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run `command` on the runtime and send its result back to the UI loop
fn spawn_command(
    runtime: &Runtime,
    backend: Arc<dyn QuizBackend>,
    tx: UnboundedSender<AppEvent>,
    command: Command,
) {
    runtime.spawn(async move {
        let event = command.execute(backend.as_ref()).await;
        // The receiver is gone only when the app is shutting down
        let _ = tx.send(event);
    });
}
