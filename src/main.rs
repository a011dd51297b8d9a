mod audio;
mod controller;
mod discovery;
mod library;
mod logging;
mod model;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;

use audio::RodioEngine;
use controller::AppController;
use model::{Screen, SessionModel};
use view::AppView;

const DEFAULT_SONGS_DIR: &str = "./assets/mp3";

/// Render loop cadence: ~30 ticks per second.
const TICK_INTERVAL: Duration = Duration::from_millis(33);

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== jukebox-rs starting ===");

    let songs_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SONGS_DIR));
    let songs = library::load_songs(&songs_dir);
    tracing::info!(count = songs.len(), dir = %songs_dir.display(), "song catalog loaded");

    let model = Arc::new(SessionModel::new(songs));

    // The Bluetooth worker runs on its own cadence for the whole session and
    // publishes into its channel slot; the UI only ever reads the latest.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let bt_worker = discovery::bluetooth::spawn(model.clone(), shutdown_rx);

    let engine = RodioEngine::new()?;
    let controller = AppController::new(model.clone(), Box::new(engine));

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Stop the discovery worker; it polls the flag at its idle boundary.
    let _ = shutdown_tx.send(true);
    let _ = bt_worker.await;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("jukebox-rs shutting down");
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<SessionModel>,
    controller: AppController,
) -> Result<()> {
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let screen = model.current_screen().await;

        // The WiFi scan runs inline on the render path while its screen is
        // visible, gated so at most one bounded scan can delay a frame per
        // re-scan window.
        if screen == Screen::WifiSettings {
            discovery::wifi::refresh_if_stale(&model).await;
        }

        // Natural end-of-track detection happens while the player is visible.
        if screen == Screen::Player {
            controller.check_auto_advance().await;
        }

        let snapshot = controller.render_snapshot().await;
        terminal.draw(|f| AppView::render(f, &snapshot, model.songs()))?;

        // Drain pending input without blocking the tick.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await?;
            }
        }

        if model.should_quit().await {
            return Ok(());
        }
    }
}
