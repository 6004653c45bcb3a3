//! Terminal runner (default binary).
//!
//! One thread owns the session. Each pass of the loop draws a frame, waits
//! for a key until the next gravity tick is due, reports the elapsed time to
//! the session and then applies the key. Logs go to a file because stdout is
//! the game screen.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::GameState;
use blockfall::engine::Session;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::{FileStore, HighScores, KeyValueStore, MemoryStore};
use blockfall::term::{run_on_screen, FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockfall::Config;

/// Poll interval while no timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut file_store = match FileStore::open_or_reset(&config.store_path) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!(error = %e, path = %config.store_path.display(), "scores will not be saved");
            None
        }
    };
    let mut memory_store = MemoryStore::new();
    let store: &mut dyn KeyValueStore = match file_store.as_mut() {
        Some(s) => s,
        None => &mut memory_store,
    };

    let mut term = TerminalRenderer::new();
    let result = run_on_screen(&mut term, |term| run(&config, term, store));

    if let Some(store) = file_store {
        store.close()?;
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("open log file {}", config.log_path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(blockfall::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(config: &Config, term: &mut TerminalRenderer, store: &mut dyn KeyValueStore) -> Result<()> {
    let seed = config.resolve_seed();
    let game = GameState::with_randomizer(seed, config.randomizer);
    let mut session = Session::new(game);
    let mut scores = HighScores::load(store);
    info!(seed, randomizer = config.randomizer.as_str(), "session ready");

    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut frame = FrameBuffer::new(w, h);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            best: scores.best(),
        };
        view.render_with_hud(&session.snapshot(), &hud, Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        let timeout = session.until_next_tick().unwrap_or(IDLE_POLL);
        let input = if event::poll(timeout)? {
            Some(event::read()?)
        } else {
            None
        };

        // Time before the key belongs to the state before the key.
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        session.advance(elapsed);

        match input {
            Some(Event::Key(key)) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.dispatch(action);
                }
            }
            Some(Event::Resize(_, _)) => term.invalidate(),
            _ => {}
        }

        if session.drain_events().any(|lock| lock.game_over) {
            let (score, lines) = (session.game().score(), session.game().lines_cleared());
            info!(score, lines, "game finished");
            if let Some(rank) = scores.record(score, lines) {
                info!(rank, "new high score");
                if let Err(e) = scores.save(store) {
                    warn!(error = %e, "failed to save high scores");
                }
            }
        }
    }
}
