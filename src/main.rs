//! Terminal Tetris runner (default binary).
//!
//! Reads the config, sends logs to a file (the terminal is in raw mode), then
//! drives the frame loop: render, wait for input until the next frame is due,
//! advance the game.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tetris::config::{config_path, Config};
use tetris::core::GameSnapshot;
use tetris::engine::{FrameClock, FrameLoop, FrameOutcome};
use tetris::input::{map_key, should_quit};
use tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let path = config_path();
    let config = match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ignoring config {}: {err}", path.display());
            Config::default()
        }
    };
    init_logging(&config)?;

    // The game runs fine without a config file on disk.
    match Config::write_default_if_missing(&path) {
        Ok(true) => info!(path = %path.display(), "wrote default config"),
        Ok(false) => {}
        Err(err) => warn!(path = %path.display(), error = %err, "could not write default config"),
    }

    let seed = config.seed.unwrap_or_else(|| fastrand::u32(..));
    info!(seed, frame_ms = config.frame_ms, "starting tetris");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let mut frame_loop = FrameLoop::with_seed(seed);
    let view = GameView::new(config.cell_width, config.cell_height).with_ghost(config.show_ghost);
    let frame_interval = Duration::from_millis(u64::from(config.frame_ms));

    let mut clock = FrameClock::start_now();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = TerminalRenderer::size().unwrap_or((80, 24));
        frame_loop.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame is due.
        let timeout = clock.until_next(Instant::now(), frame_interval);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = frame_loop.game().score(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = map_key(key) {
                        frame_loop.dispatch(command);
                        if command.is_session_command() {
                            // A new game starts with an empty drop timer.
                            clock.reset(Instant::now());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if clock.until_next(now, frame_interval).is_zero() {
            let elapsed = clock.elapsed_ms(now);
            if frame_loop.frame(elapsed) == FrameOutcome::GameOver {
                info!(
                    score = frame_loop.game().score(),
                    lines = frame_loop.game().lines(),
                    "game over"
                );
            }
        }
    }
}
