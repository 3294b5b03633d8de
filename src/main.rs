//! Terminal snake runner.
//!
//! Wires the game loop controller to crossterm input, the framebuffer
//! renderer, and the in-process arena store.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snake_arena::config::{ArenaConfig, Cli};
use snake_arena::engine::{Clock, GameController, MonotonicClock};
use snake_arena::input::{handle_key_event, handle_watch_key, should_quit, WatchStep};
use snake_arena::store::{ArenaLink, ArenaStore, Spectator};
use snake_arena::term::{
    ArenaPanel, FrameBuffer, GameView, TerminalRenderer, Viewport, LEADERBOARD_ROWS,
};
use snake_arena::types::LIVE_STATUS_INTERVAL_MS;

/// Poll timeout while nothing is scheduled (idle, paused, game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Cli::parse().merge(ArenaConfig::from_env());
    if let Some(path) = config.log_path.as_deref() {
        init_logging(path)?;
    }
    info!(
        mode = config.mode.as_str(),
        seed = config.seed,
        player = config.player.as_ref().map(|p| p.username.as_str()),
        "snake-arena starting"
    );

    let link = ArenaLink::start(ArenaStore::new())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &config, &link);
    // Always try to restore terminal state.
    let _ = term.exit();

    // A loop error outranks a flush error.
    let flushed = link.flush();
    result?;
    flushed?;
    for (rank, entry) in link.leaderboard(None).iter().take(LEADERBOARD_ROWS).enumerate() {
        info!(
            rank = rank + 1,
            user = %entry.username,
            score = entry.score,
            mode = entry.mode.as_str(),
            "leaderboard"
        );
    }
    Ok(())
}

/// The terminal is in raw mode, so logs go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &ArenaConfig, link: &ArenaLink) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut controller = GameController::new(config.mode, config.seed, Box::new(clock.clone()));
    if let Some(player) = config.player.clone() {
        let sink = link.sink(player.clone());
        controller = controller
            .with_player(player)
            .with_score_sink(sink.clone())
            .with_live_status_sink(sink);
    }

    let result = drive(term, config, link, &clock, &mut controller);
    // Report the stop whether or not the loop failed.
    controller.shutdown();
    result
}

fn drive(
    term: &mut TerminalRenderer,
    config: &ArenaConfig,
    link: &ArenaLink,
    clock: &MonotonicClock,
    controller: &mut GameController,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut spectator = Spectator::new();
    let mut dirty = true;
    let mut last_poll = 0;

    loop {
        // Sink events land in the store asynchronously; refresh the panel.
        let now = clock.now_ms();
        if now.saturating_sub(last_poll) >= LIVE_STATUS_INTERVAL_MS {
            last_poll = now;
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let mode = controller.mode();
            let (mut leaderboard, live_players, watching) = link.with_store(|store| {
                (
                    store.leaderboard(Some(mode)),
                    store.live_players().len() as u16,
                    spectator.poll(store),
                )
            });
            leaderboard.truncate(LEADERBOARD_ROWS);
            let best = config
                .player
                .as_ref()
                .map(|p| link.user_high_score(&p.id, Some(mode)))
                .unwrap_or(0);
            let panel = ArenaPanel {
                player: config.player.as_ref().map(|p| p.username.as_str()),
                best,
                live_players,
                leaderboard: &leaderboard,
                watching: watching.as_ref(),
            };
            view.render_into(controller.state(), Some(&panel), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = controller
            .next_deadline()
            .map(|due| Duration::from_millis(due.saturating_sub(clock.now_ms())))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        controller.apply_action(action);
                        dirty = true;
                    } else if let Some(step) = handle_watch_key(key) {
                        link.with_store(|store| match step {
                            WatchStep::Next => spectator.next(store),
                            WatchStep::Prev => spectator.prev(store),
                        });
                        dirty = true;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if controller.update() {
            dirty = true;
        }
    }
}
