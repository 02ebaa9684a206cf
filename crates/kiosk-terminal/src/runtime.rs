//! Kiosk runtime loop
//!
//! Wiring: the store holds shared state, the router owns the active board,
//! and every board activation fires one background fetch whose classified
//! outcome returns over an mpsc channel. The loop drains that channel,
//! folds actions into the store, and repaints. Delivery over the channel
//! keeps wiring order irrelevant: producers only ever hand the store
//! reducers to apply.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use kiosk_app::{fetch_board, reduce, Action, AppState, Board, BoxedFeedSource, Router, Store};

use crate::config::KioskConfig;
use crate::input::{command_for, Command};
use crate::render;

/// What the loop does after a user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Leave the loop.
    Quit,
    /// A board was activated and wants a fetch.
    Activate(Board),
    /// Nothing to do (e.g. re-selecting the active board).
    Nothing,
}

/// Apply a command to the router and report what the loop should do.
fn apply_command(router: &mut Router, command: Command) -> Outcome {
    match command {
        Command::Quit => Outcome::Quit,
        Command::Show(board) => router
            .select(board)
            .map_or(Outcome::Nothing, Outcome::Activate),
        Command::NextBoard => {
            let target = router.active().next();
            router
                .select(target)
                .map_or(Outcome::Nothing, Outcome::Activate)
        }
        // A refresh refetches without touching the router.
        Command::Refresh => Outcome::Activate(router.active()),
    }
}

/// Fire a board's fetch as a background task.
///
/// The classified outcome comes back over the channel; a failure is also
/// logged here since the UI only shows the short notice.
fn spawn_fetch(feed: &BoxedFeedSource, board: Board, tx: &mpsc::UnboundedSender<Action>) {
    let feed = Arc::clone(feed);
    let tx = tx.clone();

    tokio::spawn(async move {
        let action = fetch_board(feed.as_ref(), board).await;
        if let Action::FetchFailed { board, error } = &action {
            tracing::warn!("{} fetch failed: {} ({})", board.label(), error, error.code());
        }
        if tx.send(action).is_err() {
            tracing::debug!("Kiosk loop closed before {} fetch landed", board.label());
        }
    });
}

/// Run the kiosk until the user quits.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    feed: BoxedFeedSource,
    config: &KioskConfig,
) -> Result<()> {
    let store = Store::new(AppState::default());
    let mut router = Router::new(config.dwell());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let started = Instant::now();
    let tick = config.tick();

    // Startup activation: the default board fetches immediately.
    spawn_fetch(&feed, router.active(), &tx);

    loop {
        let state = store.get();
        terminal.draw(|frame| render::draw(frame, &state, router.active()))?;

        // Fold in any fetch outcomes that landed since the last pass.
        while let Ok(action) = rx.try_recv() {
            tracing::debug!("Applying {}", action.description());
            store.update(|state| reduce(state, action));
        }

        // Input, with the poll timeout doubling as the frame tick.
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for(key) {
                    match apply_command(&mut router, command) {
                        Outcome::Quit => return Ok(()),
                        Outcome::Activate(board) => spawn_fetch(&feed, board, &tx),
                        Outcome::Nothing => {}
                    }
                }
            }
        }

        // The one-shot attract rotation.
        if let Some(board) = router.tick(started.elapsed()) {
            tracing::info!("Rotating to {}", board.label());
            spawn_fetch(&feed, board, &tx);
        }
    }
}
