//! Board routing with a one-shot timed rotation
//!
//! The router starts on the default board and hops to the users board
//! once, after a fixed dwell. Manual selection suppresses repeats and
//! disarms the pending hop, so interacting with the kiosk ends the
//! attract rotation.

use std::time::Duration;

use crate::boards::Board;

/// Default dwell before the timed hop.
pub const DEFAULT_DWELL: Duration = Duration::from_millis(5000);

/// Pending one-shot hop to another board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimedHop {
    at: Duration,
    to: Board,
}

/// Routing state: the active board plus the pending timed hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    active: Board,
    hop: Option<TimedHop>,
}

impl Router {
    /// Router on the default board, hopping to [`Board::Users`] once the
    /// dwell has elapsed.
    #[must_use]
    pub fn new(dwell: Duration) -> Self {
        Self {
            active: Board::default(),
            hop: Some(TimedHop {
                at: dwell,
                to: Board::Users,
            }),
        }
    }

    /// The currently active board.
    #[must_use]
    pub fn active(&self) -> Board {
        self.active
    }

    /// Advance the rotation clock.
    ///
    /// `elapsed` is the time since the router started. Returns the newly
    /// active board when the hop fires; the hop fires at most once, and a
    /// hop onto the already-active board is suppressed.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Board> {
        let hop = self.hop?;
        if elapsed < hop.at {
            return None;
        }
        self.hop = None;
        self.switch(hop.to)
    }

    /// Manually select a board.
    ///
    /// Returns `None` when the board is already active (repeat
    /// suppression). Any pending timed hop is disarmed either way.
    pub fn select(&mut self, board: Board) -> Option<Board> {
        self.hop = None;
        self.switch(board)
    }

    fn switch(&mut self, board: Board) -> Option<Board> {
        if self.active == board {
            return None;
        }
        self.active = board;
        Some(board)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(DEFAULT_DWELL)
    }
}
