//! Typed actions and the state reducer
//!
//! Inbound feed results are classified into [`Action`]s (the intent step)
//! and folded into [`AppState`] by [`reduce`] (the model step). Each
//! action touches only the slice owned by its board, plus the shared
//! notice field.

use serde::{Deserialize, Serialize};

use crate::boards::{AppState, Board, Notice, Post, User};
use crate::errors::FeedError;

/// A state-mutating event produced by feed activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// A batch of posts arrived.
    PostsArrived(Vec<Post>),
    /// A batch of users arrived.
    UsersArrived(Vec<User>),
    /// A fetch failed; board items are left untouched.
    FetchFailed {
        /// Board whose fetch failed.
        board: Board,
        /// Classified failure.
        error: FeedError,
    },
}

impl Action {
    /// Board whose slice this action touches.
    #[must_use]
    pub fn board(&self) -> Board {
        match self {
            Action::PostsArrived(_) => Board::Posts,
            Action::UsersArrived(_) => Board::Users,
            Action::FetchFailed { board, .. } => *board,
        }
    }

    /// Short description for log lines.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Action::PostsArrived(batch) => format!("posts batch ({} items)", batch.len()),
            Action::UsersArrived(batch) => format!("users batch ({} items)", batch.len()),
            Action::FetchFailed { board, error } => {
                format!("{} fetch failed ({})", board.label(), error.code())
            }
        }
    }
}

/// Fold an action into the shared state.
///
/// Arrived batches append to the owning board (concatenation, arrival
/// order, no deduplication) and clear a notice previously raised for that
/// board. Failures only set the notice.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::PostsArrived(batch) => {
            state.posts.append(batch);
            clear_notice(state, Board::Posts);
        }
        Action::UsersArrived(batch) => {
            state.users.append(batch);
            clear_notice(state, Board::Users);
        }
        Action::FetchFailed { board, error } => {
            state.notice = Some(Notice {
                board,
                message: error.to_string(),
            });
        }
    }
}

fn clear_notice(state: &mut AppState, board: Board) {
    if state
        .notice
        .as_ref()
        .is_some_and(|notice| notice.board == board)
    {
        state.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn posts(titles: &[&str]) -> Vec<Post> {
        titles
            .iter()
            .enumerate()
            .map(|(index, title)| Post {
                id: index as u64,
                title: (*title).to_string(),
            })
            .collect()
    }

    #[test]
    fn test_arrived_batches_append_to_own_board() {
        let mut state = AppState::default();

        reduce(&mut state, Action::PostsArrived(posts(&["a"])));
        reduce(
            &mut state,
            Action::UsersArrived(vec![User {
                id: 9,
                name: "Ada".into(),
            }]),
        );
        reduce(&mut state, Action::PostsArrived(posts(&["b"])));

        let titles: Vec<&str> = state.posts.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn test_failure_sets_notice_and_leaves_items() {
        let mut state = AppState::default();
        reduce(&mut state, Action::PostsArrived(posts(&["a"])));

        reduce(
            &mut state,
            Action::FetchFailed {
                board: Board::Posts,
                error: FeedError::http(500),
            },
        );

        assert_eq!(state.posts.len(), 1);
        let notice = state.notice.as_ref().map(|n| (n.board, n.message.clone()));
        assert_eq!(
            notice,
            Some((Board::Posts, "feed endpoint returned HTTP 500".to_string()))
        );
    }

    #[test]
    fn test_success_clears_notice_for_same_board() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            Action::FetchFailed {
                board: Board::Posts,
                error: FeedError::Offline,
            },
        );

        reduce(&mut state, Action::PostsArrived(posts(&["a"])));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_success_keeps_notice_for_other_board() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            Action::FetchFailed {
                board: Board::Users,
                error: FeedError::Offline,
            },
        );

        reduce(&mut state, Action::PostsArrived(posts(&["a"])));
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_action_board_and_description() {
        let action = Action::FetchFailed {
            board: Board::Users,
            error: FeedError::transport("refused"),
        };
        assert_eq!(action.board(), Board::Users);
        assert_eq!(action.description(), "Users fetch failed (FEED_TRANSPORT)");

        let action = Action::PostsArrived(posts(&["a", "b"]));
        assert_eq!(action.board(), Board::Posts);
        assert_eq!(action.description(), "posts batch (2 items)");
    }

    proptest! {
        /// Applying any sequence of post batches yields their concatenation.
        #[test]
        fn prop_reduce_concatenates_batches(batches in proptest::collection::vec(
            proptest::collection::vec(any::<u64>(), 0..8),
            0..8,
        )) {
            let mut state = AppState::default();
            for batch in &batches {
                let items = batch
                    .iter()
                    .map(|id| Post { id: *id, title: format!("post {id}") })
                    .collect();
                reduce(&mut state, Action::PostsArrived(items));
            }

            let expected: Vec<u64> = batches.concat();
            let got: Vec<u64> = state.posts.items.iter().map(|p| p.id).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
