//! # Board State Module
//!
//! View state for the two routable content boards. These types are the
//! shared state held by the store:
//!
//! - Accumulated by reducers (see [`crate::actions`])
//! - Rendered to markup by the board views
//! - Serializable for debugging

pub mod posts;
pub mod users;

pub use posts::{Post, PostsState};
pub use users::{User, UsersState};

use serde::{Deserialize, Serialize};

use crate::markup::{block, text, Markup};

/// A routable content board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    /// The posts list board.
    Posts,
    /// The users list board.
    Users,
}

impl Board {
    /// Every board, in display order.
    pub const ALL: [Board; 2] = [Board::Posts, Board::Users];

    /// Display label for tabs and log fields.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Board::Posts => "Posts",
            Board::Users => "Users",
        }
    }

    /// Path of the feed endpoint serving this board.
    #[must_use]
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Board::Posts => "/posts",
            Board::Users => "/users",
        }
    }

    /// The board after this one, wrapping around.
    #[must_use]
    pub fn next(&self) -> Board {
        match self {
            Board::Posts => Board::Users,
            Board::Users => Board::Posts,
        }
    }
}

impl Default for Board {
    /// The board shown at startup.
    fn default() -> Self {
        Board::Posts
    }
}

/// Most recent fetch failure surfaced to the UI.
///
/// Failures never touch board item lists; they only set this notice,
/// which the next successful fetch for the same board clears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Board whose fetch failed.
    pub board: Board,
    /// Human-readable failure description.
    pub message: String,
}

/// Shared application state held by the store.
///
/// Each board's reducer touches only its own slice; the notice is the one
/// cross-board field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Posts board slice.
    pub posts: PostsState,
    /// Users board slice.
    pub users: UsersState,
    /// Surfaced fetch failure, if any.
    pub notice: Option<Notice>,
}

/// Render the active board to markup.
///
/// Selects the board's own view and appends the notice line when a fetch
/// failure is surfaced.
#[must_use]
pub fn view(state: &AppState, board: Board) -> Markup {
    let body = match board {
        Board::Posts => posts::view(&state.posts),
        Board::Users => users::view(&state.users),
    };

    let mut children = vec![body];
    if let Some(notice) = &state.notice {
        children.push(text(format!(
            "{}: {}",
            notice.board.label(),
            notice.message
        )));
    }
    block("page", children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_posts() {
        assert_eq!(Board::default(), Board::Posts);
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Board::Posts.next(), Board::Users);
        assert_eq!(Board::Users.next(), Board::Posts);
    }

    #[test]
    fn test_labels_and_endpoints() {
        assert_eq!(Board::Posts.label(), "Posts");
        assert_eq!(Board::Users.label(), "Users");
        assert_eq!(Board::Posts.endpoint_path(), "/posts");
        assert_eq!(Board::Users.endpoint_path(), "/users");
    }

    #[test]
    fn test_view_selects_active_board() {
        let mut state = AppState::default();
        state.posts.append(vec![Post {
            id: 1,
            title: "first post".into(),
        }]);
        state.users.append(vec![User {
            id: 1,
            name: "Ada".into(),
        }]);

        let posts_lines = view(&state, Board::Posts).lines();
        assert!(posts_lines.contains(&"first post".to_string()));
        assert!(!posts_lines.contains(&"Ada".to_string()));

        let users_lines = view(&state, Board::Users).lines();
        assert!(users_lines.contains(&"Ada".to_string()));
        assert!(!users_lines.contains(&"first post".to_string()));
    }

    #[test]
    fn test_view_appends_notice_line() {
        let state = AppState {
            notice: Some(Notice {
                board: Board::Users,
                message: "feed source is offline".into(),
            }),
            ..AppState::default()
        };

        let lines = view(&state, Board::Posts).lines();
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Users: feed source is offline")
        );
    }
}
