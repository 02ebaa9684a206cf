//! # FeedSource: Abstract Content Fetching
//!
//! This module defines the `FeedSource` trait, which abstracts where
//! board content comes from. It keeps `kiosk-app` a pure application core
//! with no HTTP dependency: the runtime layer (`kiosk-client`) implements
//! the trait, and tests substitute mocks.
//!
//! ## Design
//!
//! ```text
//! kiosk-app (pure)          kiosk-client (runtime)
//! ┌────────────────┐        ┌────────────────┐
//! │ fetch_board    │        │ FeedClient     │
//! │  ┌───────────┐ │        │   implements   │
//! │  │ FeedSource│◄─────────│   FeedSource   │
//! │  └───────────┘ │        │                │
//! └────────────────┘        └────────────────┘
//! ```
//!
//! ## Activation contract
//!
//! When a board becomes active (startup, timed hop, manual selection,
//! refresh) the frontend fires that board's fetch exactly once,
//! fire-and-forget. The classified outcome comes back as an [`Action`];
//! there is no retry. Re-activating a board refetches and therefore
//! re-appends, which is the accumulation contract working as intended.

use std::sync::Arc;

use async_trait::async_trait;

use crate::actions::Action;
use crate::boards::{Board, Post, User};
use crate::errors::FeedError;

/// Source of board content.
///
/// The primary implementation is the HTTP client in `kiosk-client`. Mock
/// implementations cover tests and offline mode.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the posts list.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError>;

    /// Fetch the users list.
    async fn fetch_users(&self) -> Result<Vec<User>, FeedError>;
}

/// Type alias for a shared feed source.
pub type BoxedFeedSource = Arc<dyn FeedSource>;

/// Fetch a board's content and classify the outcome as an action.
///
/// This is the intent step: one activation, one fetch, one action.
pub async fn fetch_board(feed: &dyn FeedSource, board: Board) -> Action {
    let fetched = match board {
        Board::Posts => feed.fetch_posts().await.map(Action::PostsArrived),
        Board::Users => feed.fetch_users().await.map(Action::UsersArrived),
    };
    fetched.unwrap_or_else(|error| Action::FetchFailed { board, error })
}

/// A feed source for offline/demo mode.
///
/// Every fetch reports [`FeedError::Offline`]; boards keep their loading
/// placeholder and the failure shows as the state notice.
#[derive(Debug, Clone, Default)]
pub struct OfflineFeedSource;

#[async_trait]
impl FeedSource for OfflineFeedSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        Err(FeedError::Offline)
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FeedError> {
        Err(FeedError::Offline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFeed {
        posts: Result<Vec<Post>, FeedError>,
        users: Result<Vec<User>, FeedError>,
    }

    #[async_trait]
    impl FeedSource for CannedFeed {
        async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
            self.posts.clone()
        }

        async fn fetch_users(&self) -> Result<Vec<User>, FeedError> {
            self.users.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_board_classifies_success() {
        let feed = CannedFeed {
            posts: Ok(vec![Post {
                id: 1,
                title: "first".into(),
            }]),
            users: Ok(Vec::new()),
        };

        let action = fetch_board(&feed, Board::Posts).await;
        match action {
            Action::PostsArrived(batch) => assert_eq!(batch.len(), 1),
            other => panic!("expected posts batch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_board_classifies_failure_with_board() {
        let feed = CannedFeed {
            posts: Ok(Vec::new()),
            users: Err(FeedError::http(502)),
        };

        let action = fetch_board(&feed, Board::Users).await;
        assert_eq!(
            action,
            Action::FetchFailed {
                board: Board::Users,
                error: FeedError::http(502),
            }
        );
    }

    #[tokio::test]
    async fn test_offline_source_always_offline() {
        let feed = OfflineFeedSource;
        assert_eq!(feed.fetch_posts().await, Err(FeedError::Offline));
        assert_eq!(feed.fetch_users().await, Err(FeedError::Offline));
    }
}
