//! # Kiosk Application Core
//!
//! Portable headless core for the kiosk feed boards. This crate holds:
//!
//! - [`Store`]: the shared reducer-based state container
//! - [`Action`]: typed state-mutating events and their reducer
//! - [`Board`]: the two routable content boards and their view state
//! - [`Router`]: the default board plus the one-shot timed rotation
//! - [`FeedSource`]: the seam through which board content arrives
//! - [`Markup`]: the nested markup tree produced by views
//!
//! The crate is pure: no HTTP, no terminal, no async runtime coupling.
//! Frontends inject a [`FeedSource`] implementation (the runtime layer
//! depends on this crate, not the other way around) and observe state
//! through poll-based [`Store`] subscriptions.

pub mod actions;
pub mod boards;
pub mod errors;
pub mod feed;
pub mod markup;
pub mod router;
pub mod store;

pub use actions::{reduce, Action};
pub use boards::{view, AppState, Board, Notice, Post, PostsState, User, UsersState};
pub use errors::FeedError;
pub use feed::{fetch_board, BoxedFeedSource, FeedSource, OfflineFeedSource};
pub use markup::{block, text, Markup};
pub use router::{Router, DEFAULT_DWELL};
pub use store::{Changes, Reducer, Store};
