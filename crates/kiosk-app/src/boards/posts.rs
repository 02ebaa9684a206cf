//! Posts board: accumulated state and view
//!
//! Posts accumulate by concatenation: each arriving batch is appended
//! onto previously stored items, in arrival order, with no deduplication
//! and no eviction. Re-fetching the board therefore re-appends.

use serde::{Deserialize, Serialize};

use crate::markup::{block, text, Markup};

/// A post record decoded from the posts feed.
///
/// Feed entries carry more fields than the board displays; only the
/// identifier and the title line are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Feed-assigned identifier.
    pub id: u64,
    /// Title line shown on the board.
    pub title: String,
}

/// Accumulated posts board state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsState {
    /// Every post received so far, in arrival order.
    pub items: Vec<Post>,
    /// True once the first batch (possibly empty) has arrived.
    pub loaded: bool,
}

impl PostsState {
    /// Append an arriving batch onto previously stored items.
    pub fn append(&mut self, batch: Vec<Post>) {
        self.loaded = true;
        self.items.extend(batch);
    }

    /// Number of accumulated posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no posts have accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Render the posts board to markup.
///
/// The loading placeholder shows until the first batch arrives; after
/// that, the board heading and one line per post title.
#[must_use]
pub fn view(state: &PostsState) -> Markup {
    if !state.loaded {
        return block("container", vec![text("loading...")]);
    }

    let titles = state
        .items
        .iter()
        .map(|post| text(post.title.clone()))
        .collect();
    block("container", vec![text("Posts"), block("posts", titles)])
}
