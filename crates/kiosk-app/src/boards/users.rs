//! Users board: accumulated state and view
//!
//! Same accumulation contract as the posts board: concatenation in
//! arrival order, no deduplication, no eviction.

use serde::{Deserialize, Serialize};

use crate::markup::{block, text, Markup};

/// A user record decoded from the users feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Feed-assigned identifier.
    pub id: u64,
    /// Display name shown on the board.
    pub name: String,
}

/// Accumulated users board state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersState {
    /// Every user received so far, in arrival order.
    pub items: Vec<User>,
    /// True once the first batch (possibly empty) has arrived.
    pub loaded: bool,
}

impl UsersState {
    /// Append an arriving batch onto previously stored items.
    pub fn append(&mut self, batch: Vec<User>) {
        self.loaded = true;
        self.items.extend(batch);
    }

    /// Number of accumulated users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no users have accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Render the users board to markup: heading plus one line per name.
#[must_use]
pub fn view(state: &UsersState) -> Markup {
    if !state.loaded {
        return block("container", vec![text("loading...")]);
    }

    let names = state
        .items
        .iter()
        .map(|user| text(user.name.clone()))
        .collect();
    block("container", vec![text("Users"), block("users", names)])
}
