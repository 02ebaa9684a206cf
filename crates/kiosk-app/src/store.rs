//! Reducer-based state store with change notifications
//!
//! `Store<S>` holds the shared application state and applies a stream of
//! reducer functions to it. It is the single state container of the core:
//! feature code dispatches reducers, frontends observe the result through
//! poll-based subscriptions.
//!
//! Reducers are applied serially in dispatch order, so observable output
//! never depends on which producer was wired up first.
//!
//! # Runtime Agnostic Design
//!
//! This module uses only std primitives (RwLock, AtomicU64) to remain
//! runtime-agnostic. Subscriptions are poll-based rather than push-based;
//! frontends fold `Changes::poll` into their own event loops.

// Allow expect on RwLock::read/write - lock poisoning from panics
// is unrecoverable, so expect() is the appropriate handling pattern.
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// A state transition dispatched to the store.
pub type Reducer<S> = Box<dyn FnOnce(&mut S) + Send>;

/// Inner cell shared by store handles and subscriptions.
struct StoreInner<S> {
    /// The current state, protected by RwLock for sync access.
    state: RwLock<S>,
    /// Version counter incremented once per applied reducer.
    version: AtomicU64,
}

/// Shared reducer-based state container.
///
/// `Store<S>` provides:
/// - `get()`: Synchronously snapshot the current state
/// - `dispatch()` / `update()`: Apply a reducer and bump the version
/// - `subscribe()`: Get a `Changes` handle for polling updates
///
/// # Thread Safety
///
/// `Store<S>` is `Send + Sync`; clones share the same cell, so any handle
/// can dispatch and any subscription sees the result.
#[derive(Clone)]
pub struct Store<S> {
    inner: Arc<StoreInner<S>>,
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Create a store holding the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot the current state.
    ///
    /// This is a synchronous operation that clones the state.
    pub fn get(&self) -> S {
        self.inner
            .state
            .read()
            .expect("Store lock poisoned")
            .clone()
    }

    /// Get the current version number.
    ///
    /// The version is incremented once per applied reducer.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Apply a boxed reducer to the state.
    ///
    /// Reducers coming over a channel arrive boxed; `dispatch` applies
    /// them in arrival order. Subscriptions see the new state on their
    /// next `poll()`.
    pub fn dispatch(&self, reducer: Reducer<S>) {
        self.update(reducer);
    }

    /// Apply a reducer given inline as a closure.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        {
            let mut guard = self.inner.state.write().expect("Store lock poisoned");
            f(&mut guard);
        }

        // Increment version to signal change
        self.inner.version.fetch_add(1, Ordering::Release);
    }

    /// Subscribe to state changes.
    ///
    /// Returns a `Changes` handle that polls for updates. The handle
    /// tracks the version it last saw and yields the current state when
    /// the store has moved past it.
    pub fn subscribe(&self) -> Changes<S> {
        Changes {
            source: self.inner.clone(),
            last_version: self.inner.version.load(Ordering::Acquire),
        }
    }
}

impl<S: Clone + Send + Sync + Default + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get())
            .field("version", &self.version())
            .finish()
    }
}

/// A poll-based subscription to store changes.
///
/// `Changes` tracks the version it last observed. Rapid updates coalesce:
/// `poll()` yields the latest state, not every intermediate one.
pub struct Changes<S> {
    source: Arc<StoreInner<S>>,
    last_version: u64,
}

impl<S: Clone + Send + Sync + 'static> Changes<S> {
    /// Check whether the store has changed since the last poll.
    pub fn has_changed(&self) -> bool {
        self.source.version.load(Ordering::Acquire) > self.last_version
    }

    /// Poll for an updated state.
    ///
    /// Returns `Some(state)` if the store has been updated since the last
    /// poll, advancing the tracked version. Returns `None` otherwise.
    pub fn poll(&mut self) -> Option<S> {
        let current_version = self.source.version.load(Ordering::Acquire);
        if current_version > self.last_version {
            self.last_version = current_version;
            Some(
                self.source
                    .state
                    .read()
                    .expect("Store lock poisoned")
                    .clone(),
            )
        } else {
            None
        }
    }

    /// Snapshot the current state regardless of whether it changed.
    pub fn get(&self) -> S {
        self.source
            .state
            .read()
            .expect("Store lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new_and_get() {
        let store = Store::new(vec![1, 2]);
        assert_eq!(store.get(), vec![1, 2]);
    }

    #[test]
    fn test_update_applies_reducer() {
        let store = Store::new(Vec::<u32>::new());
        store.update(|items| items.push(7));
        assert_eq!(store.get(), vec![7]);
    }

    #[test]
    fn test_dispatch_applies_boxed_reducer() {
        let store = Store::new(0u32);
        let reducer: Reducer<u32> = Box::new(|count| *count += 5);
        store.dispatch(reducer);
        assert_eq!(store.get(), 5);
    }

    #[test]
    fn test_version_bumps_once_per_reducer() {
        let store = Store::new(0u32);
        assert_eq!(store.version(), 0);

        store.update(|count| *count += 1);
        assert_eq!(store.version(), 1);

        store.dispatch(Box::new(|count| *count += 1));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = Store::new(0u32);
        let handle = store.clone();

        handle.update(|count| *count = 42);
        assert_eq!(store.get(), 42);
    }

    #[test]
    fn test_reducers_apply_in_dispatch_order() {
        let store = Store::new(Vec::<&str>::new());
        store.dispatch(Box::new(|items| items.push("first")));
        store.dispatch(Box::new(|items| items.push("second")));
        assert_eq!(store.get(), vec!["first", "second"]);
    }

    #[test]
    fn test_changes_poll() {
        let store = Store::new(0u32);
        let mut changes = store.subscribe();

        // Subscription starts at the current version
        assert_eq!(changes.poll(), None);

        store.update(|count| *count = 1);
        assert_eq!(changes.poll(), Some(1));

        // Second poll returns None until the next update
        assert_eq!(changes.poll(), None);
    }

    #[test]
    fn test_changes_coalesce_updates() {
        let store = Store::new(0u32);
        let mut changes = store.subscribe();

        store.update(|count| *count = 1);
        store.update(|count| *count = 2);
        store.update(|count| *count = 3);

        // Poll yields the latest state (version-based, not queue-based)
        assert_eq!(changes.poll(), Some(3));
        assert_eq!(changes.poll(), None);
    }

    #[test]
    fn test_changes_has_changed_and_get() {
        let store = Store::new(10u32);
        let mut changes = store.subscribe();

        assert!(!changes.has_changed());
        assert_eq!(changes.get(), 10);

        store.update(|count| *count = 11);
        assert!(changes.has_changed());

        let _ = changes.poll();
        assert!(!changes.has_changed());
    }

    #[test]
    fn test_store_default() {
        let store: Store<u32> = Store::default();
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_store_debug() {
        let store = Store::new(42u32);
        let rendered = format!("{store:?}");
        assert!(rendered.contains("Store"));
        assert!(rendered.contains("42"));
    }
}
