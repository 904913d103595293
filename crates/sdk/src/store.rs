//! Explicitly constructed state containers with change notification
//!
//! A [`Store`] is a cheap, cloneable handle onto one piece of shared state.
//! Components that need the state are handed a clone; dependents call
//! [`Store::subscribe`] to be woken on every write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared state container backed by a `watch` channel
#[derive(Debug)]
pub struct Store<S> {
    tx: Arc<watch::Sender<S>>,
    version: Arc<AtomicU64>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            version: Arc::clone(&self.version),
        }
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S> {
    /// Create a store holding `initial`
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx: Arc::new(tx),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Borrow the current state.
    ///
    /// The returned guard holds a read lock; drop it before calling [`Store::set`].
    pub fn get(&self) -> watch::Ref<'_, S> {
        self.tx.borrow()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Mutate in place and notify subscribers
    pub fn set<F>(&self, f: F)
    where
        F: FnOnce(&mut S),
    {
        self.tx.send_modify(f);
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Mutate in place; subscribers are notified only when `f` reports a change
    pub fn set_if<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut S) -> bool,
    {
        let modified = self.tx.send_if_modified(f);
        if modified {
            self.version.fetch_add(1, Ordering::SeqCst);
        }
        modified
    }

    /// Receiver that observes every notifying write
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    /// Number of notifying writes so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}
