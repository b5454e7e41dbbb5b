//! An in-process history port.
//!
//! `MemoryHistory` backs the [`HistoryPort`] capability with a plain vector
//! of entries, for unit tests and for hosts without a session history of
//! their own. It reproduces the browser contract the router is written
//! against:
//!
//! - `push` drops any forward entries past the cursor, then appends.
//! - `back`/`forward` move the cursor and saturate at the ends; the change
//!   is *not* announced synchronously.
//! - [`deliver`](MemoryHistory::deliver) plays the role of the host event
//!   loop: it fires subscribed listeners with the now-current location.
//!
//! Splitting traversal from delivery is what lets tests exercise the
//! asynchronous popstate contract deterministically:
//!
//! ```rust,ignore
//! history.back();            // cursor moved, nothing observed yet
//! history.deliver().await?;  // listeners (the started router) fire here
//! ```

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};
use wayfare_core::{BoxError, HistoryPort, HistoryState, LocationListener, SubscriptionId};

struct Entry {
    url: String,
    state: Option<HistoryState>,
}

struct Entries {
    list: Vec<Entry>,
    cursor: usize,
    // Set by back/forward, consumed by deliver.
    pending: bool,
}

/// An in-process [`HistoryPort`] backed by a vector of entries.
pub struct MemoryHistory {
    entries: Mutex<Entries>,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn LocationListener>)>>,
    next_id: AtomicU64,
}

fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryHistory {
    /// A history with a single `/` entry.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// A history with a single entry at the given url.
    pub fn with_initial(url: &str) -> Self {
        Self {
            entries: Mutex::new(Entries {
                list: vec![Entry {
                    url: url.to_owned(),
                    state: None,
                }],
                cursor: 0,
                pending: false,
            }),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Deliver any pending traversal notification to subscribed listeners.
    ///
    /// Models the host event loop turning a `back()`/`forward()` into a
    /// change event. No-op when no traversal is pending. Listeners run
    /// sequentially in subscription order; the first error is returned and
    /// later listeners still run.
    pub async fn deliver(&self) -> Result<(), BoxError> {
        let location = {
            let mut entries = relock(&self.entries);
            if !entries.pending {
                return Ok(());
            }
            entries.pending = false;
            entries.list[entries.cursor].url.clone()
        };
        let listeners: Vec<_> = relock(&self.listeners)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();

        let mut first_error = None;
        for listener in listeners {
            if let Err(e) = listener.on_change(&location).await {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// The number of entries (the session history length).
    pub fn len(&self) -> usize {
        relock(&self.entries).list.len()
    }

    /// Whether the history has no entries. Always false in practice; present
    /// for `len`/`is_empty` symmetry.
    pub fn is_empty(&self) -> bool {
        relock(&self.entries).list.is_empty()
    }

    /// The opaque state attached to the current entry, if any.
    pub fn state(&self) -> Option<HistoryState> {
        let entries = relock(&self.entries);
        entries.list[entries.cursor].state.clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryPort for MemoryHistory {
    fn push(&self, url: &str, state: Option<HistoryState>) {
        let mut entries = relock(&self.entries);
        let cut = entries.cursor + 1;
        entries.list.truncate(cut);
        entries.list.push(Entry {
            url: url.to_owned(),
            state,
        });
        entries.cursor += 1;
    }

    fn back(&self) {
        let mut entries = relock(&self.entries);
        if entries.cursor > 0 {
            entries.cursor -= 1;
            entries.pending = true;
        }
    }

    fn forward(&self) {
        let mut entries = relock(&self.entries);
        if entries.cursor + 1 < entries.list.len() {
            entries.cursor += 1;
            entries.pending = true;
        }
    }

    fn current_location(&self) -> String {
        let entries = relock(&self.entries);
        entries.list[entries.cursor].url.clone()
    }

    fn subscribe(&self, listener: Arc<dyn LocationListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        relock(&self.listeners).push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        relock(&self.listeners).retain(|(sub, _)| *sub != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_truncates_forward_entries() {
        let history = MemoryHistory::new();
        history.push("/a", None);
        history.push("/b", None);
        history.back();
        assert_eq!(history.current_location(), "/a");

        // Pushing from the middle drops the forward branch.
        history.push("/c", None);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_location(), "/c");
        history.forward();
        assert_eq!(history.current_location(), "/c");
    }

    #[test]
    fn traversal_saturates_at_the_ends() {
        let history = MemoryHistory::new();
        history.back();
        assert_eq!(history.current_location(), "/");
        history.push("/a", None);
        history.forward();
        assert_eq!(history.current_location(), "/a");
    }

    #[test]
    fn state_rides_along_untouched() {
        let history = MemoryHistory::new();
        let state: HistoryState = Arc::new(41_u32);
        history.push("/a", Some(state));
        history.push("/b", None);
        assert!(history.state().is_none());
        history.back();
        let restored = history.state().unwrap();
        assert_eq!(restored.downcast_ref::<u32>(), Some(&41));
    }

    #[tokio::test]
    async fn deliver_is_a_noop_without_traversal() {
        let history = MemoryHistory::new();
        history.push("/a", None);
        history.deliver().await.unwrap(); // nothing pending, nothing fires
    }
}
