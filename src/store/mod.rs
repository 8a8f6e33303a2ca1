//! Snapshot store
//!
//! Retains the most recent captured text and notifies subscribers when it
//! changes. The summarization core never touches this store; it sits between
//! the capture producer and the presentation layer. Nothing is persisted —
//! the store holds exactly one snapshot, in memory.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct StoreInner {
    latest: Option<String>,
    next_id: u64,
    subscribers: FxHashMap<u64, Sender<String>>,
}

/// Single-slot text store with change notification.
///
/// `publish` replaces the stored snapshot and fans the new value out to
/// every live subscriber; subscribers whose receiver has been dropped are
/// pruned on the way. All methods take `&self`, so the store can be shared
/// behind an `Arc` between the capture consumer and the UI.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: Mutex<StoreInner>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot and notify subscribers.
    pub fn publish(&self, text: impl Into<String>) {
        let text = text.into();
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.latest = Some(text.clone());
        inner
            .subscribers
            .retain(|_, tx| tx.send(text.clone()).is_ok());
    }

    /// The most recently published snapshot, if any.
    pub fn latest(&self) -> Option<String> {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .latest
            .clone()
    }

    /// Register a change subscriber. Unsubscribe by dropping the receiver.
    pub fn subscribe(&self) -> Receiver<String> {
        let (tx, rx) = channel();
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.insert(id, tx);
        rx
    }

    /// Number of live subscribers (dead ones linger until the next publish).
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("store lock poisoned")
            .subscribers
            .len()
    }
}
