//! Selection capture
//!
//! A producer that turns raw selection snapshots into a stream of clean,
//! deduplicated text snapshots on an `mpsc` channel. The consumer (normally
//! a [`SnapshotStore`](crate::store::SnapshotStore)) drains the receiver;
//! cancellation is simply dropping either end, there is no in-flight work to
//! abort.
//!
//! Debouncing/deduplication happens here, before text reaches any consumer:
//! snapshots are trimmed, empty selections are dropped, and a selection
//! identical to the last forwarded one is ignored.

use std::sync::mpsc::{channel, Receiver, Sender};

/// Debouncing producer for selection snapshots.
#[derive(Debug)]
pub struct SelectionCapture {
    tx: Sender<String>,
    last: Option<String>,
}

impl SelectionCapture {
    /// Wrap an existing channel sender.
    pub fn new(tx: Sender<String>) -> Self {
        Self { tx, last: None }
    }

    /// Create a capture producer together with its consumer end.
    pub fn channel() -> (Self, Receiver<String>) {
        let (tx, rx) = channel();
        (Self::new(tx), rx)
    }

    /// Offer a raw selection snapshot.
    ///
    /// Returns `true` if the snapshot was forwarded. Empty selections,
    /// repeats of the last forwarded snapshot, and sends after the consumer
    /// is gone are all dropped.
    pub fn push(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        if self.last.as_deref() == Some(text) {
            return false;
        }
        if self.tx.send(text.to_string()).is_err() {
            return false;
        }
        self.last = Some(text.to_string());
        true
    }

    /// Offer a snapshot from an explicit copy action.
    ///
    /// Copy events bypass the duplicate check (the user asked for this exact
    /// text again) but still drop empty selections.
    pub fn push_copy(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        self.tx.send(text.to_string()).is_ok()
    }
}
