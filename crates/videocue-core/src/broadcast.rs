//! Event Broadcasting
//!
//! Fan-out of widget state changes to any number of subscribers over a
//! tokio broadcast channel. The widget core stays synchronous; a host
//! applies events on its loop and publishes the resulting changes here.
//!
//! Delivery is best-effort: a subscriber that falls behind the channel
//! capacity skips the oldest changes (tokio's lagged semantics) and keeps
//! receiving from there — caption state can always be re-queried, so a gap
//! is not fatal.

use tokio::sync::broadcast;
use tracing::debug;

use crate::StateChange;

/// Default channel capacity; generous for a widget that emits a handful of
/// changes per user action or position report.
pub const DEFAULT_CAPACITY: usize = 256;

/// Broadcasts widget state changes to subscribers.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    tx: broadcast::Sender<StateChange>,
}

impl EventBroadcaster {
    /// Creates a broadcaster with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a broadcaster with the given channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribes to future state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.tx.subscribe()
    }

    /// Publishes a batch of state changes in order.
    ///
    /// Changes published while nobody is subscribed are dropped.
    pub fn publish(&self, changes: &[StateChange]) {
        for change in changes {
            if self.tx.send(change.clone()).is_err() {
                debug!(?change, "No subscribers for state change");
            }
        }
    }

    /// Returns the current subscriber count.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
