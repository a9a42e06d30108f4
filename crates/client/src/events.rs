// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notifications published after the cache changes.
//!
//! Events are informational only: they tell views that a collection was
//! replaced (or failed to load) so they can re-render from the cache.
//! They never carry the data itself.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer in the broadcast channel.
/// Slow subscribers lose the oldest events.
const EVENT_BUFFER_SIZE: usize = 64;

/// Cache synchronization events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    /// The user collection was replaced.
    UsersLoaded {
        /// Number of users now cached.
        count: usize,
    },
    /// The ticket collection was replaced.
    TicketsLoaded {
        /// Number of tickets now cached.
        count: usize,
    },
    /// A fetch failed; the previous collection is still cached.
    LoadFailed {
        /// `users` or `tickets`.
        resource: String,
        /// The failure, for display in logs.
        message: String,
    },
    /// Connection confirmation sent to new live subscribers.
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Fan-out of `SyncEvent`s to any number of subscribers.
#[derive(Debug, Clone)]
pub struct SyncEventBroadcaster {
    tx: broadcast::Sender<SyncEvent>,
}

impl SyncEventBroadcaster {
    /// Creates a broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes an event. Dropped silently if nobody is listening.
    pub fn broadcast(&self, event: &SyncEvent) {
        match self.tx.send(event.clone()) {
            Ok(receivers) => debug!(?event, receivers, "Broadcast sync event"),
            Err(_) => debug!(?event, "No receivers for sync event"),
        }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.tx.subscribe()
    }
}

impl Default for SyncEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
