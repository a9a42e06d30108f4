// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use conquest::{ClientState, Resource};
use time::OffsetDateTime;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, error, info};

use crate::error::ClientError;
use crate::events::{SyncEvent, SyncEventBroadcaster};
use crate::remote::RemoteClient;

/// What a single load call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was fetched and installed.
    Loaded {
        /// Number of records installed.
        count: usize,
    },
    /// Another load of the same collection was already in flight.
    Skipped,
    /// The fetch failed and the previous collection was kept.
    Failed {
        /// The failure message.
        message: String,
    },
}

/// Clears a loading flag when dropped, whether the load finished or failed.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    /// Sets the flag, or returns `None` if it was already set.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Loads remote collections into the shared cache.
///
/// Each collection has its own re-entrancy flag: a load requested while
/// another load of the same collection is in flight is dropped, not queued.
/// Users and tickets load independently and may overlap.
#[derive(Debug)]
pub struct FetchCoordinator {
    remote: RemoteClient,
    state: Arc<RwLock<ClientState>>,
    users_loading: AtomicBool,
    tickets_loading: AtomicBool,
    events: SyncEventBroadcaster,
}

impl FetchCoordinator {
    /// Creates a coordinator with an empty cache.
    #[must_use]
    pub fn new(remote: RemoteClient, events: SyncEventBroadcaster) -> Self {
        Self {
            remote,
            state: Arc::new(RwLock::new(ClientState::new())),
            users_loading: AtomicBool::new(false),
            tickets_loading: AtomicBool::new(false),
            events,
        }
    }

    /// Returns the remote client used for fetches.
    #[must_use]
    pub const fn remote(&self) -> &RemoteClient {
        &self.remote
    }

    /// Returns the broadcaster sync events are published on.
    #[must_use]
    pub const fn events(&self) -> &SyncEventBroadcaster {
        &self.events
    }

    /// Borrows the cache for rendering.
    pub async fn read(&self) -> RwLockReadGuard<'_, ClientState> {
        self.state.read().await
    }

    /// Returns whether a load of `resource` is in flight.
    #[must_use]
    pub fn is_loading(&self, resource: Resource) -> bool {
        self.flag(resource).load(Ordering::Acquire)
    }

    /// Fetches the user collection and replaces the cached one.
    pub async fn load_users(&self) -> LoadOutcome {
        self.load_collection(
            Resource::Users,
            || self.remote.list_users(),
            ClientState::install_users,
        )
        .await
    }

    /// Fetches the ticket collection and replaces the cached one.
    pub async fn load_tickets(&self) -> LoadOutcome {
        self.load_collection(
            Resource::Tickets,
            || self.remote.list_tickets(),
            ClientState::install_tickets,
        )
        .await
    }

    /// Loads users and tickets concurrently.
    pub async fn load_all(&self) -> (LoadOutcome, LoadOutcome) {
        tokio::join!(self.load_users(), self.load_tickets())
    }

    /// Loads one collection.
    ///
    /// The cache write completes before the event is published, so anything
    /// reacting to the event sees the new collection.
    async fn load_collection<T, F, Fut>(
        &self,
        resource: Resource,
        fetch: F,
        install: fn(&mut ClientState, Vec<T>, OffsetDateTime),
    ) -> LoadOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ClientError>>,
    {
        let Some(_guard) = LoadingGuard::acquire(self.flag(resource)) else {
            debug!(%resource, "Already loading, skipping");
            return LoadOutcome::Skipped;
        };

        info!(%resource, "Loading collection");

        match fetch().await {
            Ok(records) => {
                let count: usize = records.len();
                {
                    let mut state = self.state.write().await;
                    install(&mut *state, records, OffsetDateTime::now_utc());
                }
                info!(%resource, count, "Loaded collection");

                let event: SyncEvent = match resource {
                    Resource::Users => SyncEvent::UsersLoaded { count },
                    Resource::Tickets => SyncEvent::TicketsLoaded { count },
                };
                self.events.broadcast(&event);

                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                let message: String = err.to_string();
                error!(%resource, error = %err, "Failed to load collection");

                self.state
                    .write()
                    .await
                    .record_failure(resource, message.clone());
                self.events.broadcast(&SyncEvent::LoadFailed {
                    resource: resource.as_str().to_string(),
                    message: message.clone(),
                });

                LoadOutcome::Failed { message }
            }
        }
    }

    const fn flag(&self, resource: Resource) -> &AtomicBool {
        match resource {
            Resource::Users => &self.users_loading,
            Resource::Tickets => &self.tickets_loading,
        }
    }
}
