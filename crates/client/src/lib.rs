// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Talks to the user and ticket services on behalf of the console.
//!
//! - [`RemoteClient`] issues the raw REST calls.
//! - [`FetchCoordinator`] loads collections into the shared [`ClientState`]
//!   and guards against overlapping fetches.
//! - [`MutationGateway`] performs create/update/delete calls and re-fetches
//!   the affected collection afterwards.
//!
//! [`ClientState`]: conquest::ClientState

mod config;
mod coordinator;
mod error;
mod events;
mod mutation;
mod remote;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_BASE_URL, DEFAULT_TICKETS_PATH, DEFAULT_USERS_PATH, ServiceConfig};
pub use coordinator::{FetchCoordinator, LoadOutcome};
pub use error::ClientError;
pub use events::{SyncEvent, SyncEventBroadcaster};
pub use mutation::{Confirm, MutationGateway, MutationOutcome, Notice, NoticeLevel};
pub use remote::RemoteClient;
