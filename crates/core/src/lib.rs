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

//! The console's in-memory data cache.
//!
//! `ClientState` holds the most recently fetched user and ticket
//! collections together with the id→user lookup derived from them. It has
//! no knowledge of the network: the fetch coordinator installs collections
//! into it and the renderer reads from it.

mod filter;
mod state;
mod stats;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use filter::{filter_tickets, filter_users, normalize_term};
pub use state::{ClientState, Resource, ResourceStatus};
pub use stats::TicketStats;
