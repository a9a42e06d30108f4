// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use conquest_domain::{DomainError, Ticket, User, UserId, UserRole};
use time::OffsetDateTime;

use crate::stats::TicketStats;

/// The two remote collections the console mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The user service collection.
    Users,
    /// The ticket service collection.
    Tickets,
}

impl Resource {
    /// Returns the lowercase name used in logs and events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tickets => "tickets",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Load bookkeeping for one cached collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStatus {
    /// When the collection was last installed from a successful fetch.
    pub loaded_at: Option<OffsetDateTime>,
    /// The error from the most recent failed fetch.
    ///
    /// Cleared by the next successful install.
    pub last_error: Option<String>,
}

impl ResourceStatus {
    /// Returns whether the collection has ever been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}

/// The most recently fetched user and ticket collections.
///
/// Collections are only ever replaced wholesale. A failed fetch leaves the
/// previous collection in place and records the failure in the matching
/// `ResourceStatus`.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    users: Vec<User>,
    tickets: Vec<Ticket>,
    /// Position in `users` for each id; rebuilt on every users install.
    user_index: HashMap<UserId, usize>,
    users_status: ResourceStatus,
    tickets_status: ResourceStatus,
}

impl ClientState {
    /// Creates an empty state with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached users in the order the service returned them.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the cached tickets in the order the service returned them.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Replaces the user collection and rebuilds the id lookup.
    ///
    /// When the same id appears more than once the last record wins.
    pub fn install_users(&mut self, users: Vec<User>, loaded_at: OffsetDateTime) {
        let mut index: HashMap<UserId, usize> = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            index.insert(user.id, position);
        }

        self.users = users;
        self.user_index = index;
        self.users_status = ResourceStatus {
            loaded_at: Some(loaded_at),
            last_error: None,
        };
    }

    /// Replaces the ticket collection.
    pub fn install_tickets(&mut self, tickets: Vec<Ticket>, loaded_at: OffsetDateTime) {
        self.tickets = tickets;
        self.tickets_status = ResourceStatus {
            loaded_at: Some(loaded_at),
            last_error: None,
        };
    }

    /// Records a failed fetch without touching the cached collection.
    pub fn record_failure(&mut self, resource: Resource, message: String) {
        match resource {
            Resource::Users => self.users_status.last_error = Some(message),
            Resource::Tickets => self.tickets_status.last_error = Some(message),
        }
    }

    /// Returns the load bookkeeping for a collection.
    #[must_use]
    pub const fn status(&self, resource: Resource) -> &ResourceStatus {
        match resource {
            Resource::Users => &self.users_status,
            Resource::Tickets => &self.tickets_status,
        }
    }

    /// Looks up a cached user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.user_index
            .get(&id)
            .and_then(|&position| self.users.get(position))
    }

    /// Returns the number of distinct ids in the lookup.
    #[must_use]
    pub fn indexed_user_count(&self) -> usize {
        self.user_index.len()
    }

    /// Returns the display name for a user id.
    ///
    /// Falls back to `User #<id>` when the user is not cached.
    #[must_use]
    pub fn user_name(&self, id: UserId) -> String {
        self.user(id)
            .map_or_else(|| format!("User #{id}"), |user| user.name.clone())
    }

    /// Looks up a cached user, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UserNotFound` if no cached user has this id.
    pub fn require_user(&self, id: UserId) -> Result<&User, DomainError> {
        self.user(id).ok_or(DomainError::UserNotFound(id))
    }

    /// Looks up a cached ticket by id.
    #[must_use]
    pub fn ticket(&self, id: i64) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// Looks up a cached ticket, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotFound` if no cached ticket has this id.
    pub fn require_ticket(&self, id: i64) -> Result<&Ticket, DomainError> {
        self.ticket(id).ok_or(DomainError::TicketNotFound(id))
    }

    /// Returns the tickets raised by a user, in cache order.
    #[must_use]
    pub fn tickets_raised_by(&self, id: UserId) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| ticket.raised_by == Some(id))
            .collect()
    }

    /// Returns the users who can be assigned tickets.
    #[must_use]
    pub fn agents(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| user.role == UserRole::Agent)
            .collect()
    }

    /// Computes dashboard counters over the cached collections.
    #[must_use]
    pub fn stats(&self) -> TicketStats {
        TicketStats::from_collections(&self.users, &self.tickets)
    }
}
