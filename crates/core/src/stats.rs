// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest_domain::{Ticket, TicketStatus, User};

/// Dashboard counters derived from the cached collections.
///
/// Tickets without a status count as open. Tickets with an unrecognised
/// status only count toward `total_tickets`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    /// Number of cached users.
    pub total_users: usize,
    /// Number of cached tickets.
    pub total_tickets: usize,
    /// Tickets that are open.
    pub open: usize,
    /// Tickets assigned to an agent.
    pub assigned: usize,
    /// Tickets that are closed.
    pub closed: usize,
}

impl TicketStats {
    /// Counts users and tickets by status.
    #[must_use]
    pub fn from_collections(users: &[User], tickets: &[Ticket]) -> Self {
        let mut stats: Self = Self {
            total_users: users.len(),
            total_tickets: tickets.len(),
            ..Self::default()
        };

        for ticket in tickets {
            match ticket.effective_status() {
                TicketStatus::Open => stats.open += 1,
                TicketStatus::Assigned => stats.assigned += 1,
                TicketStatus::Closed => stats.closed += 1,
                TicketStatus::Other(_) => {}
            }
        }

        stats
    }

    /// Tickets that are not closed.
    #[must_use]
    pub const fn open_or_assigned(&self) -> usize {
        self.total_tickets.saturating_sub(self.closed)
    }
}
