// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest_domain::{Ticket, TicketStatus, User, UserRole};
use time::OffsetDateTime;

use crate::ClientState;

pub fn create_test_user(id: i64, name: &str, role: UserRole) -> User {
    User::new(
        id,
        name,
        format!("{}@example.com", name.to_lowercase()),
        format!("555-01{id:02}"),
        role,
    )
}

pub fn create_test_ticket(id: i64, issue: &str, raised_by: i64, status: TicketStatus) -> Ticket {
    let mut ticket: Ticket = Ticket::new(id, issue, raised_by);
    ticket.status = Some(status);
    ticket
}

pub fn create_test_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

/// Ann (customer), Bo (agent) and three tickets, one per status.
pub fn create_test_state() -> ClientState {
    let mut state: ClientState = ClientState::new();
    state.install_users(
        vec![
            create_test_user(1, "Ann", UserRole::Customer),
            create_test_user(2, "Bo", UserRole::Agent),
        ],
        create_test_time(),
    );

    let mut assigned: Ticket = create_test_ticket(11, "VPN drops", 1, TicketStatus::Assigned);
    assigned.assigned_to = Some(2);

    state.install_tickets(
        vec![
            create_test_ticket(10, "Printer jam", 1, TicketStatus::Open),
            assigned,
            create_test_ticket(12, "Password reset", 2, TicketStatus::Closed),
        ],
        create_test_time(),
    );
    state
}
