// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest::ClientState;
use conquest_domain::{Ticket, TicketStatus, User, UserRole};
use time::OffsetDateTime;

pub fn create_test_user(id: i64, name: &str, role: UserRole) -> User {
    User::new(
        id,
        name,
        format!("{}@example.com", name.to_lowercase()),
        "555-0100",
        role,
    )
}

pub fn create_test_ticket(id: i64, issue: &str, raised_by: i64, status: TicketStatus) -> Ticket {
    Ticket {
        status: Some(status),
        ..Ticket::new(id, issue, raised_by)
    }
}

pub fn create_state(users: Vec<User>, tickets: Vec<Ticket>) -> ClientState {
    let mut state: ClientState = ClientState::new();
    state.install_users(users, OffsetDateTime::UNIX_EPOCH);
    state.install_tickets(tickets, OffsetDateTime::UNIX_EPOCH);
    state
}

/// Ann (customer) and Bo (agent); tickets 10 open, 11 assigned to Bo,
/// 12 closed.
pub fn create_test_state() -> ClientState {
    let assigned: Ticket = Ticket {
        assigned_to: Some(2),
        raised_on: Some(String::from("2026-01-15T10:30:00")),
        ..create_test_ticket(11, "VPN drops", 1, TicketStatus::Assigned)
    };
    create_state(
        vec![
            create_test_user(1, "Ann", UserRole::Customer),
            create_test_user(2, "Bo", UserRole::Agent),
        ],
        vec![
            create_test_ticket(10, "Printer jam", 1, TicketStatus::Open),
            assigned,
            create_test_ticket(12, "Password reset", 2, TicketStatus::Closed),
        ],
    )
}
