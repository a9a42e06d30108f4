// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Case-insensitive substring search over the cached collections.
//!
//! Filters borrow from the cache and never write back to it.

use conquest_domain::{Ticket, TicketStatus, User};

use crate::state::ClientState;

/// Trims and case-folds a search term.
#[must_use]
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filters users by name, email, phone or role.
///
/// An empty term returns every user in cache order.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let needle: String = normalize_term(term);
    if needle.is_empty() {
        return users.iter().collect();
    }

    users
        .iter()
        .filter(|user| {
            contains_folded(&user.name, &needle)
                || contains_folded(&user.email, &needle)
                || contains_folded(&user.phone, &needle)
                || contains_folded(user.role.as_str(), &needle)
        })
        .collect()
}

/// Filters tickets by issue, status, raiser name or assignee name.
///
/// Names are resolved through the cached user lookup; tickets whose users
/// are not cached can only match on issue or status. A missing status is
/// searched as `OPEN`. An empty term returns every ticket in cache order.
#[must_use]
pub fn filter_tickets<'a>(state: &'a ClientState, term: &str) -> Vec<&'a Ticket> {
    let needle: String = normalize_term(term);
    if needle.is_empty() {
        return state.tickets().iter().collect();
    }

    state
        .tickets()
        .iter()
        .filter(|ticket| {
            let issue_matches: bool = ticket
                .issue
                .as_deref()
                .is_some_and(|issue| contains_folded(issue, &needle));
            let status_matches: bool = contains_folded(
                TicketStatus::label_or_open(ticket.status.as_ref()),
                &needle,
            );
            let raiser_matches: bool = ticket
                .raised_by
                .and_then(|id| state.user(id))
                .is_some_and(|user| contains_folded(&user.name, &needle));
            let assignee_matches: bool = ticket
                .assigned_to
                .and_then(|id| state.user(id))
                .is_some_and(|user| contains_folded(&user.name, &needle));

            issue_matches || status_matches || raiser_matches || assignee_matches
        })
        .collect()
}
