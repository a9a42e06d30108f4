// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-ready projections of cached records.
//!
//! View models resolve ids to names and apply display fallbacks once, so
//! components only interpolate. Text fields hold raw (unescaped) values.

use conquest::ClientState;
use conquest_domain::{Ticket, TicketStatus, User, UserId, UserRole};

use crate::badge::{Badge, directory_role_badge, status_badge};
use crate::format::format_timestamp;
use crate::html::escape_html;

/// Shown in place of a missing issue.
pub const NO_ISSUE: &str = "No issue description";

/// Shown for a ticket that names no raising user.
pub const UNKNOWN_RAISER: &str = "Unknown user";

/// A ticket with names resolved and fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketView {
    /// Ticket id.
    pub id: i64,
    /// Issue text, or `No issue description`.
    pub issue: String,
    /// Status, `OPEN` when the wire value was missing.
    pub status: TicketStatus,
    /// Status badge.
    pub badge: Badge,
    /// Raising user's id, when the record names one.
    pub raised_by: Option<UserId>,
    /// Raising user's name, `User #<id>` when not cached, or `Unknown user`.
    pub raised_by_name: String,
    /// Assigned agent's id.
    pub assigned_to: Option<UserId>,
    /// Assigned agent's name, or `User #<id>`.
    pub assigned_to_name: Option<String>,
    /// Formatted raise date.
    pub raised_on: Option<String>,
    /// Formatted close date, when closed.
    pub closed_on: Option<String>,
}

impl TicketView {
    /// Builds the view for one cached ticket.
    #[must_use]
    pub fn new(state: &ClientState, ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            issue: ticket
                .issue
                .as_deref()
                .filter(|issue| !issue.is_empty())
                .unwrap_or(NO_ISSUE)
                .to_string(),
            status: ticket.effective_status(),
            badge: status_badge(ticket.status.as_ref()),
            raised_by: ticket.raised_by,
            raised_by_name: ticket
                .raised_by
                .map_or_else(|| UNKNOWN_RAISER.to_string(), |id| state.user_name(id)),
            assigned_to: ticket.assigned_to,
            assigned_to_name: ticket.assigned_to.map(|id| state.user_name(id)),
            raised_on: display_timestamp(ticket.raised_on.as_deref()),
            closed_on: display_timestamp(ticket.closed_on.as_deref()),
        }
    }

    /// Builds views for a sequence of tickets, keeping their order.
    #[must_use]
    pub fn from_tickets<'a>(
        state: &ClientState,
        tickets: impl IntoIterator<Item = &'a Ticket>,
    ) -> Vec<Self> {
        tickets
            .into_iter()
            .map(|ticket| Self::new(state, ticket))
            .collect()
    }

    /// Returns whether the ticket is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == TicketStatus::Closed
    }
}

fn display_timestamp(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| format_timestamp(Some(value)))
}

/// A user row in the directory, with the tickets that user raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone, or `–` when empty.
    pub phone: String,
    /// Role badge.
    pub role_badge: Badge,
    /// Tickets raised by this user, in cache order.
    pub tickets: Vec<TicketView>,
}

impl UserSummary {
    /// Builds the summary for one cached user.
    #[must_use]
    pub fn new(state: &ClientState, user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: if user.phone.is_empty() {
                String::from("\u{2013}")
            } else {
                user.phone.clone()
            },
            role_badge: directory_role_badge(&user.role),
            tickets: TicketView::from_tickets(state, state.tickets_raised_by(user.id)),
        }
    }
}

/// One entry in a user dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    /// Submitted value.
    pub id: UserId,
    /// `name (ROLE)`.
    pub label: String,
}

impl UserOption {
    /// Creates the option for a user.
    #[must_use]
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id,
            label: format!("{} ({})", user.name, user.role),
        }
    }

    /// Creates options for every user, in cache order.
    #[must_use]
    pub fn for_users(users: &[User]) -> Vec<Self> {
        users.iter().map(Self::new).collect()
    }
}

/// Renders a `<select>` over `options` with a leading empty placeholder.
pub(crate) fn user_select(
    name: &str,
    placeholder: &str,
    options: &[UserOption],
    selected: Option<UserId>,
) -> String {
    let mut html: String = format!(
        r#"<select name="{name}" id="{name}"><option value="">{}</option>"#,
        escape_html(placeholder)
    );
    for option in options {
        let marker: &str = if selected == Some(option.id) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{}"{marker}>{}</option>"#,
            option.id,
            escape_html(&option.label)
        ));
    }
    // A selection that is no longer cached stays selected under its placeholder name.
    if let Some(id) = selected.filter(|id| !options.iter().any(|option| option.id == *id)) {
        html.push_str(&format!(r#"<option value="{id}" selected>User #{id}</option>"#));
    }
    html.push_str("</select>");
    html
}

/// Renders `<option>`s for a fixed set of wire values with `current`
/// selected. A current value outside `choices` is kept as an extra option
/// so submitting the form does not silently replace it.
pub(crate) fn choice_options<'a>(
    choices: impl IntoIterator<Item = &'a str>,
    current: &str,
    placeholder: &str,
) -> String {
    let mut known: bool = false;
    let mut html: String = choices
        .into_iter()
        .map(|choice| {
            let marker: &str = if choice == current {
                known = true;
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{0}"{marker}>{0}</option>"#, escape_html(choice))
        })
        .collect();
    if !known {
        let label: &str = if current.is_empty() { placeholder } else { current };
        html.push_str(&format!(
            r#"<option value="{}" selected>{}</option>"#,
            escape_html(current),
            escape_html(label)
        ));
    }
    html
}

/// Role choices offered by the user form.
pub(crate) const ROLE_CHOICES: [UserRole; 2] = [UserRole::Customer, UserRole::Agent];

/// Status choices offered by the ticket form.
pub(crate) const STATUS_CHOICES: [TicketStatus; 3] = [
    TicketStatus::Open,
    TicketStatus::Assigned,
    TicketStatus::Closed,
];
