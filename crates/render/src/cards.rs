// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Card-style pages: dashboard, ticket list and user directory.

use conquest::{ClientState, TicketStats, filter_tickets};

use crate::html::{Component, escape_html, render_all};
use crate::view_model::{TicketView, UserOption, UserSummary, user_select};

/// Number of tickets shown under "Recent Tickets".
const RECENT_TICKETS: usize = 5;

fn ticket_meta(ticket: &TicketView) -> String {
    let mut meta: String = format!(
        r#"<span>Ticket #{}</span><span class="sep">&middot;</span><span>Raised by <span class="user-name-tag">{}</span></span>"#,
        ticket.id,
        escape_html(&ticket.raised_by_name)
    );
    if let Some(raised_on) = &ticket.raised_on {
        meta.push_str(&format!(
            r#"<span class="sep">&middot;</span><span>{}</span>"#,
            escape_html(raised_on)
        ));
    }
    if let Some(assignee) = &ticket.assigned_to_name {
        meta.push_str(&format!(
            r#"<span class="sep">&middot;</span><span>Assigned to <span class="user-name-tag">{}</span></span>"#,
            escape_html(assignee)
        ));
    }
    meta
}

/// A ticket rendered as a card.
struct TicketCard<'a>(&'a TicketView);

impl Component for TicketCard<'_> {
    fn render(&self) -> String {
        let ticket: &TicketView = self.0;
        format!(
            r#"<div class="card ticket-card" id="ticket-{id}">
<div class="flex-between"><h3>{issue}</h3>{badge}</div>
<div class="ticket-meta">{meta}</div>
</div>"#,
            id = ticket.id,
            issue = escape_html(&ticket.issue),
            badge = ticket.badge.render(),
            meta = ticket_meta(ticket),
        )
    }
}

fn empty_card(message: &str) -> String {
    format!(
        r#"<div class="card empty-state">{}</div>"#,
        escape_html(message)
    )
}

/// Overview page: stat cards and the first few tickets.
#[derive(Debug, Clone)]
pub struct Dashboard {
    stats: TicketStats,
    recent: Vec<TicketView>,
    form: NewTicketForm,
}

impl Dashboard {
    /// Builds the dashboard from the cache.
    #[must_use]
    pub fn new(state: &ClientState) -> Self {
        Self {
            stats: state.stats(),
            recent: TicketView::from_tickets(state, state.tickets().iter().take(RECENT_TICKETS)),
            form: NewTicketForm::new(state),
        }
    }
}

impl Component for Dashboard {
    fn render(&self) -> String {
        let recent: String = if self.recent.is_empty() {
            empty_card("No tickets yet. Create one to get started.")
        } else {
            self.recent
                .iter()
                .map(|ticket| TicketCard(ticket).render())
                .collect()
        };

        format!(
            r#"<header class="flex-between">
<div><h1>Overview</h1><p>Welcome back. Here's what's happening today.</p></div>
</header>
<div class="grid-3">
<div class="card"><span class="label">Total Tickets</span><h2 id="stat-total-tickets">{total}</h2></div>
<div class="card"><span class="label">Open / Assigned</span><h2 id="stat-open-tickets">{open}</h2></div>
<div class="card"><span class="label">Closed</span><h2 id="stat-closed-tickets">{closed}</h2></div>
</div>
<section>
<div class="flex-between"><h3>Recent Tickets</h3><a href="/tickets">View all &rarr;</a></div>
<div id="recent-tickets-list">{recent}</div>
</section>
{form}"#,
            total = self.stats.total_tickets,
            open = self.stats.open_or_assigned(),
            closed = self.stats.closed,
            form = self.form.render(),
        )
    }
}

/// All tickets as cards, optionally filtered.
#[derive(Debug, Clone)]
pub struct TicketCards {
    term: String,
    tickets: Vec<TicketView>,
    form: NewTicketForm,
}

impl TicketCards {
    /// Builds the list from the cache, keeping tickets that match `term`.
    #[must_use]
    pub fn new(state: &ClientState, term: &str) -> Self {
        Self {
            term: term.to_string(),
            tickets: TicketView::from_tickets(state, filter_tickets(state, term)),
            form: NewTicketForm::new(state),
        }
    }
}

impl Component for TicketCards {
    fn render(&self) -> String {
        let cards: String = if self.tickets.is_empty() {
            empty_card("No tickets found.")
        } else {
            self.tickets
                .iter()
                .map(|ticket| TicketCard(ticket).render())
                .collect()
        };

        format!(
            r#"<header class="flex-between"><h1>All Tickets</h1></header>
<form method="get" action="/tickets" class="search-box">
<input type="search" name="q" value="{term}" placeholder="Search tickets...">
<button class="btn btn-secondary" type="submit">Search</button>
</form>
<div id="ticket-list">{cards}</div>
{form}"#,
            term = escape_html(&self.term),
            form = self.form.render(),
        )
    }
}

/// A directory row plus its expandable sub-row of raised tickets.
struct DirectoryRow<'a>(&'a UserSummary);

impl Component for DirectoryRow<'_> {
    fn render(&self) -> String {
        let user: &UserSummary = self.0;
        let count: usize = user.tickets.len();
        let count_class: &str = if count == 0 { " zero" } else { "" };

        let sub_list: String = if user.tickets.is_empty() {
            format!(
                r#"<p class="no-tickets-msg">No tickets raised by {}.</p>"#,
                escape_html(&user.name)
            )
        } else {
            user.tickets
                .iter()
                .map(|ticket| {
                    let raised: String = ticket
                        .raised_on
                        .as_ref()
                        .map(|date| format!(" &middot; {}", escape_html(date)))
                        .unwrap_or_default();
                    let assigned: String = ticket
                        .assigned_to_name
                        .as_ref()
                        .map(|name| format!(" &middot; Assigned to {}", escape_html(name)))
                        .unwrap_or_default();
                    format!(
                        r#"<div class="ticket-sub-item"><div class="ticket-info"><h4>{}</h4><span class="ticket-meta">Ticket #{}{raised}{assigned}</span></div>{}</div>"#,
                        escape_html(&ticket.issue),
                        ticket.id,
                        ticket.badge.render(),
                    )
                })
                .collect()
        };

        format!(
            r#"<tbody class="user-group">
<tr class="expandable-row" onclick="this.classList.toggle('expanded');document.getElementById('tickets-for-user-{id}').classList.toggle('visible')">
<td>#{id}</td>
<td class="user-name">{name}</td>
<td>{email}</td>
<td>{phone}</td>
<td>{role}</td>
<td><span class="ticket-count-badge{count_class}">{count}</span></td>
</tr>
<tr class="ticket-sub-row" id="tickets-for-user-{id}">
<td colspan="6"><div class="ticket-sub-list">{sub_list}</div></td>
</tr>
</tbody>"#,
            id = user.id,
            name = escape_html(&user.name),
            email = escape_html(&user.email),
            phone = escape_html(&user.phone),
            role = user.role_badge.render(),
        )
    }
}

/// User table with per-user ticket breakdown.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserSummary>,
}

impl UserDirectory {
    /// Builds the directory from the cache.
    #[must_use]
    pub fn new(state: &ClientState) -> Self {
        Self {
            users: state
                .users()
                .iter()
                .map(|user| UserSummary::new(state, user))
                .collect(),
        }
    }
}

impl Component for UserDirectory {
    fn render(&self) -> String {
        if self.users.is_empty() {
            return format!(
                r"<header><h1>User Directory</h1></header>{}",
                empty_card("No users found.")
            );
        }

        let rows: Vec<DirectoryRow<'_>> = self.users.iter().map(DirectoryRow).collect();
        format!(
            r#"<header><h1>User Directory</h1><p>{count} users registered. Click a row to see their tickets.</p></header>
<div class="card table-card">
<table class="data-table">
<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Role</th><th>Tickets</th></tr></thead>
{rows}
</table>
</div>"#,
            count = self.users.len(),
            rows = render_all(&rows),
        )
    }
}

/// Quick form that raises a new OPEN ticket.
#[derive(Debug, Clone)]
pub struct NewTicketForm {
    users: Vec<UserOption>,
}

impl NewTicketForm {
    /// Builds the form with every cached user selectable as the raiser.
    #[must_use]
    pub fn new(state: &ClientState) -> Self {
        Self {
            users: UserOption::for_users(state.users()),
        }
    }
}

impl Component for NewTicketForm {
    fn render(&self) -> String {
        format!(
            r#"<section class="card" id="new-ticket">
<h3>New Ticket</h3>
<form method="post" action="/tickets/new">
<label for="issue">Issue</label>
<textarea name="issue" id="issue" required></textarea>
<label for="raised_by">Raised by</label>
{select}
<button class="btn btn-primary" type="submit">Create Ticket</button>
</form>
</section>"#,
            select = user_select("raised_by", "Select user", &self.users, None),
        )
    }
}
