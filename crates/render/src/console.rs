// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tabular console: stat tiles, searchable tables and edit forms.
//!
//! Navigation state (active tab, search terms) travels in query parameters.
//! Every link that changes one of them is a `GET` form carrying the others
//! as hidden fields, so nothing here needs URL encoding.

use conquest::{ClientState, TicketStats, filter_tickets, filter_users};
use conquest_domain::{Ticket, TicketStatus, User, UserId, UserRole};

use crate::badge::console_role_badge;
use crate::html::{Component, escape_html};
use crate::view_model::{
    ROLE_CHOICES, STATUS_CHOICES, TicketView, UserOption, choice_options, user_select,
};

/// Which console table is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTab {
    /// The users table.
    #[default]
    Users,
    /// The tickets table.
    Tickets,
}

impl ConsoleTab {
    /// Parses the `tab` query parameter. Anything unrecognized selects users.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("tickets") => Self::Tickets,
            _ => Self::Users,
        }
    }

    /// Returns the query parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tickets => "tickets",
        }
    }
}

/// Raw user form field values, kept as typed so a rejected form can be
/// shown again unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormValues {
    /// Name field.
    pub name: String,
    /// Email field.
    pub email: String,
    /// Phone field.
    pub phone: String,
    /// Role field.
    pub role: String,
}

impl UserFormValues {
    /// Prefills the form from a cached user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}

/// Create or edit form for a user.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    editing: Option<UserId>,
    values: UserFormValues,
}

impl UserForm {
    /// An empty create form.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// A create form showing previously submitted values.
    #[must_use]
    pub const fn create_with(values: UserFormValues) -> Self {
        Self {
            editing: None,
            values,
        }
    }

    /// An edit form for user `id`.
    #[must_use]
    pub const fn edit(id: UserId, values: UserFormValues) -> Self {
        Self {
            editing: Some(id),
            values,
        }
    }
}

impl Component for UserForm {
    fn render(&self) -> String {
        let (title, action, submit): (&str, String, &str) = match self.editing {
            Some(id) => ("Edit User", format!("/console/users/{id}"), "Update User"),
            None => ("Create New User", String::from("/console/users"), "Create User"),
        };
        let roles: String = choice_options(
            ROLE_CHOICES.iter().map(UserRole::as_str),
            self.values.role.trim(),
            "Select role",
        );

        format!(
            r#"<section class="card form-card" id="user-form">
<h3>{title}</h3>
<form method="post" action="{action}">
<label for="name">Name</label>
<input type="text" name="name" id="name" value="{name}" required>
<label for="email">Email</label>
<input type="email" name="email" id="email" value="{email}" required>
<label for="phone">Phone</label>
<input type="tel" name="phone" id="phone" value="{phone}">
<label for="role">Role</label>
<select name="role" id="role">{roles}</select>
<button class="btn btn-primary" type="submit">{submit}</button>
<a class="btn btn-secondary" href="/console?tab=users">Cancel</a>
</form>
</section>"#,
            name = escape_html(&self.values.name),
            email = escape_html(&self.values.email),
            phone = escape_html(&self.values.phone),
        )
    }
}

/// Ticket form field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFormValues {
    /// Issue text.
    pub issue: String,
    /// Selected raising user.
    pub raised_by: Option<UserId>,
    /// Selected agent.
    pub assigned_to: Option<UserId>,
    /// Selected status.
    pub status: TicketStatus,
}

impl Default for TicketFormValues {
    fn default() -> Self {
        Self {
            issue: String::new(),
            raised_by: None,
            assigned_to: None,
            status: TicketStatus::Open,
        }
    }
}

impl TicketFormValues {
    /// Prefills the form from a cached ticket.
    #[must_use]
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            issue: ticket.issue.clone().unwrap_or_default(),
            raised_by: ticket.raised_by,
            assigned_to: ticket.assigned_to,
            status: ticket.effective_status(),
        }
    }
}

/// Create or edit form for a ticket.
#[derive(Debug, Clone)]
pub struct TicketForm {
    editing: Option<i64>,
    values: TicketFormValues,
    users: Vec<UserOption>,
}

impl TicketForm {
    /// An empty create form.
    #[must_use]
    pub fn create(state: &ClientState) -> Self {
        Self::create_with(state, TicketFormValues::default())
    }

    /// A create form showing previously submitted values.
    #[must_use]
    pub fn create_with(state: &ClientState, values: TicketFormValues) -> Self {
        Self {
            editing: None,
            values,
            users: UserOption::for_users(state.users()),
        }
    }

    /// An edit form for ticket `id`.
    #[must_use]
    pub fn edit(state: &ClientState, id: i64, values: TicketFormValues) -> Self {
        Self {
            editing: Some(id),
            values,
            users: UserOption::for_users(state.users()),
        }
    }
}

impl Component for TicketForm {
    fn render(&self) -> String {
        let (title, action, submit): (&str, String, &str) = match self.editing {
            Some(id) => (
                "Edit Ticket",
                format!("/console/tickets/{id}"),
                "Update Ticket",
            ),
            None => (
                "Create New Ticket",
                String::from("/console/tickets"),
                "Create Ticket",
            ),
        };
        let statuses: String = choice_options(
            STATUS_CHOICES.iter().map(TicketStatus::as_str),
            self.values.status.as_str(),
            "Select status",
        );

        format!(
            r#"<section class="card form-card" id="ticket-form">
<h3>{title}</h3>
<form method="post" action="{action}">
<label for="issue">Issue</label>
<textarea name="issue" id="issue" required>{issue}</textarea>
<label for="raised_by">Raised by</label>
{raised_by}
<label for="assigned_to">Assigned to</label>
{assigned_to}
<label for="status">Status</label>
<select name="status" id="status">{statuses}</select>
<button class="btn btn-primary" type="submit">{submit}</button>
<a class="btn btn-secondary" href="/console?tab=tickets">Cancel</a>
</form>
</section>"#,
            issue = escape_html(&self.values.issue),
            raised_by = user_select("raised_by", "Select user", &self.users, self.values.raised_by),
            assigned_to = user_select(
                "assigned_to",
                "Not assigned",
                &self.users,
                self.values.assigned_to
            ),
        )
    }
}

fn empty_row(colspan: u8, message: &str) -> String {
    format!(
        r#"<tr><td colspan="{colspan}"><div class="empty-state"><p>{}</p></div></td></tr>"#,
        escape_html(message)
    )
}

/// Hidden inputs that carry the console navigation state through a `GET` form.
fn hidden_state(tab: ConsoleTab, user_term: &str, ticket_term: &str) -> String {
    format!(
        r#"<input type="hidden" name="tab" value="{}"><input type="hidden" name="user_q" value="{}"><input type="hidden" name="ticket_q" value="{}">"#,
        tab.as_str(),
        escape_html(user_term),
        escape_html(ticket_term)
    )
}

/// The full console page.
#[derive(Debug, Clone)]
pub struct ConsolePage {
    tab: ConsoleTab,
    user_term: String,
    ticket_term: String,
    stats: TicketStats,
    users: Vec<User>,
    tickets: Vec<TicketView>,
    agents: Vec<UserOption>,
    user_form: UserForm,
    ticket_form: TicketForm,
}

impl ConsolePage {
    /// Builds the console with both tables filtered by their terms and
    /// empty create forms.
    #[must_use]
    pub fn new(state: &ClientState, tab: ConsoleTab, user_term: &str, ticket_term: &str) -> Self {
        let agents: Vec<UserOption> = state.agents().into_iter().map(UserOption::new).collect();
        Self {
            tab,
            user_term: user_term.to_string(),
            ticket_term: ticket_term.to_string(),
            stats: state.stats(),
            users: filter_users(state.users(), user_term)
                .into_iter()
                .cloned()
                .collect(),
            tickets: TicketView::from_tickets(state, filter_tickets(state, ticket_term)),
            agents,
            user_form: UserForm::create(),
            ticket_form: TicketForm::create(state),
        }
    }

    /// Replaces the user form, switching to the users tab.
    #[must_use]
    pub fn with_user_form(mut self, form: UserForm) -> Self {
        self.tab = ConsoleTab::Users;
        self.user_form = form;
        self
    }

    /// Replaces the ticket form, switching to the tickets tab.
    #[must_use]
    pub fn with_ticket_form(mut self, form: TicketForm) -> Self {
        self.tab = ConsoleTab::Tickets;
        self.ticket_form = form;
        self
    }

    fn stat_tiles(&self) -> String {
        format!(
            r#"<div class="stats-grid">
<div class="stat-card"><span class="label">Total Users</span><h2 id="totalUsers">{}</h2></div>
<div class="stat-card"><span class="label">Open Tickets</span><h2 id="openTickets">{}</h2></div>
<div class="stat-card"><span class="label">Assigned</span><h2 id="assignedTickets">{}</h2></div>
<div class="stat-card"><span class="label">Closed</span><h2 id="closedTickets">{}</h2></div>
</div>"#,
            self.stats.total_users, self.stats.open, self.stats.assigned, self.stats.closed
        )
    }

    fn tab_buttons(&self) -> String {
        [ConsoleTab::Users, ConsoleTab::Tickets]
            .iter()
            .map(|tab| {
                let class: &str = if *tab == self.tab { "tab-btn active" } else { "tab-btn" };
                let label: &str = match tab {
                    ConsoleTab::Users => "Users",
                    ConsoleTab::Tickets => "Tickets",
                };
                format!(
                    r#"<form method="get" action="/console" class="inline">{}<button class="{class}" type="submit">{label}</button></form>"#,
                    hidden_state(*tab, &self.user_term, &self.ticket_term)
                )
            })
            .collect()
    }

    fn users_table(&self) -> String {
        let rows: String = if self.users.is_empty() {
            empty_row(6, "No users found")
        } else {
            self.users
                .iter()
                .map(|user| {
                    format!(
                        r#"<tr>
<td><strong>#{id}</strong></td>
<td>{name}</td>
<td>{email}</td>
<td>{phone}</td>
<td>{role}</td>
<td><div class="action-buttons"><a class="btn btn-sm btn-secondary" href="/console/users/{id}/edit">Edit</a><a class="btn btn-sm btn-danger" href="/console/users/{id}/delete">Delete</a></div></td>
</tr>"#,
                        id = user.id,
                        name = escape_html(&user.name),
                        email = escape_html(&user.email),
                        phone = escape_html(&user.phone),
                        role = console_role_badge(&user.role).render(),
                    )
                })
                .collect()
        };

        format!(
            r#"<form method="get" action="/console" class="search-box">
<input type="hidden" name="tab" value="users"><input type="hidden" name="ticket_q" value="{ticket_q}">
<input type="search" name="user_q" id="userSearch" value="{user_q}" placeholder="Search users...">
<button class="btn btn-secondary" type="submit">Search</button>
</form>
<table class="data-table">
<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th><th>Role</th><th>Actions</th></tr></thead>
<tbody id="usersTableBody">{rows}</tbody>
</table>
{form}"#,
            ticket_q = escape_html(&self.ticket_term),
            user_q = escape_html(&self.user_term),
            form = self.user_form.render(),
        )
    }

    fn ticket_actions(&self, ticket: &TicketView) -> String {
        let id: i64 = ticket.id;
        let mut actions: String = format!(
            r#"<a class="btn btn-sm btn-secondary" href="/console/tickets/{id}/edit">Edit</a><a class="btn btn-sm btn-danger" href="/console/tickets/{id}/delete">Delete</a>"#
        );
        if !ticket.is_closed() {
            actions.push_str(&format!(
                r#"<form method="post" action="/console/tickets/{id}/close" class="inline"><button class="btn btn-sm btn-secondary" type="submit">Close</button></form>"#
            ));
            if !self.agents.is_empty() {
                actions.push_str(&format!(
                    r#"<form method="post" action="/console/tickets/{id}/assign" class="inline">{}<button class="btn btn-sm btn-secondary" type="submit">Assign</button></form>"#,
                    user_select("agent_id", "Select agent", &self.agents, ticket.assigned_to)
                ));
            }
        }
        actions
    }

    fn tickets_table(&self) -> String {
        let rows: String = if self.tickets.is_empty() {
            empty_row(7, "No tickets found")
        } else {
            self.tickets
                .iter()
                .map(|ticket| {
                    let assigned: String = ticket.assigned_to_name.as_ref().map_or_else(
                        || String::from(r#"<span class="muted">Unassigned</span>"#),
                        |name| escape_html(name),
                    );
                    format!(
                        r#"<tr>
<td><strong>#{id}</strong></td>
<td>{issue}</td>
<td>{raised_by}</td>
<td>{assigned}</td>
<td>{badge}</td>
<td>{raised_on}</td>
<td><div class="action-buttons">{actions}</div></td>
</tr>"#,
                        id = ticket.id,
                        issue = escape_html(&ticket.issue),
                        raised_by = escape_html(&ticket.raised_by_name),
                        badge = ticket.badge.render(),
                        raised_on = escape_html(ticket.raised_on.as_deref().unwrap_or("N/A")),
                        actions = self.ticket_actions(ticket),
                    )
                })
                .collect()
        };

        format!(
            r#"<form method="get" action="/console" class="search-box">
<input type="hidden" name="tab" value="tickets"><input type="hidden" name="user_q" value="{user_q}">
<input type="search" name="ticket_q" id="ticketSearch" value="{ticket_q}" placeholder="Search tickets...">
<button class="btn btn-secondary" type="submit">Search</button>
</form>
<table class="data-table">
<thead><tr><th>ID</th><th>Issue</th><th>Raised By</th><th>Assigned To</th><th>Status</th><th>Raised On</th><th>Actions</th></tr></thead>
<tbody id="ticketsTableBody">{rows}</tbody>
</table>
{form}"#,
            user_q = escape_html(&self.user_term),
            ticket_q = escape_html(&self.ticket_term),
            form = self.ticket_form.render(),
        )
    }
}

impl Component for ConsolePage {
    fn render(&self) -> String {
        let content: String = match self.tab {
            ConsoleTab::Users => format!(
                r#"<div class="tab-content active" id="usersTab">{}</div>"#,
                self.users_table()
            ),
            ConsoleTab::Tickets => format!(
                r#"<div class="tab-content active" id="ticketsTab">{}</div>"#,
                self.tickets_table()
            ),
        };

        format!(
            r#"<header><h1>Ticket Management Console</h1></header>
{tiles}
<div class="tabs">{tabs}</div>
{content}"#,
            tiles = self.stat_tiles(),
            tabs = self.tab_buttons(),
        )
    }
}

/// Asks the operator to confirm a delete before anything is sent.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    noun: &'static str,
    tab: ConsoleTab,
    id: i64,
    summary: String,
}

impl DeleteConfirmation {
    /// Confirmation for deleting a user.
    #[must_use]
    pub fn user(user: &User) -> Self {
        Self {
            noun: "user",
            tab: ConsoleTab::Users,
            id: user.id,
            summary: format!("{} ({})", user.name, user.email),
        }
    }

    /// Confirmation for deleting a ticket.
    #[must_use]
    pub fn ticket(ticket: &TicketView) -> Self {
        Self {
            noun: "ticket",
            tab: ConsoleTab::Tickets,
            id: ticket.id,
            summary: format!("Ticket #{}: {}", ticket.id, ticket.issue),
        }
    }
}

impl Component for DeleteConfirmation {
    fn render(&self) -> String {
        format!(
            r#"<section class="card confirm-card">
<h3>Are you sure you want to delete this {noun}?</h3>
<p>{summary}</p>
<form method="post" action="/console/{tab}/{id}/delete">
<button class="btn btn-danger" type="submit" name="confirmed" value="true">Delete</button>
<button class="btn btn-secondary" type="submit" name="confirmed" value="false">Cancel</button>
</form>
</section>"#,
            noun = self.noun,
            summary = escape_html(&self.summary),
            tab = self.tab.as_str(),
            id = self.id,
        )
    }
}
