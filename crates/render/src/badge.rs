// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest_domain::{TicketStatus, UserRole};

use crate::html::{Component, escape_html};

/// A labelled status pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Style class, e.g. `badge-open`.
    pub class: String,
    /// Visible text.
    pub label: String,
}

impl Badge {
    fn new(class: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            label: label.into(),
        }
    }
}

impl Component for Badge {
    fn render(&self) -> String {
        format!(
            r#"<span class="badge {}">{}</span>"#,
            escape_html(&self.class),
            escape_html(&self.label)
        )
    }
}

/// Maps a ticket status to its badge.
///
/// `CLOSED` is styled closed, `ASSIGNED` urgent, and everything else
/// (including unknown and missing statuses) open. A missing status is
/// labelled `OPEN`.
#[must_use]
pub fn status_badge(status: Option<&TicketStatus>) -> Badge {
    let class: &str = match status {
        Some(TicketStatus::Closed) => "badge-closed",
        Some(TicketStatus::Assigned) => "badge-urgent",
        _ => "badge-open",
    };
    Badge::new(class, TicketStatus::label_or_open(status))
}

/// Role badge used in the user directory: customers read as open,
/// everyone else as closed.
#[must_use]
pub fn directory_role_badge(role: &UserRole) -> Badge {
    let class: &str = if *role == UserRole::Customer {
        "badge-open"
    } else {
        "badge-closed"
    };
    Badge::new(class, role.as_str())
}

/// Role badge used in the console tables: `badge-<role>`.
#[must_use]
pub fn console_role_badge(role: &UserRole) -> Badge {
    Badge::new(
        format!("badge-{}", role.as_str().to_lowercase()),
        role.as_str(),
    )
}
