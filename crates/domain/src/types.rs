// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned numeric identifier of a user.
pub type UserId = i64;

/// The role a user holds in the ticketing system.
///
/// The user service stores roles as free-form strings. The two roles the
/// console knows about get their own variants; anything else is carried
/// through verbatim so a fetch never fails on an unfamiliar role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// A customer who raises tickets.
    Customer,
    /// A support agent who can be assigned tickets.
    Agent,
    /// Any other role string reported by the user service.
    Other(String),
}

impl UserRole {
    /// Returns the wire representation of this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => "CUSTOMER",
            Self::Agent => "AGENT",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CUSTOMER" => Self::Customer,
            "AGENT" => Self::Agent,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for UserRole {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    /// Raised and waiting for an agent.
    Open,
    /// Picked up by an agent.
    Assigned,
    /// Resolved.
    Closed,
    /// A status string the console does not recognise.
    Other(String),
}

impl TicketStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Assigned => "ASSIGNED",
            Self::Closed => "CLOSED",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the label shown for an optional status.
    ///
    /// Tickets without a status are displayed as `OPEN`.
    #[must_use]
    pub fn label_or_open(status: Option<&Self>) -> &str {
        status.map_or("OPEN", Self::as_str)
    }
}

impl From<String> for TicketStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OPEN" => Self::Open,
            "ASSIGNED" => Self::Assigned,
            "CLOSED" => Self::Closed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TicketStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        match status {
            TicketStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user record as returned by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name. Empty when the service sent none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Contact email.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Contact phone number. Empty when the service has none on file.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    /// Role in the ticketing system. A missing role reads as an empty
    /// `Other` role.
    #[serde(default, deserialize_with = "null_as_unknown_role")]
    pub role: UserRole,
}

impl User {
    /// Creates a new `User`.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
        }
    }
}

/// A ticket record as returned by the ticket service.
///
/// Timestamps are kept exactly as the service sent them; formatting for
/// display happens in the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Server-assigned identifier.
    pub id: i64,
    /// Free-text description of the problem.
    #[serde(default)]
    pub issue: Option<String>,
    /// The user who raised the ticket. Some legacy records carry none.
    #[serde(default)]
    pub raised_by: Option<UserId>,
    /// The agent the ticket is assigned to, if any.
    #[serde(default)]
    pub assigned_to: Option<UserId>,
    /// Current status. Older records may not carry one.
    #[serde(default)]
    pub status: Option<TicketStatus>,
    /// When the ticket was raised.
    #[serde(default)]
    pub raised_on: Option<String>,
    /// When the ticket was assigned.
    #[serde(default)]
    pub assigned_on: Option<String>,
    /// When the ticket was closed.
    #[serde(default)]
    pub closed_on: Option<String>,
}

impl Ticket {
    /// Creates a new open `Ticket` with no optional fields set.
    #[must_use]
    pub fn new(id: i64, issue: impl Into<String>, raised_by: UserId) -> Self {
        Self {
            id,
            issue: Some(issue.into()),
            raised_by: Some(raised_by),
            assigned_to: None,
            status: Some(TicketStatus::Open),
            raised_on: None,
            assigned_on: None,
            closed_on: None,
        }
    }

    /// Returns the status this ticket is treated as having.
    ///
    /// A missing status is equivalent to `OPEN`.
    #[must_use]
    pub fn effective_status(&self) -> TicketStatus {
        self.status.clone().unwrap_or(TicketStatus::Open)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown_role<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(UserRole::from)
        .unwrap_or_default())
}
