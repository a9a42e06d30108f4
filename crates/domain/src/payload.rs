// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request bodies sent to the remote services on create and update.

use crate::types::{TicketStatus, UserId, UserRole};
use serde::{Deserialize, Serialize};

/// A user without a server-assigned id.
///
/// Used as the body for both `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Role in the ticketing system.
    pub role: UserRole,
}

/// A ticket body for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    /// The ticket id. Only set on updates, where the ticket service
    /// expects the id inside the body as well as in the path.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    /// Free-text description of the problem.
    pub issue: String,
    /// The user raising the ticket.
    pub raised_by: UserId,
    /// The agent the ticket is assigned to. Serialized as `null` when unset.
    pub assigned_to: Option<UserId>,
    /// Initial or updated status.
    pub status: TicketStatus,
}

impl TicketDraft {
    /// Creates a draft for a brand new, unassigned, open ticket.
    #[must_use]
    pub fn open(issue: impl Into<String>, raised_by: UserId) -> Self {
        Self {
            id: None,
            issue: issue.into(),
            raised_by,
            assigned_to: None,
            status: TicketStatus::Open,
        }
    }
}
