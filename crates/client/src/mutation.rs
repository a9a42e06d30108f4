// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Create, update and delete calls against the remote services.
//!
//! Mutations never patch the cache locally. A successful call is followed
//! by a full re-fetch of the affected collection; a failed call leaves the
//! cache exactly as it was.

use std::sync::Arc;

use conquest::Resource;
use conquest_domain::{
    DomainError, TicketDraft, UserDraft, validate_ticket_draft, validate_user_draft,
};
use tracing::{debug, error, info};

use crate::coordinator::{FetchCoordinator, LoadOutcome};
use crate::error::ClientError;

/// Asks the operator to confirm a destructive action.
pub trait Confirm {
    /// Returns `true` if the action described by `prompt` may proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// A pre-answered confirmation, e.g. a submitted "yes, delete" form field.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

/// Severity of a notice shown after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The mutation went through.
    Success,
    /// The mutation failed.
    Error,
}

impl NoticeLevel {
    /// CSS modifier for the notice banner.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or error.
    pub level: NoticeLevel,
    /// Text shown to the operator.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl From<DomainError> for Notice {
    fn from(err: DomainError) -> Self {
        Self::error(err.to_string())
    }
}

/// Result of a mutation as seen by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote call succeeded and the collection was re-fetched.
    Applied(Notice),
    /// Validation or the remote call failed; nothing changed.
    Failed(Notice),
    /// The operator declined the confirmation; no request was sent.
    Cancelled,
}

impl MutationOutcome {
    /// Returns the notice to display, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Applied(notice) | Self::Failed(notice) => Some(notice),
            Self::Cancelled => None,
        }
    }

    /// Returns whether the mutation was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Create,
    Update,
    Delete,
    Close,
    Assign,
}

impl Action {
    const fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Close => "close",
            Self::Assign => "assign",
        }
    }

    const fn past(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
            Self::Close => "closed",
            Self::Assign => "assigned",
        }
    }
}

const fn noun(resource: Resource) -> (&'static str, &'static str) {
    match resource {
        Resource::Users => ("User", "user"),
        Resource::Tickets => ("Ticket", "ticket"),
    }
}

/// Issues mutations and resynchronizes the cache afterwards.
#[derive(Debug, Clone)]
pub struct MutationGateway {
    coordinator: Arc<FetchCoordinator>,
}

impl MutationGateway {
    /// Creates a gateway that re-fetches through `coordinator`.
    #[must_use]
    pub const fn new(coordinator: Arc<FetchCoordinator>) -> Self {
        Self { coordinator }
    }

    /// Creates a user.
    pub async fn create_user(&self, draft: &UserDraft) -> MutationOutcome {
        if let Err(err) = validate_user_draft(draft) {
            return MutationOutcome::Failed(err.into());
        }
        let result = self.coordinator.remote().create_user(draft).await;
        self.finish(Resource::Users, Action::Create, None, result)
            .await
    }

    /// Replaces the fields of an existing user.
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> MutationOutcome {
        if let Err(err) = validate_user_draft(draft) {
            return MutationOutcome::Failed(err.into());
        }
        let result = self.coordinator.remote().update_user(id, draft).await;
        self.finish(Resource::Users, Action::Update, Some(id), result)
            .await
    }

    /// Deletes a user once `confirm` agrees.
    pub async fn delete_user(&self, id: i64, confirm: &impl Confirm) -> MutationOutcome {
        if !confirm.confirm("Are you sure you want to delete this user?") {
            info!(user_id = id, "User deletion cancelled");
            return MutationOutcome::Cancelled;
        }
        let result = self.coordinator.remote().delete_user(id).await;
        self.finish(Resource::Users, Action::Delete, Some(id), result)
            .await
    }

    /// Creates a ticket.
    pub async fn create_ticket(&self, draft: &TicketDraft) -> MutationOutcome {
        if let Err(err) = validate_ticket_draft(draft) {
            return MutationOutcome::Failed(err.into());
        }
        let result = self.coordinator.remote().create_ticket(draft).await;
        self.finish(Resource::Tickets, Action::Create, None, result)
            .await
    }

    /// Replaces the fields of an existing ticket.
    pub async fn update_ticket(&self, id: i64, draft: &TicketDraft) -> MutationOutcome {
        if let Err(err) = validate_ticket_draft(draft) {
            return MutationOutcome::Failed(err.into());
        }
        let result = self.coordinator.remote().update_ticket(id, draft).await;
        self.finish(Resource::Tickets, Action::Update, Some(id), result)
            .await
    }

    /// Deletes a ticket once `confirm` agrees.
    pub async fn delete_ticket(&self, id: i64, confirm: &impl Confirm) -> MutationOutcome {
        if !confirm.confirm("Are you sure you want to delete this ticket?") {
            info!(ticket_id = id, "Ticket deletion cancelled");
            return MutationOutcome::Cancelled;
        }
        let result = self.coordinator.remote().delete_ticket(id).await;
        self.finish(Resource::Tickets, Action::Delete, Some(id), result)
            .await
    }

    /// Marks a ticket closed.
    pub async fn close_ticket(&self, id: i64) -> MutationOutcome {
        let result = self.coordinator.remote().close_ticket(id).await;
        self.finish(Resource::Tickets, Action::Close, Some(id), result)
            .await
    }

    /// Assigns a ticket to an agent.
    pub async fn assign_ticket(&self, id: i64, agent_id: i64) -> MutationOutcome {
        let result = self.coordinator.remote().assign_ticket(id, agent_id).await;
        self.finish(Resource::Tickets, Action::Assign, Some(id), result)
            .await
    }

    async fn finish(
        &self,
        resource: Resource,
        action: Action,
        id: Option<i64>,
        result: Result<(), ClientError>,
    ) -> MutationOutcome {
        let (title, noun) = noun(resource);
        match result {
            Ok(()) => {
                info!(%resource, action = action.verb(), ?id, "Mutation applied");
                let refreshed: LoadOutcome = match resource {
                    Resource::Users => self.coordinator.load_users().await,
                    Resource::Tickets => self.coordinator.load_tickets().await,
                };
                debug!(%resource, ?refreshed, "Re-fetched after mutation");
                MutationOutcome::Applied(Notice::success(format!(
                    "{title} {} successfully",
                    action.past()
                )))
            }
            Err(err) => {
                error!(%resource, action = action.verb(), ?id, error = %err, "Mutation failed");
                MutationOutcome::Failed(Notice::error(format!(
                    "Failed to {} {noun}",
                    action.verb()
                )))
            }
        }
    }
}
