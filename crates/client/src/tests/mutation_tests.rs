// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::Cell;

use conquest_domain::{TicketDraft, TicketStatus, UserDraft, UserRole};

use super::fake_backend::FakeBackend;
use crate::{Confirm, MutationOutcome, Notice, NoticeLevel};

fn create_test_user_draft(name: &str) -> UserDraft {
    UserDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: String::from("555-0199"),
        role: UserRole::Customer,
    }
}

/// Records the prompt it was shown and answers with `answer`.
struct RecordingConfirm {
    answer: bool,
    prompt: Cell<Option<String>>,
}

impl Confirm for RecordingConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompt.set(Some(prompt.to_string()));
        self.answer
    }
}

#[tokio::test]
async fn test_create_user_refetches_users() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();
    coordinator.load_users().await;

    let outcome: MutationOutcome = gateway.create_user(&create_test_user_draft("Cy")).await;

    assert_eq!(
        outcome,
        MutationOutcome::Applied(Notice::success("User created successfully"))
    );
    assert_eq!(backend.user_list_hits(), 2);
    assert_eq!(backend.ticket_list_hits(), 0);
    let state = coordinator.read().await;
    assert_eq!(state.users().len(), 3);
    assert_eq!(state.user_name(3), "Cy");
}

#[tokio::test]
async fn test_invalid_user_draft_sends_nothing() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (_coordinator, gateway) = backend.gateway();
    let draft: UserDraft = UserDraft {
        email: String::from("not-an-email"),
        ..create_test_user_draft("Cy")
    };

    let outcome: MutationOutcome = gateway.create_user(&draft).await;

    let notice: &Notice = outcome.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("not-an-email"));
    assert_eq!(backend.write_hits(), 0);
}

#[tokio::test]
async fn test_failed_update_leaves_cache_untouched() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();
    coordinator.load_users().await;
    backend.fail_with(500);

    let outcome: MutationOutcome = gateway
        .update_user(1, &create_test_user_draft("Annie"))
        .await;

    assert_eq!(
        outcome,
        MutationOutcome::Failed(Notice::error("Failed to update user"))
    );
    assert_eq!(backend.user_list_hits(), 1);
    assert_eq!(coordinator.read().await.user_name(1), "Ann");
}

#[tokio::test]
async fn test_declined_delete_sends_no_request() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();
    coordinator.load_users().await;
    let confirm: RecordingConfirm = RecordingConfirm {
        answer: false,
        prompt: Cell::new(None),
    };

    let outcome: MutationOutcome = gateway.delete_user(1, &confirm).await;

    assert_eq!(outcome, MutationOutcome::Cancelled);
    assert!(outcome.notice().is_none());
    assert_eq!(
        confirm.prompt.take().as_deref(),
        Some("Are you sure you want to delete this user?")
    );
    assert_eq!(backend.write_hits(), 0);
    assert_eq!(coordinator.read().await.users().len(), 2);
}

#[tokio::test]
async fn test_confirmed_delete_removes_ticket() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();
    coordinator.load_tickets().await;

    let outcome: MutationOutcome = gateway.delete_ticket(5, &true).await;

    assert!(outcome.is_applied());
    assert_eq!(
        outcome.notice().unwrap().message,
        "Ticket deleted successfully"
    );
    assert!(coordinator.read().await.tickets().is_empty());
}

#[tokio::test]
async fn test_create_ticket_refetches_tickets_only() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();

    let outcome: MutationOutcome = gateway
        .create_ticket(&TicketDraft::open("Screen flickers", 2))
        .await;

    assert!(outcome.is_applied());
    assert_eq!(backend.ticket_list_hits(), 1);
    assert_eq!(backend.user_list_hits(), 0);
    let state = coordinator.read().await;
    assert_eq!(state.tickets().len(), 2);
    assert_eq!(state.ticket(6).unwrap().issue.as_deref(), Some("Screen flickers"));
}

#[tokio::test]
async fn test_empty_issue_is_rejected_locally() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (_coordinator, gateway) = backend.gateway();

    let outcome: MutationOutcome = gateway.create_ticket(&TicketDraft::open("  ", 1)).await;

    assert!(!outcome.is_applied());
    assert_eq!(backend.write_hits(), 0);
}

#[tokio::test]
async fn test_close_and_assign_update_status() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();

    let assigned: MutationOutcome = gateway.assign_ticket(5, 2).await;
    assert_eq!(
        assigned,
        MutationOutcome::Applied(Notice::success("Ticket assigned successfully"))
    );
    {
        let state = coordinator.read().await;
        let ticket = state.ticket(5).unwrap();
        assert_eq!(ticket.assigned_to, Some(2));
        assert_eq!(ticket.status, Some(TicketStatus::Assigned));
    }

    let closed: MutationOutcome = gateway.close_ticket(5).await;
    assert!(closed.is_applied());
    let state = coordinator.read().await;
    assert_eq!(state.ticket(5).unwrap().status, Some(TicketStatus::Closed));
    assert_eq!(state.stats().closed, 1);
}

#[tokio::test]
async fn test_failed_ticket_delete_reports_error() {
    let backend: FakeBackend = FakeBackend::start().await;
    let (coordinator, gateway) = backend.gateway();
    coordinator.load_tickets().await;
    backend.fail_with(404);

    let outcome: MutationOutcome = gateway.delete_ticket(5, &true).await;

    assert_eq!(
        outcome,
        MutationOutcome::Failed(Notice::error("Failed to delete ticket"))
    );
    assert_eq!(coordinator.read().await.tickets().len(), 1);
}
