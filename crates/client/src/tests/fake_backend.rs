// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process stand-in for the user and ticket services.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering};
use std::sync::Mutex;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
};
use conquest_domain::{Ticket, TicketDraft, TicketStatus, User, UserDraft, UserRole};
use tokio::sync::Notify;

use crate::{FetchCoordinator, MutationGateway, RemoteClient, ServiceConfig, SyncEventBroadcaster};

#[derive(Default)]
pub struct FakeServices {
    pub users: Mutex<Vec<User>>,
    pub tickets: Mutex<Vec<Ticket>>,
    pub user_list_hits: AtomicUsize,
    pub ticket_list_hits: AtomicUsize,
    pub write_hits: AtomicUsize,
    /// When set, user list requests wait for `release_users`.
    pub hold_users: AtomicBool,
    pub users_entered: Notify,
    pub release_users: Notify,
    /// Non-zero forces every request to answer with this status.
    pub fail_status: AtomicU16,
    /// When set, list endpoints answer with a body that is not JSON.
    pub garbage_body: AtomicBool,
    pub last_ticket_body: Mutex<Option<serde_json::Value>>,
    pub last_patch: Mutex<Option<String>>,
}

impl FakeServices {
    fn forced_failure(&self) -> Option<Response> {
        let status: u16 = self.fail_status.load(Ordering::SeqCst);
        (status != 0).then(|| {
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "forced failure",
            )
                .into_response()
        })
    }

    fn next_user_id(&self) -> i64 {
        self.users.lock().unwrap().iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    fn next_ticket_id(&self) -> i64 {
        self.tickets.lock().unwrap().iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}

pub struct FakeBackend {
    pub base_url: String,
    pub services: Arc<FakeServices>,
}

impl FakeBackend {
    /// Starts a backend seeded with Ann (customer), Bo (agent) and one
    /// open ticket raised by Ann.
    pub async fn start() -> Self {
        let services: Arc<FakeServices> = Arc::new(FakeServices::default());
        services.users.lock().unwrap().extend([
            User::new(1, "Ann", "ann@example.com", "555-0101", UserRole::Customer),
            User::new(2, "Bo", "bo@example.com", "555-0102", UserRole::Agent),
        ]);
        services
            .tickets
            .lock()
            .unwrap()
            .push(Ticket::new(5, "Printer jam", 1));

        let router: Router = Router::new()
            .route(
                "/user-micro-service/users",
                get(list_users).post(create_user),
            )
            .route(
                "/user-micro-service/users/{id}",
                put(update_user).delete(delete_user),
            )
            .route(
                "/ticket-service/tickets",
                get(list_tickets).post(create_ticket),
            )
            .route(
                "/ticket-service/tickets/{id}",
                put(update_ticket).delete(delete_ticket).patch(close_ticket),
            )
            .route(
                "/ticket-service/tickets/{id}/{agent_id}",
                patch(assign_ticket),
            )
            .with_state(Arc::clone(&services));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            services,
        }
    }

    pub fn config(&self) -> ServiceConfig {
        ServiceConfig::with_base_url(self.base_url.clone())
    }

    pub fn coordinator(&self) -> Arc<FetchCoordinator> {
        let remote: RemoteClient = RemoteClient::new(self.config()).unwrap();
        Arc::new(FetchCoordinator::new(remote, SyncEventBroadcaster::new()))
    }

    pub fn gateway(&self) -> (Arc<FetchCoordinator>, MutationGateway) {
        let coordinator: Arc<FetchCoordinator> = self.coordinator();
        let gateway: MutationGateway = MutationGateway::new(Arc::clone(&coordinator));
        (coordinator, gateway)
    }

    pub fn user_list_hits(&self) -> usize {
        self.services.user_list_hits.load(Ordering::SeqCst)
    }

    pub fn ticket_list_hits(&self) -> usize {
        self.services.ticket_list_hits.load(Ordering::SeqCst)
    }

    pub fn write_hits(&self) -> usize {
        self.services.write_hits.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, status: u16) {
        self.services.fail_status.store(status, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.services.fail_status.store(0, Ordering::SeqCst);
    }
}

async fn list_users(State(services): State<Arc<FakeServices>>) -> Response {
    services.user_list_hits.fetch_add(1, Ordering::SeqCst);
    if services.hold_users.load(Ordering::SeqCst) {
        services.users_entered.notify_one();
        services.release_users.notified().await;
    }
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    if services.garbage_body.load(Ordering::SeqCst) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    let users: Vec<User> = services.users.lock().unwrap().clone();
    Json(users).into_response()
}

async fn create_user(
    State(services): State<Arc<FakeServices>>,
    Json(draft): Json<UserDraft>,
) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    let user: User = User::new(
        services.next_user_id(),
        draft.name,
        draft.email,
        draft.phone,
        draft.role,
    );
    services.users.lock().unwrap().push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn update_user(
    State(services): State<Arc<FakeServices>>,
    Path(id): Path<i64>,
    Json(draft): Json<UserDraft>,
) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    let mut users = services.users.lock().unwrap();
    let Some(user) = users.iter_mut().find(|u| u.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    *user = User::new(id, draft.name, draft.email, draft.phone, draft.role);
    Json(user.clone()).into_response()
}

async fn delete_user(State(services): State<Arc<FakeServices>>, Path(id): Path<i64>) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    services.users.lock().unwrap().retain(|u| u.id != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_tickets(State(services): State<Arc<FakeServices>>) -> Response {
    services.ticket_list_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    if services.garbage_body.load(Ordering::SeqCst) {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    let tickets: Vec<Ticket> = services.tickets.lock().unwrap().clone();
    Json(tickets).into_response()
}

async fn create_ticket(
    State(services): State<Arc<FakeServices>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    *services.last_ticket_body.lock().unwrap() = Some(body.clone());
    let draft: TicketDraft = serde_json::from_value(body).unwrap();
    let ticket: Ticket = Ticket {
        id: services.next_ticket_id(),
        issue: Some(draft.issue),
        raised_by: Some(draft.raised_by),
        assigned_to: draft.assigned_to,
        status: Some(draft.status),
        raised_on: Some(String::from("2026-01-15")),
        assigned_on: None,
        closed_on: None,
    };
    services.tickets.lock().unwrap().push(ticket.clone());
    (StatusCode::CREATED, Json(ticket)).into_response()
}

async fn update_ticket(
    State(services): State<Arc<FakeServices>>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    *services.last_ticket_body.lock().unwrap() = Some(body.clone());
    let draft: TicketDraft = serde_json::from_value(body).unwrap();
    let mut tickets = services.tickets.lock().unwrap();
    let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    ticket.issue = Some(draft.issue);
    ticket.raised_by = Some(draft.raised_by);
    ticket.assigned_to = draft.assigned_to;
    ticket.status = Some(draft.status);
    Json(ticket.clone()).into_response()
}

async fn delete_ticket(State(services): State<Arc<FakeServices>>, Path(id): Path<i64>) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    services.tickets.lock().unwrap().retain(|t| t.id != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn close_ticket(State(services): State<Arc<FakeServices>>, Path(id): Path<i64>) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    *services.last_patch.lock().unwrap() = Some(format!("close {id}"));
    let mut tickets = services.tickets.lock().unwrap();
    let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    ticket.status = Some(TicketStatus::Closed);
    ticket.closed_on = Some(String::from("2026-01-20"));
    Json(ticket.clone()).into_response()
}

async fn assign_ticket(
    State(services): State<Arc<FakeServices>>,
    Path((id, agent_id)): Path<(i64, i64)>,
) -> Response {
    services.write_hits.fetch_add(1, Ordering::SeqCst);
    if let Some(failure) = services.forced_failure() {
        return failure;
    }
    *services.last_patch.lock().unwrap() = Some(format!("assign {id} to {agent_id}"));
    let mut tickets = services.tickets.lock().unwrap();
    let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    ticket.assigned_to = Some(agent_id);
    ticket.status = Some(TicketStatus::Assigned);
    Json(ticket.clone()).into_response()
}
