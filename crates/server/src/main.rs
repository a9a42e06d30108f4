// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;

#[cfg(test)]
mod tests;

use axum::{
    Form, Router,
    extract::{FromRef, Path, Query, State as AxumState},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use clap::Parser;
use conquest::ClientState;
use conquest_client::{
    DEFAULT_BASE_URL, DEFAULT_TICKETS_PATH, DEFAULT_USERS_PATH, FetchCoordinator, LoadOutcome,
    MutationGateway, MutationOutcome, Notice, NoticeLevel, RemoteClient, ServiceConfig,
    SyncEventBroadcaster,
};
use conquest_domain::{
    DomainError, TicketDraft, TicketStatus, UserDraft, UserRole, parse_optional_record_id,
    parse_record_id,
};
use conquest_render::{
    Banner, Component, ConsolePage, ConsoleTab, Dashboard, DeleteConfirmation, NavItem, Page,
    TicketCards, TicketForm, TicketFormValues, TicketView, UserDirectory, UserForm,
    UserFormValues, escape_html,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::live::live_events_handler;

/// Conquest Console - web front-end for the user and ticket services
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the console to
    #[arg(long, env = "CONQUEST_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the console to
    #[arg(short, long, env = "CONQUEST_PORT", default_value_t = 3000)]
    port: u16,

    /// Base URL of the gateway in front of the user and ticket services
    #[arg(long, env = "CONQUEST_BACKEND_URL", default_value = DEFAULT_BASE_URL)]
    backend_url: String,

    /// Path of the user collection below the backend URL
    #[arg(long, env = "CONQUEST_USERS_PATH", default_value = DEFAULT_USERS_PATH)]
    users_path: String,

    /// Path of the ticket collection below the backend URL
    #[arg(long, env = "CONQUEST_TICKETS_PATH", default_value = DEFAULT_TICKETS_PATH)]
    tickets_path: String,

    /// Per-request timeout in seconds for backend calls. Unset waits indefinitely.
    #[arg(long, env = "CONQUEST_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Re-fetch both collections before rendering every page
    #[arg(long, env = "CONQUEST_FETCH_ON_NAVIGATE")]
    fetch_on_navigate: bool,
}

impl Args {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            base_url: self.backend_url.clone(),
            users_path: self.users_path.clone(),
            tickets_path: self.tickets_path.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Owns the cache and loads it from the services.
    coordinator: Arc<FetchCoordinator>,
    /// Issues writes and re-fetches afterwards.
    gateway: MutationGateway,
    /// Whether page loads trigger a fetch first.
    fetch_on_navigate: bool,
}

impl AppState {
    fn new(coordinator: Arc<FetchCoordinator>, fetch_on_navigate: bool) -> Self {
        Self {
            gateway: MutationGateway::new(Arc::clone(&coordinator)),
            coordinator,
            fetch_on_navigate,
        }
    }

    /// Re-fetches both collections when configured to do so on navigation.
    async fn sync_on_navigate(&self) {
        if self.fetch_on_navigate {
            let (users, tickets) = self.coordinator.load_all().await;
            debug!(?users, ?tickets, "Fetched on navigation");
        }
    }

    /// Wraps the body of a page reached by `GET` in the page shell.
    fn page(
        &self,
        title: &str,
        active: NavItem,
        notice: Option<&Notice>,
        body: String,
    ) -> Html<String> {
        // Fetch-on-navigate pages would reload each other forever.
        shell(title, active, notice, body, !self.fetch_on_navigate)
    }

    /// Renders one of the top-level views with default parameters.
    async fn view(&self, item: NavItem, notice: Option<&Notice>) -> Html<String> {
        let state = self.coordinator.read().await;
        let (title, body): (&str, String) = match item {
            NavItem::Dashboard => ("Dashboard", Dashboard::new(&state).render()),
            NavItem::Tickets => ("Tickets", TicketCards::new(&state, "").render()),
            NavItem::Users => ("Users", UserDirectory::new(&state).render()),
            NavItem::Console => (
                "Console",
                ConsolePage::new(&state, ConsoleTab::Users, "", "").render(),
            ),
        };
        drop(state);
        self.page(title, item, notice, body)
    }

    /// Answers a rejected console form post with the page built by `build`.
    ///
    /// The result is the direct response to a `POST`, so it never subscribes
    /// to live reloads: reloading it would submit the form again.
    async fn console(
        &self,
        notice: Option<&Notice>,
        build: impl FnOnce(&ClientState) -> ConsolePage,
    ) -> Html<String> {
        let state = self.coordinator.read().await;
        let body: String = build(&*state).render();
        drop(state);
        shell("Console", NavItem::Console, notice, body, false)
    }
}

fn shell(
    title: &str,
    active: NavItem,
    notice: Option<&Notice>,
    body: String,
    live_reload: bool,
) -> Html<String> {
    let page: Page<'_> = Page {
        title,
        active,
        banner: notice.map(|notice| Banner {
            level: notice.level.as_str(),
            message: &notice.message,
        }),
        live_reload,
        body,
    };
    Html(page.render())
}

/// Redirects to `location` with `303 See Other`, carrying `notice` along in
/// the query string.
fn see_other(location: &str, notice: Option<&Notice>) -> Response {
    let target: String = match notice {
        Some(notice) => {
            let separator: char = if location.contains('?') { '&' } else { '?' };
            format!(
                "{location}{separator}notice={}&level={}",
                urlencoding::encode(&notice.message),
                notice.level.as_str()
            )
        }
        None => location.to_string(),
    };
    Redirect::to(&target).into_response()
}

/// Where a console mutation lands afterwards.
fn console_location(tab: ConsoleTab) -> String {
    format!("/console?tab={}", tab.as_str())
}

impl FromRef<AppState> for SyncEventBroadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.coordinator.events().clone()
    }
}

/// A notice handed over by the redirect after a form post.
#[derive(Debug, Deserialize)]
struct Flash {
    notice: Option<String>,
    #[serde(default)]
    level: String,
}

impl Flash {
    fn notice(self) -> Option<Notice> {
        let message: String = self.notice.filter(|message| !message.trim().is_empty())?;
        Some(if self.level == NoticeLevel::Error.as_str() {
            Notice::error(message)
        } else {
            Notice::success(message)
        })
    }
}

/// Query for GET `/tickets`.
#[derive(Debug, Deserialize)]
struct TicketsQuery {
    /// Search term.
    #[serde(default)]
    q: String,
}

/// Query for GET `/console`.
#[derive(Debug, Deserialize)]
struct ConsoleQuery {
    /// `users` or `tickets`.
    tab: Option<String>,
    /// User search term.
    #[serde(default)]
    user_q: String,
    /// Ticket search term.
    #[serde(default)]
    ticket_q: String,
}

/// Submitted user create/edit form.
#[derive(Debug, Clone, Deserialize)]
struct UserFormFields {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    role: String,
}

impl UserFormFields {
    fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: UserRole::from(self.role.trim()),
        }
    }

    fn values(self) -> UserFormValues {
        UserFormValues {
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
        }
    }
}

/// Submitted ticket create/edit form.
#[derive(Debug, Clone, Deserialize)]
struct TicketFormFields {
    #[serde(default)]
    issue: String,
    #[serde(default)]
    raised_by: String,
    #[serde(default)]
    assigned_to: String,
    #[serde(default)]
    status: String,
}

impl TicketFormFields {
    fn status(&self) -> TicketStatus {
        match self.status.trim() {
            "" => TicketStatus::Open,
            status => TicketStatus::from(status),
        }
    }

    fn draft(&self) -> Result<TicketDraft, DomainError> {
        Ok(TicketDraft {
            id: None,
            issue: self.issue.trim().to_string(),
            raised_by: parse_record_id("raised_by", &self.raised_by)?,
            assigned_to: parse_optional_record_id("assigned_to", &self.assigned_to)?,
            status: self.status(),
        })
    }

    /// Form values for re-display; unparseable ids are dropped.
    fn values(self) -> TicketFormValues {
        TicketFormValues {
            raised_by: parse_record_id("raised_by", &self.raised_by).ok(),
            assigned_to: parse_optional_record_id("assigned_to", &self.assigned_to)
                .ok()
                .flatten(),
            status: self.status(),
            issue: self.issue,
        }
    }
}

/// Submitted quick "New Ticket" form.
#[derive(Debug, Deserialize)]
struct NewTicketFields {
    #[serde(default)]
    issue: String,
    #[serde(default)]
    raised_by: String,
}

/// Submitted delete confirmation.
#[derive(Debug, Deserialize)]
struct DeleteFields {
    /// `true` when the operator pressed Delete.
    #[serde(default)]
    confirmed: String,
}

impl DeleteFields {
    fn confirmed(&self) -> bool {
        self.confirmed.trim().eq_ignore_ascii_case("true")
    }
}

/// Submitted assign form.
#[derive(Debug, Deserialize)]
struct AssignFields {
    #[serde(default)]
    agent_id: String,
}

/// Submitted refresh form.
#[derive(Debug, Deserialize)]
struct RefreshFields {
    /// The view to render afterwards.
    #[serde(default)]
    view: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: String = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{status} | Conquest</title></head>
<body><main class="error-page"><h1>{status}</h1><p>{message}</p><a href="/">Back to dashboard</a></main></body>
</html>"#,
            status = self.status,
            message = escape_html(&self.message),
        );
        (self.status, Html(body)).into_response()
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound(_) | DomainError::TicketNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            DomainError::MissingField { .. }
            | DomainError::InvalidId { .. }
            | DomainError::InvalidEmail(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for GET `/`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Query(flash): Query<Flash>,
) -> Html<String> {
    app_state.sync_on_navigate().await;
    app_state
        .view(NavItem::Dashboard, flash.notice().as_ref())
        .await
}

/// Handler for GET `/tickets`.
async fn handle_ticket_cards(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TicketsQuery>,
    Query(flash): Query<Flash>,
) -> Html<String> {
    app_state.sync_on_navigate().await;
    let state = app_state.coordinator.read().await;
    let body: String = TicketCards::new(&state, &query.q).render();
    drop(state);
    app_state.page("Tickets", NavItem::Tickets, flash.notice().as_ref(), body)
}

/// Handler for GET `/users`.
async fn handle_user_directory(
    AxumState(app_state): AxumState<AppState>,
    Query(flash): Query<Flash>,
) -> Html<String> {
    app_state.sync_on_navigate().await;
    app_state.view(NavItem::Users, flash.notice().as_ref()).await
}

/// Handler for POST `/tickets/new`.
///
/// Raises an OPEN, unassigned ticket and returns to the dashboard.
async fn handle_new_ticket(
    AxumState(app_state): AxumState<AppState>,
    Form(fields): Form<NewTicketFields>,
) -> Response {
    info!(raised_by = %fields.raised_by, "Handling new_ticket request");

    let outcome: MutationOutcome = match parse_record_id("raised_by", &fields.raised_by) {
        Ok(raised_by) => {
            let draft: TicketDraft = TicketDraft::open(fields.issue.trim(), raised_by);
            app_state.gateway.create_ticket(&draft).await
        }
        Err(err) => MutationOutcome::Failed(err.into()),
    };

    see_other(NavItem::Dashboard.href(), outcome.notice())
}

/// Handler for GET `/console`.
async fn handle_console(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ConsoleQuery>,
    Query(flash): Query<Flash>,
) -> Html<String> {
    app_state.sync_on_navigate().await;
    let tab: ConsoleTab = ConsoleTab::parse(query.tab.as_deref());
    let state = app_state.coordinator.read().await;
    let body: String = ConsolePage::new(&state, tab, &query.user_q, &query.ticket_q).render();
    drop(state);
    app_state.page("Console", NavItem::Console, flash.notice().as_ref(), body)
}

/// Handler for POST `/console/users`.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    Form(fields): Form<UserFormFields>,
) -> Response {
    info!(name = %fields.name, "Handling create_user request");

    let outcome: MutationOutcome = app_state.gateway.create_user(&fields.draft()).await;
    if outcome.is_applied() {
        return see_other(&console_location(ConsoleTab::Users), outcome.notice());
    }

    let values: UserFormValues = fields.values();
    app_state
        .console(outcome.notice(), |state| {
            ConsolePage::new(state, ConsoleTab::Users, "", "")
                .with_user_form(UserForm::create_with(values))
        })
        .await
        .into_response()
}

/// Handler for GET `/console/users/{id}/edit`.
async fn handle_edit_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    app_state.sync_on_navigate().await;
    let state = app_state.coordinator.read().await;
    let values: UserFormValues = UserFormValues::from_user(state.require_user(id)?);
    let body: String = ConsolePage::new(&state, ConsoleTab::Users, "", "")
        .with_user_form(UserForm::edit(id, values))
        .render();
    drop(state);
    Ok(app_state.page("Console", NavItem::Console, None, body))
}

/// Handler for POST `/console/users/{id}`.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<UserFormFields>,
) -> Response {
    info!(user_id = id, "Handling update_user request");

    let outcome: MutationOutcome = app_state.gateway.update_user(id, &fields.draft()).await;
    if outcome.is_applied() {
        return see_other(&console_location(ConsoleTab::Users), outcome.notice());
    }

    let values: UserFormValues = fields.values();
    app_state
        .console(outcome.notice(), |state| {
            ConsolePage::new(state, ConsoleTab::Users, "", "")
                .with_user_form(UserForm::edit(id, values))
        })
        .await
        .into_response()
}

/// Handler for GET `/console/users/{id}/delete`.
async fn handle_confirm_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    let state = app_state.coordinator.read().await;
    let body: String = DeleteConfirmation::user(state.require_user(id)?).render();
    drop(state);
    Ok(app_state.page("Delete user", NavItem::Console, None, body))
}

/// Handler for POST `/console/users/{id}/delete`.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<DeleteFields>,
) -> Response {
    info!(user_id = id, confirmed = fields.confirmed(), "Handling delete_user request");

    let outcome: MutationOutcome = app_state.gateway.delete_user(id, &fields.confirmed()).await;

    see_other(&console_location(ConsoleTab::Users), outcome.notice())
}

/// Handler for POST `/console/tickets`.
async fn handle_create_ticket(
    AxumState(app_state): AxumState<AppState>,
    Form(fields): Form<TicketFormFields>,
) -> Response {
    info!(raised_by = %fields.raised_by, "Handling create_ticket request");

    let outcome: MutationOutcome = match fields.draft() {
        Ok(draft) => app_state.gateway.create_ticket(&draft).await,
        Err(err) => MutationOutcome::Failed(err.into()),
    };
    if outcome.is_applied() {
        return see_other(&console_location(ConsoleTab::Tickets), outcome.notice());
    }

    let values: TicketFormValues = fields.values();
    app_state
        .console(outcome.notice(), |state| {
            ConsolePage::new(state, ConsoleTab::Tickets, "", "")
                .with_ticket_form(TicketForm::create_with(state, values))
        })
        .await
        .into_response()
}

/// Handler for GET `/console/tickets/{id}/edit`.
async fn handle_edit_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    app_state.sync_on_navigate().await;
    let state = app_state.coordinator.read().await;
    let values: TicketFormValues = TicketFormValues::from_ticket(state.require_ticket(id)?);
    let body: String = ConsolePage::new(&state, ConsoleTab::Tickets, "", "")
        .with_ticket_form(TicketForm::edit(&state, id, values))
        .render();
    drop(state);
    Ok(app_state.page("Console", NavItem::Console, None, body))
}

/// Handler for POST `/console/tickets/{id}`.
async fn handle_update_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<TicketFormFields>,
) -> Response {
    info!(ticket_id = id, "Handling update_ticket request");

    let outcome: MutationOutcome = match fields.draft() {
        Ok(draft) => app_state.gateway.update_ticket(id, &draft).await,
        Err(err) => MutationOutcome::Failed(err.into()),
    };
    if outcome.is_applied() {
        return see_other(&console_location(ConsoleTab::Tickets), outcome.notice());
    }

    let values: TicketFormValues = fields.values();
    app_state
        .console(outcome.notice(), |state| {
            ConsolePage::new(state, ConsoleTab::Tickets, "", "")
                .with_ticket_form(TicketForm::edit(state, id, values))
        })
        .await
        .into_response()
}

/// Handler for GET `/console/tickets/{id}/delete`.
async fn handle_confirm_delete_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    let state = app_state.coordinator.read().await;
    let ticket: TicketView = TicketView::new(&state, state.require_ticket(id)?);
    drop(state);
    let body: String = DeleteConfirmation::ticket(&ticket).render();
    Ok(app_state.page("Delete ticket", NavItem::Console, None, body))
}

/// Handler for POST `/console/tickets/{id}/delete`.
async fn handle_delete_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<DeleteFields>,
) -> Response {
    info!(ticket_id = id, confirmed = fields.confirmed(), "Handling delete_ticket request");

    let outcome: MutationOutcome = app_state
        .gateway
        .delete_ticket(id, &fields.confirmed())
        .await;

    see_other(&console_location(ConsoleTab::Tickets), outcome.notice())
}

/// Handler for POST `/console/tickets/{id}/close`.
async fn handle_close_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
) -> Response {
    info!(ticket_id = id, "Handling close_ticket request");

    let outcome: MutationOutcome = app_state.gateway.close_ticket(id).await;

    see_other(&console_location(ConsoleTab::Tickets), outcome.notice())
}

/// Handler for POST `/console/tickets/{id}/assign`.
async fn handle_assign_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<AssignFields>,
) -> Response {
    info!(ticket_id = id, agent_id = %fields.agent_id, "Handling assign_ticket request");

    let outcome: MutationOutcome = match parse_record_id("agent_id", &fields.agent_id) {
        Ok(agent_id) => app_state.gateway.assign_ticket(id, agent_id).await,
        Err(err) => MutationOutcome::Failed(err.into()),
    };

    see_other(&console_location(ConsoleTab::Tickets), outcome.notice())
}

/// Handler for POST `/refresh`.
///
/// Re-fetches both collections and sends the browser back to the view the
/// form came from.
async fn handle_refresh(
    AxumState(app_state): AxumState<AppState>,
    Form(fields): Form<RefreshFields>,
) -> Response {
    info!("Handling refresh request");

    let (users, tickets) = app_state.coordinator.load_all().await;
    let notice: Notice = if matches!(users, LoadOutcome::Failed { .. })
        || matches!(tickets, LoadOutcome::Failed { .. })
    {
        error!(?users, ?tickets, "Refresh failed");
        Notice::error("Failed to refresh data")
    } else {
        Notice::success("Data refreshed successfully")
    };

    see_other(NavItem::parse(&fields.view).href(), Some(&notice))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_dashboard))
        .route("/tickets", get(handle_ticket_cards))
        .route("/tickets/new", post(handle_new_ticket))
        .route("/users", get(handle_user_directory))
        .route("/console", get(handle_console))
        .route("/console/users", post(handle_create_user))
        .route("/console/users/{id}", post(handle_update_user))
        .route("/console/users/{id}/edit", get(handle_edit_user))
        .route(
            "/console/users/{id}/delete",
            get(handle_confirm_delete_user).post(handle_delete_user),
        )
        .route("/console/tickets", post(handle_create_ticket))
        .route("/console/tickets/{id}", post(handle_update_ticket))
        .route("/console/tickets/{id}/edit", get(handle_edit_ticket))
        .route(
            "/console/tickets/{id}/delete",
            get(handle_confirm_delete_ticket).post(handle_delete_ticket),
        )
        .route("/console/tickets/{id}/close", post(handle_close_ticket))
        .route("/console/tickets/{id}/assign", post(handle_assign_ticket))
        .route("/refresh", post(handle_refresh))
        .route("/live", get(live_events_handler))
        .fallback(|uri: Uri| async move {
            HttpError {
                status: StatusCode::NOT_FOUND,
                message: format!("No page at {uri}"),
            }
        })
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(backend = %args.backend_url, "Initializing Conquest console");

    let remote: RemoteClient = RemoteClient::new(args.service_config())?;
    let coordinator: Arc<FetchCoordinator> =
        Arc::new(FetchCoordinator::new(remote, SyncEventBroadcaster::new()));

    // A failed initial load is not fatal; pages show empty states until a
    // later fetch succeeds.
    let (users, tickets) = coordinator.load_all().await;
    info!(?users, ?tickets, "Initial load finished");

    let app: Router = build_router(AppState::new(coordinator, args.fetch_on_navigate));

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Console listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
