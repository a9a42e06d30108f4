// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

/// Gateway address the services are published behind.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9090";
/// Collection path of the user service.
pub const DEFAULT_USERS_PATH: &str = "/user-micro-service/users";
/// Collection path of the ticket service.
pub const DEFAULT_TICKETS_PATH: &str = "/ticket-service/tickets";

/// Where the remote services live and how to call them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Scheme, host and port shared by both services.
    pub base_url: String,
    /// Path of the user collection below `base_url`.
    pub users_path: String,
    /// Path of the ticket collection below `base_url`.
    pub tickets_path: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            users_path: DEFAULT_USERS_PATH.to_string(),
            tickets_path: DEFAULT_TICKETS_PATH.to_string(),
            request_timeout: None,
        }
    }
}

impl ServiceConfig {
    /// Creates a config for services behind `base_url` using the default paths.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// `GET`/`POST` endpoint for users.
    #[must_use]
    pub fn users_url(&self) -> String {
        self.join(&self.users_path)
    }

    /// `PUT`/`DELETE` endpoint for one user.
    #[must_use]
    pub fn user_url(&self, id: i64) -> String {
        format!("{}/{id}", self.users_url())
    }

    /// `GET`/`POST` endpoint for tickets.
    #[must_use]
    pub fn tickets_url(&self) -> String {
        self.join(&self.tickets_path)
    }

    /// `PUT`/`DELETE`/`PATCH` endpoint for one ticket.
    #[must_use]
    pub fn ticket_url(&self, id: i64) -> String {
        format!("{}/{id}", self.tickets_url())
    }

    /// `PATCH` endpoint assigning a ticket to an agent.
    #[must_use]
    pub fn ticket_assignment_url(&self, id: i64, agent_id: i64) -> String {
        format!("{}/{id}/{agent_id}", self.tickets_url())
    }
}
