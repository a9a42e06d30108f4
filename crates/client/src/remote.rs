// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conquest_domain::{Ticket, TicketDraft, User, UserDraft};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::ClientError;

/// Plain REST client for the user and ticket services.
///
/// Every call is a single request: no retries, no caching. Collection reads
/// decode the body; writes only care about the status code.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: Client,
    config: ServiceConfig,
}

impl RemoteClient {
    /// Creates a client for the services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the HTTP client cannot be created.
    pub fn new(config: ServiceConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http: Client = builder.build().map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    /// Returns the service locations this client talks to.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fetches every user.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-2xx status, or a body that
    /// is not a JSON array of users.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_collection(&self.config.users_url()).await
    }

    /// Fetches every ticket.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-2xx status, or a body that
    /// is not a JSON array of tickets.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, ClientError> {
        self.get_collection(&self.config.tickets_url()).await
    }

    /// `POST`s a new user.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<(), ClientError> {
        let url: String = self.config.users_url();
        execute(&url, self.http.post(&url).json(draft)).await
    }

    /// `PUT`s new field values for an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<(), ClientError> {
        let url: String = self.config.user_url(id);
        execute(&url, self.http.put(&url).json(draft)).await
    }

    /// `DELETE`s a user.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn delete_user(&self, id: i64) -> Result<(), ClientError> {
        let url: String = self.config.user_url(id);
        execute(&url, self.http.delete(&url)).await
    }

    /// `POST`s a new ticket.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn create_ticket(&self, draft: &TicketDraft) -> Result<(), ClientError> {
        let url: String = self.config.tickets_url();
        execute(&url, self.http.post(&url).json(draft)).await
    }

    /// `PUT`s new field values for an existing ticket.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn update_ticket(&self, id: i64, draft: &TicketDraft) -> Result<(), ClientError> {
        let url: String = self.config.ticket_url(id);
        let body: TicketDraft = TicketDraft {
            id: Some(id),
            ..draft.clone()
        };
        execute(&url, self.http.put(&url).json(&body)).await
    }

    /// `DELETE`s a ticket.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), ClientError> {
        let url: String = self.config.ticket_url(id);
        execute(&url, self.http.delete(&url)).await
    }

    /// Closes a ticket (`PATCH /tickets/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn close_ticket(&self, id: i64) -> Result<(), ClientError> {
        let url: String = self.config.ticket_url(id);
        execute(&url, self.http.patch(&url)).await
    }

    /// Assigns a ticket to an agent (`PATCH /tickets/{id}/{agent_id}`).
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-2xx status.
    pub async fn assign_ticket(&self, id: i64, agent_id: i64) -> Result<(), ClientError> {
        let url: String = self.config.ticket_assignment_url(id, agent_id);
        execute(&url, self.http.patch(&url)).await
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ClientError> {
        let response: Response = send(url, self.http.get(url)).await?;

        let bytes = response.bytes().await.map_err(|source| ClientError::Network {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

async fn execute(url: &str, request: RequestBuilder) -> Result<(), ClientError> {
    send(url, request).await.map(|_| ())
}

/// Sends a request and turns non-2xx responses into errors.
async fn send(url: &str, request: RequestBuilder) -> Result<Response, ClientError> {
    let response: Response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|source| ClientError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(url, status = status.as_u16(), "Remote response");

    if !status.is_success() {
        let body: String = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}
