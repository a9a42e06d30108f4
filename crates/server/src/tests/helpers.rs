// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::LOCATION},
};
use conquest_client::{FetchCoordinator, RemoteClient, ServiceConfig, SyncEventBroadcaster};
use tower::ServiceExt;

use super::backend::{self, Services};
use crate::{AppState, build_router};

/// A console wired to freshly started fake services, with the initial
/// load already done.
pub struct TestConsole {
    pub app: Router,
    pub services: Arc<Services>,
}

/// Status, redirect target and body of one response.
pub struct Reply {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub async fn create_test_console(fetch_on_navigate: bool) -> TestConsole {
    let (base_url, services) = backend::start().await;
    let remote: RemoteClient = RemoteClient::new(ServiceConfig::with_base_url(base_url)).unwrap();
    let coordinator: Arc<FetchCoordinator> =
        Arc::new(FetchCoordinator::new(remote, SyncEventBroadcaster::new()));
    coordinator.load_all().await;

    TestConsole {
        app: build_router(AppState::new(coordinator, fetch_on_navigate)),
        services,
    }
}

impl TestConsole {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let reply: Reply = self
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        (reply.status, reply.body)
    }

    /// Posts a form and returns the raw response, without following redirects.
    pub async fn post_form(&self, uri: &str, form: &str) -> Reply {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Posts a form the way a browser does: a `303` is followed with a `GET`.
    pub async fn submit(&self, uri: &str, form: &str) -> (StatusCode, String) {
        let reply: Reply = self.post_form(uri, form).await;
        match reply.location {
            Some(location) if reply.status == StatusCode::SEE_OTHER => self.get(&location).await,
            _ => (reply.status, reply.body),
        }
    }

    async fn send(&self, request: Request<Body>) -> Reply {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status: StatusCode = response.status();
        let location: Option<String> = response
            .headers()
            .get(LOCATION)
            .map(|value| value.to_str().unwrap().to_string());
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        Reply {
            status,
            location,
            body: String::from_utf8(body_bytes.to_vec()).unwrap(),
        }
    }
}
