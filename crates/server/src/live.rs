// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live cache notifications for open console pages.
//!
//! Every `SyncEvent` published by the fetch coordinator is forwarded as JSON
//! to each connected browser. Pages use the events only as a cue to reload;
//! the data itself is always read back over HTTP.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use conquest_client::{SyncEvent, SyncEventBroadcaster};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Upgrades the connection and streams sync events to it.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(events): AxumState<SyncEventBroadcaster>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, events))
}

/// Builds the greeting sent to every new subscriber.
#[must_use]
pub fn connected_event() -> SyncEvent {
    SyncEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    }
}

/// What the socket loop does after one wake-up.
enum Step {
    Continue,
    Stop(&'static str),
}

async fn handle_socket(mut socket: WebSocket, events: SyncEventBroadcaster) {
    info!("Client connected to live event stream");
    let mut rx: broadcast::Receiver<SyncEvent> = events.subscribe();

    let mut step: Step = forward(&mut socket, &connected_event()).await;
    while matches!(step, Step::Continue) {
        step = tokio::select! {
            received = rx.recv() => match received {
                Ok(event) => forward(&mut socket, &event).await,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live subscriber lagged, events dropped");
                    Step::Continue
                }
                Err(broadcast::error::RecvError::Closed) => Step::Stop("event channel closed"),
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | None => Step::Stop("client went away"),
                Some(Ok(_)) => Step::Continue,
                Some(Err(e)) => {
                    error!(?e, "WebSocket receive error");
                    Step::Stop("receive error")
                }
            },
        };
    }

    if let Step::Stop(reason) = step {
        info!(reason, "Client disconnected from live event stream");
    }
}

/// Sends one event as a JSON text frame.
async fn forward(socket: &mut WebSocket, event: &SyncEvent) -> Step {
    let json: String = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            error!(?e, "Failed to serialize sync event");
            return Step::Continue;
        }
    };
    if socket.send(Message::Text(json.into())).await.is_err() {
        debug!("Live subscriber socket closed while sending");
        return Step::Stop("send failed");
    }
    Step::Continue
}
