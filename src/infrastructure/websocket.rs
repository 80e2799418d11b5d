//! WebSocket feed of encounter notifications
//!
//! Clients only listen; anything they send other than a close frame is
//! ignored.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::infrastructure::state::AppState;

/// WebSocket upgrade handler
pub async fn notifications_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let mut notifications = state.notifier.subscribe();

    tracing::info!("Notification subscriber connected");

    // Forward notifications to the client until either side goes away
    let send_task = tokio::spawn(async move {
        loop {
            match notifications.recv().await {
                Ok(toast) => {
                    let Ok(json) = serde_json::to_string(&toast) else {
                        continue;
                    };
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Notification subscriber lagged, skipped {} messages", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Close(_)) => {
                tracing::info!("Notification subscriber closed the connection");
                break;
            }
            Err(e) => {
                tracing::error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    // Cancel the send task
    send_task.abort();

    tracing::info!("Notification subscriber disconnected");
}
