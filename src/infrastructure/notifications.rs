//! Toast notifications - Maps roster events to user-facing notifications
//!
//! Notifications are published on a broadcast channel; every connected
//! WebSocket client holds a receiver. Nobody listening is not an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::application::ports::outbound::{NotificationError, RosterObserverPort};
use crate::domain::events::RosterEvent;
use crate::domain::value_objects::NotificationId;

const ENCOUNTER_UPDATED: &str = "Encounter Updated";

/// A short message for the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastNotification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Publisher that converts roster events to toast notifications
pub struct BroadcastNotifier {
    sender: broadcast::Sender<ToastNotification>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastNotification> {
        self.sender.subscribe()
    }

    /// Map a roster event to a notification. Only additions are announced;
    /// the message is the same whether the monster was new or incremented.
    fn map_to_toast(event: &RosterEvent) -> Option<ToastNotification> {
        match event {
            RosterEvent::MonsterAdded { metadata, name, .. } => Some(ToastNotification {
                id: NotificationId::new(),
                title: ENCOUNTER_UPDATED.to_string(),
                message: format!("{} added to encounter.", name),
                timestamp: metadata.timestamp,
            }),
            RosterEvent::MonsterRemoved { .. }
            | RosterEvent::QuantityChanged { .. }
            | RosterEvent::RosterCleared { .. } => None,
        }
    }
}

#[async_trait]
impl RosterObserverPort for BroadcastNotifier {
    async fn on_roster_event(&self, event: RosterEvent) -> Result<(), NotificationError> {
        let Some(toast) = Self::map_to_toast(&event) else {
            return Ok(());
        };

        match self.sender.send(toast) {
            Ok(receivers) => {
                tracing::debug!(receivers, "Published encounter notification");
            }
            Err(_) => {
                tracing::debug!("No notification subscribers");
            }
        }
        Ok(())
    }
}
