//! Roster observer port - Fire-and-forget hook called after roster mutations
//!
//! The encounter service never waits on the outcome beyond logging a failure,
//! so observers must not rely on their errors reaching the caller.

use async_trait::async_trait;

use crate::domain::events::RosterEvent;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Failed to publish notification: {0}")]
    Publish(String),
}

#[async_trait]
pub trait RosterObserverPort: Send + Sync {
    async fn on_roster_event(&self, event: RosterEvent) -> Result<(), NotificationError>;
}
