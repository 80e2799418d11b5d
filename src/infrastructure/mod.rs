//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite and in-memory key-value stores for the roster
//! - HTTP: REST API routes
//! - WebSocket: Notification feed for clients
//! - Open5e: Monster catalog integration
//! - Notifications: Toasts raised by roster changes
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod notifications;
pub mod open5e;
pub mod persistence;
pub mod state;
pub mod websocket;
