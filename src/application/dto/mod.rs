//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP/WebSocket,
//! storage) can serialize/deserialize without pulling serde into the domain
//! model.

pub mod encounter;
pub mod monster;

pub use encounter::*;
pub use monster::*;
