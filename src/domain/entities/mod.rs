//! Domain entities - Core business objects with identity

mod monster;
mod roster;

pub use monster::MonsterSummary;
pub use roster::{QuantityUpdate, RejectedEntry, Roster, RosterEntry};
