//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Roster, RosterEntry, MonsterSummary
//! - Value Objects: ChallengeRating, MonsterSlug
//! - Domain Events: Roster changes observed by notifiers
//! - Domain Services: XP budget calculation

pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;
