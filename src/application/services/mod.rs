//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting port
//! dependencies and returning domain values or DTOs.

pub mod encounter_service;
pub mod monster_catalog_service;

pub use encounter_service::{EncounterService, EncounterSnapshot, DEFAULT_ROSTER_KEY};
pub use monster_catalog_service::MonsterCatalogService;
