//! HTTP REST API routes

mod encounter_routes;
mod monster_routes;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Catalog routes
        .route("/api/monsters", get(monster_routes::list_monsters))
        // Encounter routes
        .route("/api/encounter", get(encounter_routes::get_encounter))
        .route("/api/encounter", delete(encounter_routes::clear_monsters))
        .route("/api/encounter/xp", get(encounter_routes::get_encounter_xp))
        .route(
            "/api/encounter/monsters",
            get(encounter_routes::list_encounter_monsters),
        )
        .route(
            "/api/encounter/monsters",
            post(encounter_routes::add_monster),
        )
        .route(
            "/api/encounter/monsters/{slug}",
            delete(encounter_routes::remove_monster),
        )
        .route(
            "/api/encounter/monsters/{slug}/quantity",
            put(encounter_routes::set_monster_quantity),
        )
}
