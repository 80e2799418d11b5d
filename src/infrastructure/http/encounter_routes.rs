//! Encounter API routes
//!
//! Every mutation answers with the full encounter snapshot so clients can
//! re-render without a second request.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::{
    EncounterSnapshotDto, MonsterDto, RosterEntryDto, SetQuantityRequestDto,
};
use crate::application::services::EncounterSnapshot;
use crate::domain::entities::MonsterSummary;
use crate::domain::value_objects::MonsterSlug;
use crate::infrastructure::state::AppState;

fn to_dto(snapshot: EncounterSnapshot) -> Json<EncounterSnapshotDto> {
    Json(EncounterSnapshotDto::new(&snapshot.monsters, snapshot.budget))
}

/// Current encounter and its XP budget
pub async fn get_encounter(State(state): State<Arc<AppState>>) -> Json<EncounterSnapshotDto> {
    to_dto(state.encounter_service.snapshot().await)
}

/// Roster entries only, in insertion order
pub async fn list_encounter_monsters(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<RosterEntryDto>> {
    let monsters = state.encounter_service.monsters().await;
    Json(monsters.iter().map(RosterEntryDto::from).collect())
}

pub async fn get_encounter_xp(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let total = state.encounter_service.total_encounter_xp().await;
    Json(serde_json::json!({ "total_encounter_xp": total }))
}

pub async fn add_monster(
    State(state): State<Arc<AppState>>,
    Json(monster): Json<MonsterDto>,
) -> Json<EncounterSnapshotDto> {
    to_dto(
        state
            .encounter_service
            .add_monster(MonsterSummary::from(monster))
            .await,
    )
}

pub async fn remove_monster(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Json<EncounterSnapshotDto> {
    to_dto(
        state
            .encounter_service
            .remove_monster(&MonsterSlug::from(slug))
            .await,
    )
}

pub async fn set_monster_quantity(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(request): Json<SetQuantityRequestDto>,
) -> Json<EncounterSnapshotDto> {
    to_dto(
        state
            .encounter_service
            .set_monster_quantity(&MonsterSlug::from(slug), request.quantity)
            .await,
    )
}

pub async fn clear_monsters(State(state): State<Arc<AppState>>) -> Json<EncounterSnapshotDto> {
    to_dto(state.encounter_service.clear_monsters().await)
}
