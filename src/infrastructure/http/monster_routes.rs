//! Monster catalog API routes

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{MonsterListQueryDto, MonsterListResponseDto};
use crate::domain::value_objects::ChallengeRating;
use crate::infrastructure::state::AppState;

/// List one page of monsters, optionally filtered by challenge rating
pub async fn list_monsters(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MonsterListQueryDto>,
) -> Result<Json<MonsterListResponseDto>, (StatusCode, String)> {
    let challenge_rating = query
        .challenge_rating
        .as_deref()
        .filter(|rating| !rating.trim().is_empty())
        .map(str::parse::<ChallengeRating>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .monster_catalog_service
        .list_monsters(query.page, challenge_rating)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Monster catalog lookup failed: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string())
        })
}
