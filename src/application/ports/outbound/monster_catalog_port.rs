//! Monster catalog port - Paginated, filterable lookup of creature records

use async_trait::async_trait;

use crate::domain::entities::MonsterSummary;
use crate::domain::value_objects::ChallengeRating;

/// A single catalog page request
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterQuery {
    /// Ruleset document the creatures must come from (e.g. `wotc-srd`)
    pub document_slug: String,
    pub challenge_rating: Option<ChallengeRating>,
    /// One-based page number
    pub page: u32,
    pub page_size: u32,
}

/// One page of catalog results, in the order the catalog returned them
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterPage {
    pub total_count: u64,
    pub results: Vec<MonsterSummary>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait MonsterCatalogPort: Send + Sync {
    async fn list_monsters(&self, query: &MonsterQuery) -> Result<MonsterPage, CatalogError>;
}
