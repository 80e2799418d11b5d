//! Open5e client for the monster catalog

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::dto::MonsterDto;
use crate::application::ports::outbound::{
    CatalogError, MonsterCatalogPort, MonsterPage, MonsterQuery,
};
use crate::domain::entities::MonsterSummary;

/// Client for the Open5e API
pub struct Open5eClient {
    client: Client,
    base_url: String,
}

impl Open5eClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn monsters_url(&self) -> String {
        format!("{}/monsters/", self.base_url)
    }

    /// Query string for a catalog page, in a stable order
    fn query_params(query: &MonsterQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("document__slug", query.document_slug.clone()),
            ("limit", query.page_size.to_string()),
            ("page", query.page.to_string()),
        ];
        if let Some(rating) = query.challenge_rating {
            params.push(("challenge_rating", rating.as_str().to_string()));
        }
        params
    }
}

#[async_trait]
impl MonsterCatalogPort for Open5eClient {
    async fn list_monsters(&self, query: &MonsterQuery) -> Result<MonsterPage, CatalogError> {
        let response = self
            .client
            .get(self.monsters_url())
            .query(&Self::query_params(query))
            .send()
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: MonsterListResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        Ok(body.into())
    }
}

/// Paginated response from `GET /monsters/`. Fields beyond these are ignored.
#[derive(Debug, Deserialize)]
struct MonsterListResponse {
    count: u64,
    #[serde(default)]
    results: Vec<MonsterDto>,
}

impl From<MonsterListResponse> for MonsterPage {
    fn from(value: MonsterListResponse) -> Self {
        Self {
            total_count: value.count,
            results: value.results.into_iter().map(MonsterSummary::from).collect(),
        }
    }
}
