//! Monster Catalog Service - Paginated browsing of the creature catalog
//!
//! Applies the configured ruleset document and page size to every lookup and
//! derives the page count for clients. Result order is whatever the catalog
//! returns.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::dto::{MonsterDto, MonsterListResponseDto};
use crate::application::ports::outbound::{CatalogError, MonsterCatalogPort, MonsterQuery};
use crate::domain::value_objects::ChallengeRating;

pub struct MonsterCatalogService {
    catalog: Arc<dyn MonsterCatalogPort>,
    document_slug: String,
    page_size: u32,
}

impl MonsterCatalogService {
    pub fn new(
        catalog: Arc<dyn MonsterCatalogPort>,
        document_slug: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self {
            catalog,
            document_slug: document_slug.into(),
            page_size: page_size.max(1),
        }
    }

    /// Fetch one page of monsters. Page numbers start at 1; anything lower is
    /// treated as the first page.
    #[instrument(skip(self))]
    pub async fn list_monsters(
        &self,
        page: Option<u32>,
        challenge_rating: Option<ChallengeRating>,
    ) -> Result<MonsterListResponseDto, CatalogError> {
        let page = page.unwrap_or(1).max(1);
        let query = MonsterQuery {
            document_slug: self.document_slug.clone(),
            challenge_rating,
            page,
            page_size: self.page_size,
        };

        let result = self.catalog.list_monsters(&query).await?;
        debug!(
            total = result.total_count,
            returned = result.results.len(),
            "Fetched monster page"
        );

        Ok(MonsterListResponseDto {
            monsters_count: result.total_count,
            monsters: result.results.into_iter().map(MonsterDto::from).collect(),
            page,
            page_count: page_count(result.total_count, self.page_size),
        })
    }
}

fn page_count(total: u64, page_size: u32) -> u64 {
    total.div_ceil(u64::from(page_size.max(1)))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::outbound::MonsterPage;
    use crate::domain::entities::MonsterSummary;

    #[derive(Default)]
    struct StubCatalog {
        queries: Mutex<Vec<MonsterQuery>>,
    }

    #[async_trait]
    impl MonsterCatalogPort for StubCatalog {
        async fn list_monsters(&self, query: &MonsterQuery) -> Result<MonsterPage, CatalogError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(MonsterPage {
                total_count: 325,
                results: vec![
                    MonsterSummary::new("aboleth", "Aboleth", "10"),
                    MonsterSummary::new("acolyte", "Acolyte", "1/4"),
                ],
            })
        }
    }

    struct DownCatalog;

    #[async_trait]
    impl MonsterCatalogPort for DownCatalog {
        async fn list_monsters(&self, _query: &MonsterQuery) -> Result<MonsterPage, CatalogError> {
            Err(CatalogError::Api {
                status: 503,
                message: "maintenance".to_string(),
            })
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(325, 20), 17);
    }

    #[tokio::test]
    async fn test_list_applies_configured_query() {
        let catalog = Arc::new(StubCatalog::default());
        let service = MonsterCatalogService::new(catalog.clone(), "wotc-srd", 20);

        let response = service
            .list_monsters(Some(3), ChallengeRating::whole(10))
            .await
            .unwrap();

        assert_eq!(response.monsters_count, 325);
        assert_eq!(response.page, 3);
        assert_eq!(response.page_count, 17);
        assert_eq!(response.monsters[0].slug, "aboleth");
        assert_eq!(response.monsters[1].challenge_rating, "1/4");

        let queries = catalog.queries.lock().unwrap();
        assert_eq!(
            queries[0],
            MonsterQuery {
                document_slug: "wotc-srd".to_string(),
                challenge_rating: ChallengeRating::whole(10),
                page: 3,
                page_size: 20,
            }
        );
    }

    #[tokio::test]
    async fn test_page_defaults_to_first() {
        let catalog = Arc::new(StubCatalog::default());
        let service = MonsterCatalogService::new(catalog.clone(), "wotc-srd", 20);

        assert_eq!(service.list_monsters(None, None).await.unwrap().page, 1);
        assert_eq!(service.list_monsters(Some(0), None).await.unwrap().page, 1);
    }

    #[tokio::test]
    async fn test_catalog_errors_propagate() {
        let service = MonsterCatalogService::new(Arc::new(DownCatalog), "wotc-srd", 20);
        let err = service.list_monsters(None, None).await.unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 503, .. }));
    }
}
