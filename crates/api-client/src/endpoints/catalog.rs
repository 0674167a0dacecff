//! Catalog listing endpoint

use crate::client::PokeApiClient;
use crate::error::ApiResult;
use pokedex_core::catalog::{CatalogEntry, CatalogPage, CatalogRecord};
use tracing::info;

/// Catalog API
pub struct CatalogApi {
    client: PokeApiClient,
}

impl CatalogApi {
    pub(crate) fn new(client: PokeApiClient) -> Self {
        Self { client }
    }

    /// Path of the first catalog page for `limit` entries
    #[must_use]
    pub fn list_path(limit: u32) -> String {
        format!("pokemon?limit={limit}")
    }

    /// Fetch the first page of the catalog as raw records, in API order
    pub async fn list(&self) -> ApiResult<Vec<CatalogRecord>> {
        let path = Self::list_path(self.client.config().catalog_limit);
        let page: CatalogPage = self.client.get(&path).await?;

        info!(
            received = page.results.len(),
            total = page.count,
            "Fetched catalog"
        );
        Ok(page.results)
    }

    /// Fetch the catalog and number it by position
    pub async fn list_entries(&self) -> ApiResult<Vec<CatalogEntry>> {
        let records = self.list().await?;
        Ok(CatalogEntry::enrich(records)?)
    }
}
