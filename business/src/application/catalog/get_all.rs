use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::CatalogSnapshot;
use crate::domain::catalog::services::CatalogFetcher;
use crate::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use crate::domain::logger::Logger;

pub struct GetCatalogUseCaseImpl {
    pub fetcher: Arc<dyn CatalogFetcher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> CatalogSnapshot {
        self.logger.info("Fetching product catalog");
        match self.fetcher.fetch_all().await {
            Ok(products) => {
                self.logger
                    .info(&format!("Catalog loaded with {} products", products.len()));
                CatalogSnapshot::loaded(products)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch products: {}", err));
                CatalogSnapshot::failed(err)
            }
        }
    }
}
