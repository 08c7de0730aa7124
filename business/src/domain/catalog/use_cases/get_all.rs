use async_trait::async_trait;

use crate::domain::catalog::model::CatalogSnapshot;

#[async_trait]
pub trait GetCatalogUseCase: Send + Sync {
    async fn execute(&self) -> CatalogSnapshot;
}
