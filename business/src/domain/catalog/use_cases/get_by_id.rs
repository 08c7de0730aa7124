use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::CatalogSnapshot;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Looks `id` up in the snapshot the caller already displays.
pub struct GetProductDetailParams<'a> {
    pub catalog: &'a CatalogSnapshot,
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailParams<'_>) -> Result<Product, CatalogError>;
}
