use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::get_by_id::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

/// Never reaches the network: a product the user was not shown cannot be
/// selected.
pub struct GetProductDetailUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    async fn execute(&self, params: GetProductDetailParams<'_>) -> Result<Product, CatalogError> {
        self.logger
            .debug(&format!("Fetching product detail: {}", params.id));

        let found = params
            .catalog
            .products
            .iter()
            .find(|product| product.id == params.id)
            .cloned();

        match found {
            Some(product) => Ok(product),
            None => {
                self.logger.warn(&format!(
                    "Product {} is not in the displayed catalog",
                    params.id
                ));
                Err(CatalogError::ProductNotFound)
            }
        }
    }
}
