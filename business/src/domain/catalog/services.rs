use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::CatalogError;

/// Service port for the remote, read-only product catalog.
///
/// Implementations may cache the first successful response for the rest of
/// the session. They never retry on their own.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
}
