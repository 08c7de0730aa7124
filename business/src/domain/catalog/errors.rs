#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.network")]
    Network,
    #[error("catalog.parse")]
    Parse,
    #[error("catalog.timeout")]
    Timeout,
    #[error("catalog.product_not_found")]
    ProductNotFound,
}
