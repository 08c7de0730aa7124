use business::domain::cart::errors::CartError;
use business::domain::catalog::errors::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Cart(#[from] CartError),
}
