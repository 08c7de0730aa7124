#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// A mutation reached the engine before `initialize` completed.
    #[error("cart.not_initialized")]
    NotInitialized,
    #[error("cart.product_id_missing")]
    ProductIdMissing,
    #[error("store.failure")]
    Store(#[from] crate::domain::errors::StoreError),
}
