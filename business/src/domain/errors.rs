/// Durable store errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.deserialization")]
    Deserialization,
    #[error("store.persistence")]
    Persistence,
}

impl StoreError {
    pub fn deserialization() -> Self {
        StoreError::Deserialization
    }
    pub fn persistence() -> Self {
        StoreError::Persistence
    }
}
