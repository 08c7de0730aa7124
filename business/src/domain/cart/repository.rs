use async_trait::async_trait;

use crate::domain::errors::StoreError;

use super::model::Cart;

/// Durable home of the single cart snapshot.
///
/// `save` must not return before the snapshot is durable; callers rely on a
/// completed `save` surviving a crash.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self) -> Result<Option<Cart>, StoreError>;
    async fn save(&self, cart: &Cart) -> Result<(), StoreError>;
}
