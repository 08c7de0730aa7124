use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::errors::CartError;
use super::model::Cart;

/// The surface a presentation may call to read and mutate the cart.
#[async_trait]
pub trait CartEngine: Send + Sync {
    /// Loads the durable snapshot. Never fails: a missing or unreadable
    /// snapshot yields an empty cart.
    async fn initialize(&self) -> Cart;
    async fn add_line(&self, product: &Product) -> Result<Cart, CartError>;
    async fn remove_line(&self, id: &ProductId) -> Result<Cart, CartError>;
    async fn current(&self) -> Result<Cart, CartError>;
    fn compute_total(&self, cart: &Cart) -> BigDecimal;
}
