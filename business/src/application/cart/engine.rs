use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tokio::sync::Mutex;

use crate::domain::cart::engine::CartEngine;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine, CartState};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::total::compute_total;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Write-through cart owner.
///
/// The state lock is held for the whole load/modify/save body of every
/// operation, so mutations run one at a time in submission order and the
/// in-memory cart is only replaced after the store accepted it.
pub struct CartEngineImpl {
    store: Arc<dyn CartStore>,
    logger: Arc<dyn Logger>,
    state: Mutex<CartState>,
}

impl CartEngineImpl {
    pub fn new(store: Arc<dyn CartStore>, logger: Arc<dyn Logger>) -> Self {
        Self {
            store,
            logger,
            state: Mutex::new(CartState::Uninitialized),
        }
    }

    async fn commit(&self, state: &mut CartState, next: Cart) -> Result<Cart, CartError> {
        if let Err(err) = self.store.save(&next).await {
            self.logger
                .error(&format!("Persisting cart failed, change discarded: {}", err));
            return Err(err.into());
        }
        *state = CartState::Ready(next.clone());
        Ok(next)
    }

    fn not_initialized(&self, operation: &str) -> CartError {
        self.logger.error(&format!(
            "Cart {} called before initialize; this is a caller bug",
            operation
        ));
        CartError::NotInitialized
    }
}

#[async_trait]
impl CartEngine for CartEngineImpl {
    async fn initialize(&self) -> Cart {
        let mut state = self.state.lock().await;
        if let CartState::Ready(cart) = &*state {
            return cart.clone();
        }

        let cart = match self.store.load().await {
            Ok(Some(cart)) => {
                self.logger
                    .info(&format!("Restored cart with {} lines", cart.len()));
                cart
            }
            Ok(None) => {
                self.logger.info("No stored cart, starting empty");
                Cart::empty()
            }
            Err(err) => {
                self.logger.error(&format!(
                    "Loading stored cart failed, starting empty: {}",
                    err
                ));
                Cart::empty()
            }
        };

        *state = CartState::Ready(cart.clone());
        cart
    }

    async fn add_line(&self, product: &Product) -> Result<Cart, CartError> {
        let mut state = self.state.lock().await;
        let current = match &*state {
            CartState::Ready(cart) => cart,
            CartState::Uninitialized => return Err(self.not_initialized("add_line")),
        };

        if !product.id.is_usable() {
            self.logger.warn(&format!(
                "Refusing to add '{}' without a usable id",
                product.title
            ));
            return Err(CartError::ProductIdMissing);
        }

        self.logger
            .debug(&format!("Adding product {} to cart", product.id));
        let next = current.with_line(CartLine::snapshot(product));
        self.commit(&mut state, next).await
    }

    async fn remove_line(&self, id: &ProductId) -> Result<Cart, CartError> {
        let mut state = self.state.lock().await;
        let current = match &*state {
            CartState::Ready(cart) => cart,
            CartState::Uninitialized => return Err(self.not_initialized("remove_line")),
        };

        let next = current.without_id(id);
        self.logger.debug(&format!(
            "Removing product {} from cart ({} lines dropped)",
            id,
            current.len() - next.len()
        ));
        self.commit(&mut state, next).await
    }

    async fn current(&self) -> Result<Cart, CartError> {
        match &*self.state.lock().await {
            CartState::Ready(cart) => Ok(cart.clone()),
            CartState::Uninitialized => Err(self.not_initialized("current")),
        }
    }

    fn compute_total(&self, cart: &Cart) -> BigDecimal {
        compute_total(cart)
    }
}
