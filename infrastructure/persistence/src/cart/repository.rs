use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartStore;
use business::domain::errors::StoreError;

use crate::kv::{FileKeyValueStore, KeyValueError};

use super::entity::CartLineEntity;

/// Well-known key of the cart snapshot.
pub const CART_KEY: &str = "cart";

pub struct CartStoreFile {
    store: Arc<FileKeyValueStore>,
}

impl CartStoreFile {
    pub fn new(store: Arc<FileKeyValueStore>) -> Self {
        Self { store }
    }

    /// Drops the stored snapshot; the next `load` reports it absent.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store
            .remove_item(CART_KEY)
            .await
            .map_err(|_| StoreError::persistence())
    }
}

fn map_read_error(err: KeyValueError) -> StoreError {
    match err {
        KeyValueError::Corrupt => StoreError::deserialization(),
        KeyValueError::Io(_) | KeyValueError::Encode => StoreError::persistence(),
    }
}

#[async_trait]
impl CartStore for CartStoreFile {
    async fn load(&self) -> Result<Option<Cart>, StoreError> {
        let raw = self
            .store
            .get_item(CART_KEY)
            .await
            .map_err(map_read_error)?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let entities: Vec<CartLineEntity> = serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!(error = %err, "Stored cart is not valid JSON");
            StoreError::deserialization()
        })?;

        Ok(Some(Cart::from_lines(
            entities.into_iter().map(|e| e.into_domain()).collect(),
        )))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let entities: Vec<CartLineEntity> = cart
            .lines()
            .iter()
            .map(CartLineEntity::from_domain)
            .collect();
        let raw = serde_json::to_string(&entities).map_err(|_| StoreError::persistence())?;

        self.store.set_item(CART_KEY, &raw).await.map_err(|err| {
            tracing::error!(error = %err, "Writing cart snapshot failed");
            StoreError::persistence()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::StoreConfig;
    use business::application::cart::engine::CartEngineImpl;
    use business::domain::cart::engine::CartEngine;
    use business::domain::cart::model::CartLine;
    use business::domain::product::model::Product;
    use business::domain::product::value_objects::{Price, ProductId};
    use logger::TracingLogger;
    use tempfile::TempDir;

    fn kv_in(dir: &TempDir) -> Arc<FileKeyValueStore> {
        Arc::new(FileKeyValueStore::open(&StoreConfig::new(
            dir.path().join("storefront_store.json"),
        )))
    }

    fn product(id: i64, price: &str) -> Product {
        Product::from_catalog(
            ProductId::from(id),
            format!("Product {}", id),
            "Description".to_string(),
            format!("https://img.example/{}.jpg", id),
            Price::from(price),
        )
    }

    #[tokio::test]
    async fn should_report_absent_cart_on_first_run() {
        let dir = TempDir::new().unwrap();
        let store = CartStoreFile::new(kv_in(&dir));

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_round_trip_lines_in_order_with_duplicates() {
        let dir = TempDir::new().unwrap();
        let cart = Cart::from_lines(vec![
            CartLine::snapshot(&product(2, "$2")),
            CartLine::snapshot(&product(1, "$1")),
            CartLine::snapshot(&product(2, "$2")),
        ]);

        CartStoreFile::new(kv_in(&dir)).save(&cart).await.unwrap();
        let loaded = CartStoreFile::new(kv_in(&dir)).load().await.unwrap();

        assert_eq!(loaded, Some(cart));
    }

    #[tokio::test]
    async fn should_persist_product_shaped_array_under_cart_key() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        let cart = Cart::from_lines(vec![CartLine::snapshot(&product(7, "$7.25"))]);

        CartStoreFile::new(kv.clone()).save(&cart).await.unwrap();

        let raw = kv.get_item(CART_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": 7,
                "title": "Product 7",
                "description": "Description",
                "price": "$7.25",
                "image": "https://img.example/7.jpg",
            }])
        );
    }

    #[tokio::test]
    async fn should_read_snapshot_with_extra_catalog_fields() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        let raw = serde_json::json!([{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }])
        .to_string();
        kv.set_item(CART_KEY, &raw).await.unwrap();

        let cart = CartStoreFile::new(kv).load().await.unwrap().unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id, ProductId::from(1));
        assert_eq!(cart.lines()[0].title, "Fjallraven Backpack");
    }

    #[tokio::test]
    async fn should_remove_lines_with_non_integer_numeric_ids() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        let raw = serde_json::json!([
            { "id": 1.0, "title": "A", "price": "$1" },
            { "id": 18446744073709551615u64, "title": "B", "price": "$2" }
        ])
        .to_string();
        kv.set_item(CART_KEY, &raw).await.unwrap();

        let engine = CartEngineImpl::new(Arc::new(CartStoreFile::new(kv)), Arc::new(TracingLogger));
        assert_eq!(engine.initialize().await.len(), 2);

        let cart = engine
            .remove_line(&ProductId::from("18446744073709551615"))
            .await
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id.as_key(), "1.0");
    }

    #[tokio::test]
    async fn should_fail_with_deserialization_error_when_value_corrupt() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        kv.set_item(CART_KEY, "[{\"id\":").await.unwrap();

        let result = CartStoreFile::new(kv).load().await;

        assert!(matches!(result, Err(StoreError::Deserialization)));
    }

    #[tokio::test]
    async fn should_fail_with_deserialization_error_when_file_corrupt() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        std::fs::write(kv.path(), b"garbage").unwrap();

        let result = CartStoreFile::new(kv).load().await;

        assert!(matches!(result, Err(StoreError::Deserialization)));
    }

    #[tokio::test]
    async fn should_forget_snapshot_after_clear() {
        let dir = TempDir::new().unwrap();
        let store = CartStoreFile::new(kv_in(&dir));
        store.save(&Cart::empty()).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_restore_engine_cart_after_restart() {
        let dir = TempDir::new().unwrap();

        let engine = CartEngineImpl::new(
            Arc::new(CartStoreFile::new(kv_in(&dir))),
            Arc::new(TracingLogger),
        );
        engine.initialize().await;
        engine.add_line(&product(1, "$10")).await.unwrap();
        engine.add_line(&product(2, "$5")).await.unwrap();
        let last = engine.remove_line(&ProductId::from(1)).await.unwrap();
        drop(engine);

        let restarted = CartEngineImpl::new(
            Arc::new(CartStoreFile::new(kv_in(&dir))),
            Arc::new(TracingLogger),
        );

        assert_eq!(restarted.initialize().await, last);
    }

    #[tokio::test]
    async fn should_start_empty_after_restart_when_snapshot_corrupt() {
        let dir = TempDir::new().unwrap();
        let kv = kv_in(&dir);
        kv.set_item(CART_KEY, "not a cart").await.unwrap();

        let engine = CartEngineImpl::new(Arc::new(CartStoreFile::new(kv)), Arc::new(TracingLogger));

        assert!(engine.initialize().await.is_empty());
    }
}
