use std::path::PathBuf;

/// Local durable storage for the cart snapshot
#[derive(Debug, Clone)]
pub struct CartStoreConfig {
    pub path: PathBuf,
}

impl CartStoreConfig {
    /// Environment variables:
    /// - CART_STORE_PATH: Key-value file holding the cart (default: "storefront_store.json")
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let path = var("CART_STORE_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| "storefront_store.json".to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}
