use super::{catalog_config::CatalogConfig, store_config::CartStoreConfig};

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub store: CartStoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
            store: CartStoreConfig::from_env(),
        }
    }
}
