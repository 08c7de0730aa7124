use std::sync::Arc;

use anyhow::Context;

use catalog::client::CatalogClient;
use catalog::fetcher::CatalogFetcherHttp;
use logger::TracingLogger;
use persistence::cart::repository::CartStoreFile;
use persistence::kv::{FileKeyValueStore, StoreConfig};

use business::application::cart::engine::CartEngineImpl;
use business::application::catalog::get_all::GetCatalogUseCaseImpl;
use business::application::catalog::get_by_id::GetProductDetailUseCaseImpl;
use business::domain::cart::engine::CartEngine;
use business::domain::cart::repository::CartStore;
use business::domain::catalog::services::CatalogFetcher;
use business::domain::catalog::use_cases::get_all::GetCatalogUseCase;
use business::domain::catalog::use_cases::get_by_id::GetProductDetailUseCase;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;

/// The single cart engine and the catalog use cases for one session.
pub struct DependencyContainer {
    pub cart_engine: Arc<dyn CartEngine>,
    pub get_catalog: Arc<dyn GetCatalogUseCase>,
    pub get_product_detail: Arc<dyn GetProductDetailUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        url::Url::parse(&config.catalog.url)
            .with_context(|| format!("CATALOG_URL is not a valid URL: {}", config.catalog.url))?;

        let key_value_store = Arc::new(FileKeyValueStore::open(&StoreConfig::new(
            config.store.path.clone(),
        )));
        let cart_store = Arc::new(CartStoreFile::new(key_value_store));
        let client = CatalogClient::new(config.catalog.url.clone(), config.catalog.timeout)
            .context("building catalog HTTP client")?;
        let fetcher = Arc::new(CatalogFetcherHttp::new(client));

        Ok(Self::from_adapters(cart_store, fetcher, Arc::new(TracingLogger)))
    }

    /// Wires the core around already built adapters.
    pub fn from_adapters(
        cart_store: Arc<dyn CartStore>,
        fetcher: Arc<dyn CatalogFetcher>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let cart_engine = Arc::new(CartEngineImpl::new(cart_store, logger.clone()));
        let get_catalog = Arc::new(GetCatalogUseCaseImpl {
            fetcher,
            logger: logger.clone(),
        });
        let get_product_detail = Arc::new(GetProductDetailUseCaseImpl { logger });

        Self {
            cart_engine,
            get_catalog,
            get_product_detail,
        }
    }
}
