use std::sync::Arc;

use logger::{TracingLogger, TracingNotifier};
use persistence::FileStore;
use storefront::catalog::CatalogServiceHttp;
use storefront::client::StorefrontClient;
use storefront::stock::StockServiceHttp;

use business::application::cart::manager::CartManager;

use crate::config::store_config::StoreConfig;
use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub async fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(TracingNotifier);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let store_config = StoreConfig::from_env();
        let store = Arc::new(FileStore::new(store_config.dir)?);

        let storefront_config = StorefrontConfig::from_env();
        let stock_client = StorefrontClient::new(storefront_config.base_url.clone());
        let catalog_client = StorefrontClient::new(storefront_config.base_url);
        let stock_service = Arc::new(StockServiceHttp::new(stock_client));
        let catalog_service = Arc::new(CatalogServiceHttp::new(catalog_client));

        // Cart manager, restored from the persisted snapshot
        let manager = Arc::new(
            CartManager::init(store, stock_service, catalog_service, notifier, logger).await,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            manager.clone(),
            manager.clone(),
            manager.clone(),
            manager,
        );

        Ok(Self {
            health_api,
            cart_api,
        })
    }
}
