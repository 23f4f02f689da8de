use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};

use super::manager::CartManager;

#[async_trait]
impl RemoveProductUseCase for CartManager {
    async fn execute(&self, params: RemoveProductParams) -> Vec<CartItem> {
        let RemoveProductParams { product_id } = params;
        self.logger
            .info(&format!("Removing product {product_id} from cart"));

        let mut current = self.cart.lock().await;
        if let Err(err) = self.remove(&mut current, product_id).await {
            self.notify_failure(&err);
        }
        current.items().to_vec()
    }
}

impl CartManager {
    async fn remove(&self, current: &mut Cart, product_id: u64) -> Result<(), CartError> {
        let next = current.without(product_id);
        // An unchanged length means the product was never in the cart.
        if next.len() == current.len() {
            return Err(CartError::NotFound);
        }

        self.commit(current, next).await.map_err(|err| {
            self.logger
                .error(&format!("persisting cart snapshot failed: {err}"));
            CartError::Remove
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Product;
    use crate::domain::cart::services::{CatalogService, StockRecord, StockService};
    use crate::domain::cart::store::KeyValueStore;
    use crate::domain::errors::{ServiceError, StoreError};
    use crate::domain::logger::Logger;
    use crate::domain::notifier::Notifier;
    use mockall::mock;
    use std::sync::Arc;

    mock! {
        pub Store {}

        #[async_trait]
        impl KeyValueStore for Store {
            async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
            async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
        }
    }

    mock! {
        pub Stock {}

        #[async_trait]
        impl StockService for Stock {
            async fn get(&self, product_id: u64) -> Result<StockRecord, ServiceError>;
        }
    }

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn get(&self, product_id: u64) -> Result<Product, ServiceError>;
        }
    }

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn error(&self, message: &str);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn item(id: u64, title: &str, amount: u32) -> CartItem {
        CartItem {
            product: Product {
                id,
                title: title.to_string(),
                price: 19.9,
                image: format!("{title}.png"),
            },
            amount,
        }
    }

    fn seeded_store(items: Vec<CartItem>) -> MockStore {
        let raw = serde_json::to_string(&items).unwrap();
        let mut store = MockStore::new();
        store.expect_read().returning(move |_| Ok(Some(raw.clone())));
        store
    }

    async fn manager(store: MockStore, notifier: MockNotify) -> CartManager {
        CartManager::init(
            Arc::new(store),
            Arc::new(MockStock::new()),
            Arc::new(MockCatalog::new()),
            Arc::new(notifier),
            mock_logger(),
        )
        .await
    }

    #[tokio::test]
    async fn should_remove_exactly_the_target_line_preserving_order() {
        let mut store = seeded_store(vec![
            item(1, "sneaker", 1),
            item(2, "sandal", 3),
            item(3, "boot", 2),
        ]);
        let expected =
            serde_json::to_string(&vec![item(1, "sneaker", 1), item(3, "boot", 2)]).unwrap();
        store
            .expect_write()
            .withf(move |key, value| key == "cart" && value == expected)
            .times(1)
            .returning(|_, _| Ok(()));

        let manager = manager(store, MockNotify::new()).await;

        let snapshot =
            RemoveProductUseCase::execute(&manager, RemoveProductParams { product_id: 2 }).await;

        let ids: Vec<u64> = snapshot.iter().map(|i| i.product_id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn should_notify_when_target_not_in_cart() {
        // No write expectation: a miss must not touch the store.
        let store = seeded_store(vec![item(1, "sneaker", 1)]);

        let mut notifier = MockNotify::new();
        notifier
            .expect_error()
            .withf(|message| message == "error removing product")
            .times(1)
            .returning(|_| ());

        let manager = manager(store, notifier).await;

        let snapshot =
            RemoveProductUseCase::execute(&manager, RemoveProductParams { product_id: 42 }).await;

        assert_eq!(snapshot, vec![item(1, "sneaker", 1)]);
    }

    #[tokio::test]
    async fn should_keep_memory_unchanged_when_store_write_fails() {
        let mut store = seeded_store(vec![item(1, "sneaker", 1)]);
        store
            .expect_write()
            .returning(|_, _| Err(StoreError::Write));

        let mut notifier = MockNotify::new();
        notifier
            .expect_error()
            .withf(|message| message == "error removing product")
            .times(1)
            .returning(|_| ());

        let manager = manager(store, notifier).await;

        let snapshot =
            RemoveProductUseCase::execute(&manager, RemoveProductParams { product_id: 1 }).await;

        assert_eq!(snapshot, vec![item(1, "sneaker", 1)]);
        assert_eq!(manager.cart().await, snapshot);
    }
}
