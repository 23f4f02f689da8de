use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::services::{CatalogService, StockService};
use crate::domain::cart::store::{CART_KEY, KeyValueStore};
use crate::domain::errors::StoreError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

/// Owns the in-memory cart snapshot and mirrors it to the persistent store
/// on every successful mutation.
///
/// Mutations lock the snapshot for their whole lifetime, including the
/// stock/catalog awaits, so concurrent calls serialize instead of racing a
/// read-modify-write. The stock value itself can still go stale between the
/// check and the commit; that race is accepted.
pub struct CartManager {
    pub(crate) cart: Mutex<Cart>,
    pub(crate) store: Arc<dyn KeyValueStore>,
    pub(crate) stock: Arc<dyn StockService>,
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) logger: Arc<dyn Logger>,
}

impl CartManager {
    /// Builds the manager around the persisted snapshot. An absent key
    /// starts an empty cart; unreadable or malformed state also starts
    /// empty, with a logged warning instead of a propagated parse failure.
    pub async fn init(
        store: Arc<dyn KeyValueStore>,
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn CatalogService>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let cart = match store.read(CART_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => Cart::from_items(items),
                Err(err) => {
                    logger.warn(&format!("discarding malformed cart snapshot: {err}"));
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                logger.warn(&format!("could not read persisted cart: {err}"));
                Cart::new()
            }
        };

        Self {
            cart: Mutex::new(cart),
            store,
            stock,
            catalog,
            notifier,
            logger,
        }
    }

    /// Current snapshot, cloned out of the lock.
    pub async fn cart(&self) -> Vec<CartItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Writes `next` to the store, then swaps it into memory. Memory is
    /// only touched after the write succeeded, so a failed mutation leaves
    /// both sides on the previous snapshot.
    pub(crate) async fn commit(&self, current: &mut Cart, next: Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(next.items()).map_err(|_| StoreError::Write)?;
        self.store.write(CART_KEY, &raw).await?;
        *current = next;
        Ok(())
    }

    /// Shared update routine: validates the requested absolute quantity
    /// against a fresh stock read and commits the adjusted snapshot.
    /// A requested quantity of zero is a silent no-op.
    pub(crate) async fn apply_amount(
        &self,
        current: &mut Cart,
        product_id: u64,
        amount: u32,
    ) -> Result<(), CartError> {
        if amount < 1 {
            return Ok(());
        }

        let stock = self.stock.get(product_id).await.map_err(|err| {
            self.logger
                .error(&format!("stock lookup failed for product {product_id}: {err}"));
            CartError::Update
        })?;

        if amount > stock.amount {
            return Err(CartError::OutOfStock);
        }

        let next = current.with_amount(product_id, amount);
        self.commit(current, next).await.map_err(|err| {
            self.logger
                .error(&format!("persisting cart snapshot failed: {err}"));
            CartError::Update
        })
    }

    /// Operation boundary for failures: log the rejection, surface exactly
    /// one message to the shopper, and swallow the error.
    pub(crate) fn notify_failure(&self, err: &CartError) {
        self.logger.warn(&format!("cart operation rejected: {err}"));
        self.notifier.error(err.user_message());
    }
}
