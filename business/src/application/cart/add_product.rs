use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};

use super::manager::CartManager;

#[async_trait]
impl AddProductUseCase for CartManager {
    async fn execute(&self, params: AddProductParams) -> Vec<CartItem> {
        let AddProductParams { product_id } = params;
        self.logger
            .info(&format!("Adding product {product_id} to cart"));

        let mut current = self.cart.lock().await;
        let result = match current.amount_of(product_id) {
            // Repeated add is a quantity bump, re-validated against a fresh
            // stock read like any other amount change.
            Some(amount) => {
                self.apply_amount(&mut current, product_id, amount + 1)
                    .await
            }
            None => self.add_new(&mut current, product_id).await,
        };

        if let Err(err) = result {
            self.notify_failure(&err);
        }
        current.items().to_vec()
    }
}

impl CartManager {
    /// First add of a product: both lookups must answer before the line is
    /// appended at quantity 1.
    async fn add_new(&self, current: &mut Cart, product_id: u64) -> Result<(), CartError> {
        let stock = self.stock.get(product_id).await.map_err(|err| {
            self.logger
                .error(&format!("stock lookup failed for product {product_id}: {err}"));
            CartError::Add
        })?;

        if stock.amount < 1 {
            return Err(CartError::OutOfStock);
        }

        let product = self.catalog.get(product_id).await.map_err(|err| {
            self.logger
                .error(&format!("catalog lookup failed for product {product_id}: {err}"));
            CartError::Add
        })?;

        let next = current.with_item(CartItem::new(product));
        self.commit(current, next).await.map_err(|err| {
            self.logger
                .error(&format!("persisting cart snapshot failed: {err}"));
            CartError::Add
        })
    }
}
