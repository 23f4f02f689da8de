use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};

use super::manager::CartManager;

#[async_trait]
impl UpdateProductAmountUseCase for CartManager {
    async fn execute(&self, params: UpdateProductAmountParams) -> Vec<CartItem> {
        let UpdateProductAmountParams { product_id, amount } = params;
        self.logger.info(&format!(
            "Updating product {product_id} to amount {amount}"
        ));

        let mut current = self.cart.lock().await;
        if let Err(err) = self.apply_amount(&mut current, product_id, amount).await {
            self.notify_failure(&err);
        }
        current.items().to_vec()
    }
}
