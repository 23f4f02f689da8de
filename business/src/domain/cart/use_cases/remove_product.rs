use async_trait::async_trait;

use crate::domain::cart::model::CartItem;

pub struct RemoveProductParams {
    pub product_id: u64,
}

/// Drops a product's line from the cart. Returns the post-operation
/// snapshot; failures surface only through the notification channel.
#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Vec<CartItem>;
}
