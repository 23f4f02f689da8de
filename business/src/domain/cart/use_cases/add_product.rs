use async_trait::async_trait;

use crate::domain::cart::model::CartItem;

pub struct AddProductParams {
    pub product_id: u64,
}

/// Puts one more unit of a product into the cart: a first add creates the
/// line at quantity 1, a repeated add bumps the existing line by one.
/// Returns the post-operation snapshot; failures surface only through the
/// notification channel.
#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Vec<CartItem>;
}
