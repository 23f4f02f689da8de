use async_trait::async_trait;

use crate::domain::cart::model::CartItem;

pub struct UpdateProductAmountParams {
    pub product_id: u64,
    /// Requested absolute target quantity. Zero is a silent no-op.
    pub amount: u32,
}

/// Sets a line's quantity after re-validating against a fresh stock read.
/// Returns the post-operation snapshot; failures surface only through the
/// notification channel.
#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> Vec<CartItem>;
}
