use async_trait::async_trait;

use crate::domain::cart::model::CartItem;

/// Read-only view of the current cart snapshot.
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self) -> Vec<CartItem>;
}
