use async_trait::async_trait;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;

use super::manager::CartManager;

#[async_trait]
impl GetCartUseCase for CartManager {
    async fn execute(&self) -> Vec<CartItem> {
        self.cart().await
    }
}
