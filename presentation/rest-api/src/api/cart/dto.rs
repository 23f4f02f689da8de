use poem_openapi::Object;

use business::domain::cart::model::CartItem;

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product unique identifier
    pub id: u64,
    /// Product display title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Selected quantity (always >= 1)
    pub amount: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.product.id,
            title: item.product.title,
            price: item.product.price,
            image: item.product.image,
            amount: item.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Requested absolute quantity for the line. Zero is ignored.
    pub amount: u32,
}
