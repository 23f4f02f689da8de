/// Failure taxonomy of the cart operations. `Add`, `Remove` and `Update`
/// absorb any dependent-call failure without further distinction; the
/// notification channel carries one message per operation outcome.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.item_not_found")]
    NotFound,
    #[error("cart.add_failed")]
    Add,
    #[error("cart.remove_failed")]
    Remove,
    #[error("cart.update_failed")]
    Update,
}

impl CartError {
    /// The user-facing message surfaced through the notification channel.
    /// A missing removal target and a failed removal read the same to the
    /// shopper.
    pub fn user_message(&self) -> &'static str {
        match self {
            CartError::OutOfStock => "requested quantity is out of stock",
            CartError::NotFound | CartError::Remove => "error removing product",
            CartError::Add => "error adding product",
            CartError::Update => "error updating product quantity",
        }
    }
}
