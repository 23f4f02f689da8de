use async_trait::async_trait;

use crate::domain::errors::StoreError;

/// The single fixed key under which the cart snapshot is persisted.
pub const CART_KEY: &str = "cart";

/// Persistence port: a plain string key-value store. Serialization of the
/// snapshot is owned by the cart logic, not the substrate.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
