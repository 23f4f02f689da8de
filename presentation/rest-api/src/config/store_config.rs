use std::env;

/// Configuration for the on-disk cart store.
pub struct StoreConfig {
    pub dir: String,
}

impl StoreConfig {
    /// Environment variables:
    /// - CART_STORE_DIR: Directory holding the persisted cart snapshot
    ///   (default: "./data")
    pub fn from_env() -> Self {
        let dir = env::var("CART_STORE_DIR").unwrap_or_else(|_| "./data".to_string());

        Self { dir }
    }
}
