use std::env;

/// Configuration for the remote storefront catalog/stock API.
pub struct StorefrontConfig {
    pub base_url: String,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - STOREFRONT_API_URL: Base URL of the catalog/stock API
    ///   (default: "http://localhost:3333")
    pub fn from_env() -> Self {
        let base_url =
            env::var("STOREFRONT_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        Self { base_url }
    }
}
