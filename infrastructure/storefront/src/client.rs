use reqwest::Client;

/// Shared storefront API HTTP client configuration.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the stock lookup URL for a product.
    pub fn stock_url(&self, product_id: u64) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the catalog lookup URL for a product.
    pub fn products_url(&self, product_id: u64) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_lookup_urls_from_base() {
        let client = StorefrontClient::new("http://localhost:3333".to_string());

        assert_eq!(client.stock_url(7), "http://localhost:3333/stock/7");
        assert_eq!(client.products_url(7), "http://localhost:3333/products/7");
    }
}
