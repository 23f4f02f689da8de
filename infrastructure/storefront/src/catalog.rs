use async_trait::async_trait;
use serde::Deserialize;

use business::domain::cart::model::Product;
use business::domain::cart::services::CatalogService;
use business::domain::errors::ServiceError;

use crate::client::StorefrontClient;

#[derive(Deserialize)]
struct ProductPayload {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

impl ProductPayload {
    fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
        }
    }
}

pub struct CatalogServiceHttp {
    client: StorefrontClient,
}

impl CatalogServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceHttp {
    async fn get(&self, product_id: u64) -> Result<Product, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.products_url(product_id))
            .send()
            .await
            .map_err(|_| ServiceError::Request)?
            .error_for_status()
            .map_err(|_| ServiceError::Request)?;

        let payload = response
            .json::<ProductPayload>()
            .await
            .map_err(|_| ServiceError::Decode)?;

        Ok(payload.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_wire_payload_into_domain_product() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"id":2,"title":"Sneaker","price":99.9,"image":"sneaker.png"}"#,
        )
        .unwrap();

        let product = payload.into_domain();

        assert_eq!(product.id, 2);
        assert_eq!(product.title, "Sneaker");
        assert_eq!(product.image, "sneaker.png");
    }
}
