use async_trait::async_trait;
use serde::Deserialize;

use business::domain::cart::services::{StockRecord, StockService};
use business::domain::errors::ServiceError;

use crate::client::StorefrontClient;

#[derive(Deserialize)]
struct StockPayload {
    id: u64,
    amount: u32,
}

impl StockPayload {
    fn into_domain(self) -> StockRecord {
        StockRecord {
            id: self.id,
            amount: self.amount,
        }
    }
}

pub struct StockServiceHttp {
    client: StorefrontClient,
}

impl StockServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockService for StockServiceHttp {
    async fn get(&self, product_id: u64) -> Result<StockRecord, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.stock_url(product_id))
            .send()
            .await
            .map_err(|_| ServiceError::Request)?
            .error_for_status()
            .map_err(|_| ServiceError::Request)?;

        let payload = response
            .json::<StockPayload>()
            .await
            .map_err(|_| ServiceError::Decode)?;

        Ok(payload.into_domain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_wire_payload_into_domain_record() {
        let payload: StockPayload = serde_json::from_str(r#"{"id":3,"amount":12}"#).unwrap();

        let record = payload.into_domain();

        assert_eq!(
            record,
            StockRecord {
                id: 3,
                amount: 12
            }
        );
    }
}
