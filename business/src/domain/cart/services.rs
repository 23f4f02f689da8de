use async_trait::async_trait;

use super::model::Product;
use crate::domain::errors::ServiceError;

/// Availability of a product at the moment of the check. Authoritative
/// upper bound for a line amount; not re-validated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    pub id: u64,
    pub amount: u32,
}

/// Service port for the read-only stock lookup.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get(&self, product_id: u64) -> Result<StockRecord, ServiceError>;
}

/// Service port for the read-only product catalog lookup.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get(&self, product_id: u64) -> Result<Product, ServiceError>;
}
