use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only view of the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns `RepositoryError::NotFound` when the catalog has no such product.
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
