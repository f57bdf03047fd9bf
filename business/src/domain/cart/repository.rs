use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::OwnerId;

use super::model::Cart;

/// Persistence for carts, one per owner. No business rules live here.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_owner(&self, owner: &OwnerId) -> Result<Option<Cart>, RepositoryError>;
    /// Inserts an empty cart. `RepositoryError::Duplicated` when the owner
    /// already has one.
    async fn create(&self, owner: &OwnerId) -> Result<Cart, RepositoryError>;
    /// Writes the cart if its `version` still matches the stored one and
    /// returns it with the bumped version; `RepositoryError::Conflict` otherwise.
    async fn save(&self, cart: &Cart) -> Result<Cart, RepositoryError>;
}
