use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::OwnerId;

use super::model::User;

/// Wallet and address access to the user store.
///
/// Every method returns `RepositoryError::NotFound` for an unknown owner.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, owner: &OwnerId) -> Result<User, RepositoryError>;
    async fn get_wallet(&self, owner: &OwnerId) -> Result<BigDecimal, RepositoryError>;
    async fn set_wallet(&self, owner: &OwnerId, amount: &BigDecimal)
    -> Result<(), RepositoryError>;
    async fn has_non_default_address(&self, owner: &OwnerId) -> Result<bool, RepositoryError>;
}
