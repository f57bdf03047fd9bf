use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Applies a checkout: debits the owner's wallet by `total` and empties the
/// cart as one unit. Either both writes become visible or neither does.
#[async_trait]
pub trait CheckoutLedger: Send + Sync {
    /// Returns the emptied cart. `RepositoryError::Conflict` when the cart
    /// version or the wallet balance changed since they were read.
    async fn settle(&self, cart: &Cart, total: &BigDecimal) -> Result<Cart, RepositoryError>;
}
