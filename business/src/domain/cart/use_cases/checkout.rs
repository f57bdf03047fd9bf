use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::OwnerId;

pub struct CheckoutCartParams {
    pub owner: OwnerId,
}

#[async_trait]
pub trait CheckoutCartUseCase: Send + Sync {
    /// Returns the emptied cart on success.
    async fn execute(&self, params: CheckoutCartParams) -> Result<Cart, CartError>;
}
