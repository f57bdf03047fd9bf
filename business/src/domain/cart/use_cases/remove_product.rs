use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::OwnerId;

pub struct RemoveProductFromCartParams {
    pub owner: OwnerId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError>;
}
