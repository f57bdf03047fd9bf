use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::OwnerId;

pub struct AddProductToCartParams {
    pub owner: OwnerId,
    pub product_id: Uuid,
    pub quantity: u32,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError>;
}
