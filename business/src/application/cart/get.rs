use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Fetching cart for {}", params.owner));

        let cart = self
            .repository
            .get_by_owner(&params.owner)
            .await?
            .ok_or(CartError::NotFound)?;

        self.logger.debug(&format!(
            "Cart for {} has {} items",
            params.owner,
            cart.items.len()
        ));
        Ok(cart)
    }
}
