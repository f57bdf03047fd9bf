use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use crate::domain::logger::Logger;

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of {}",
            params.product_id, params.owner
        ));

        let mut cart = self
            .repository
            .get_by_owner(&params.owner)
            .await?
            .ok_or(CartError::NoCartToModify)?;

        cart.remove_item(params.product_id)?;
        let saved = self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Product {} removed from cart of {}",
            params.product_id, params.owner
        ));
        Ok(saved)
    }
}
