use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::OwnerId;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductToCartUseCaseImpl {
    /// Returns the owner's cart, provisioning an empty one on first use.
    ///
    /// A concurrent request may create the cart between the read and the
    /// insert; the duplicate insert is resolved by reading the winner's cart.
    pub async fn get_or_create(&self, owner: &OwnerId) -> Result<Cart, CartError> {
        if let Some(cart) = self.repository.get_by_owner(owner).await? {
            return Ok(cart);
        }

        self.logger.info(&format!("Creating cart for {}", owner));
        match self.repository.create(owner).await {
            Ok(cart) => Ok(cart),
            Err(RepositoryError::Duplicated) => self
                .repository
                .get_by_owner(owner)
                .await?
                .ok_or(CartError::CreationFailed(RepositoryError::Duplicated)),
            Err(e) => {
                self.logger
                    .error(&format!("Cart creation failed for {}: {}", owner, e));
                Err(CartError::CreationFailed(e))
            }
        }
    }

    async fn find_product(&self, product_id: Uuid) -> Result<Product, CartError> {
        self.product_repository
            .get_by_id(product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotInCatalog,
                other => CartError::Repository(other),
            })
    }
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart of {}",
            params.product_id, params.quantity, params.owner
        ));

        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut cart = self.get_or_create(&params.owner).await?;
        let product = self.find_product(params.product_id).await?;

        cart.add_item(product, params.quantity)?;
        let saved = self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart of {} now has {} items",
            params.owner,
            saved.items.len()
        ));
        Ok(saved)
    }
}
