use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::ledger::CheckoutLedger;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::checkout::{CheckoutCartParams, CheckoutCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct CheckoutCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub ledger: Arc<dyn CheckoutLedger>,
    pub logger: Arc<dyn Logger>,
}

fn user_error(e: RepositoryError) -> CartError {
    match e {
        RepositoryError::NotFound => CartError::UserNotFound,
        other => CartError::Repository(other),
    }
}

#[async_trait]
impl CheckoutCartUseCase for CheckoutCartUseCaseImpl {
    async fn execute(&self, params: CheckoutCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Checking out cart of {}", params.owner));

        let cart = self
            .repository
            .get_by_owner(&params.owner)
            .await?
            .ok_or(CartError::CheckoutCartMissing)?;

        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let has_address = self
            .user_repository
            .has_non_default_address(&params.owner)
            .await
            .map_err(user_error)?;
        if !has_address {
            return Err(CartError::AddressRequired);
        }

        // Snapshotted prices, not the live catalog.
        let total = cart.total();

        let wallet = self
            .user_repository
            .get_wallet(&params.owner)
            .await
            .map_err(user_error)?;
        if wallet < total {
            self.logger.info(&format!(
                "Checkout of {} refused: total {} exceeds wallet {}",
                params.owner, total, wallet
            ));
            return Err(CartError::InsufficientBalance);
        }

        let cleared = self.ledger.settle(&cart, &total).await?;

        self.logger.info(&format!(
            "Checkout of {} settled: debited {}",
            params.owner, total
        ));
        Ok(cleared)
    }
}
