use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::ledger::CheckoutLedger;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

/// Checkout settlement for stores that cannot share a transaction between
/// the user and cart records.
///
/// The wallet is debited first; if clearing the cart then fails, the previous
/// balance is written back before the error is returned.
pub struct CompensatingCheckoutLedger {
    pub repository: Arc<dyn CartRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutLedger for CompensatingCheckoutLedger {
    async fn settle(&self, cart: &Cart, total: &BigDecimal) -> Result<Cart, RepositoryError> {
        let owner = &cart.owner;
        let balance = self.user_repository.get_wallet(owner).await?;
        if balance < *total {
            return Err(RepositoryError::Conflict);
        }

        let debited = balance.clone() - total.clone();
        self.user_repository.set_wallet(owner, &debited).await?;

        match self.repository.save(&cart.cleared()).await {
            Ok(cleared) => Ok(cleared),
            Err(e) => {
                self.logger.warn(&format!(
                    "Clearing cart of {} failed ({}), restoring wallet to {}",
                    owner, e, balance
                ));
                if let Err(restore) = self.user_repository.set_wallet(owner, &balance).await {
                    self.logger.error(&format!(
                        "Wallet restore for {} failed: {}; expected balance {}",
                        owner, restore, balance
                    ));
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockCartRepo, MockUserRepo, mock_logger, product_costing, saved, stored_cart,
    };
    use mockall::Sequence;

    fn cart_of_80() -> Cart {
        stored_cart(&[(product_costing(30), 2), (product_costing(20), 1)], 1)
    }

    fn ledger(carts: MockCartRepo, users: MockUserRepo) -> CompensatingCheckoutLedger {
        CompensatingCheckoutLedger {
            repository: Arc::new(carts),
            user_repository: Arc::new(users),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_debit_wallet_then_clear_cart() {
        let mut seq = Sequence::new();
        let mut users = MockUserRepo::new();
        users
            .expect_get_wallet()
            .returning(|_| Ok(BigDecimal::from(100)));
        users
            .expect_set_wallet()
            .withf(|_, amount| *amount == BigDecimal::from(20))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        let mut carts = MockCartRepo::new();
        carts
            .expect_save()
            .withf(|cart| cart.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|cart| Ok(saved(cart)));

        let cleared = ledger(carts, users)
            .settle(&cart_of_80(), &BigDecimal::from(80))
            .await
            .unwrap();

        assert!(cleared.is_empty());
        assert_eq!(cleared.version, 2);
    }

    #[tokio::test]
    async fn should_restore_wallet_when_cart_write_fails() {
        let mut users = MockUserRepo::new();
        users
            .expect_get_wallet()
            .returning(|_| Ok(BigDecimal::from(100)));
        users
            .expect_set_wallet()
            .withf(|_, amount| *amount == BigDecimal::from(20))
            .times(1)
            .returning(|_, _| Ok(()));
        users
            .expect_set_wallet()
            .withf(|_, amount| *amount == BigDecimal::from(100))
            .times(1)
            .returning(|_, _| Ok(()));
        let mut carts = MockCartRepo::new();
        carts
            .expect_save()
            .returning(|_| Err(RepositoryError::Conflict));

        let result = ledger(carts, users)
            .settle(&cart_of_80(), &BigDecimal::from(80))
            .await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Conflict));
    }

    #[tokio::test]
    async fn should_refuse_when_balance_dropped_below_total() {
        let mut users = MockUserRepo::new();
        users
            .expect_get_wallet()
            .returning(|_| Ok(BigDecimal::from(40)));
        users.expect_set_wallet().never();
        let mut carts = MockCartRepo::new();
        carts.expect_save().never();

        let result = ledger(carts, users)
            .settle(&cart_of_80(), &BigDecimal::from(80))
            .await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Conflict));
    }
}
