//! Mocks of the domain ports and shared fixtures for use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::ledger::CheckoutLedger;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::OwnerId;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_by_owner(&self, owner: &OwnerId) -> Result<Option<Cart>, RepositoryError>;
        async fn create(&self, owner: &OwnerId) -> Result<Cart, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<Cart, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_email(&self, owner: &OwnerId) -> Result<User, RepositoryError>;
        async fn get_wallet(&self, owner: &OwnerId) -> Result<BigDecimal, RepositoryError>;
        async fn set_wallet(&self, owner: &OwnerId, amount: &BigDecimal) -> Result<(), RepositoryError>;
        async fn has_non_default_address(&self, owner: &OwnerId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Ledger {}

    #[async_trait]
    impl CheckoutLedger for Ledger {
        async fn settle(&self, cart: &Cart, total: &BigDecimal) -> Result<Cart, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_owner() -> OwnerId {
    OwnerId::new("crio-user@gmail.com")
}

pub fn product_costing(cost: i64) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        "Tan Leatherette Weekender Duffle".to_string(),
        "Fashion".to_string(),
        BigDecimal::from(cost),
        4,
        "https://crio-directus-assets.s3.ap-south-1.amazonaws.com/ff071a1c-1099-48f9-9b03-f858ccc53832.png".to_string(),
    )
}

/// A stored cart holding `quantity` of each product.
pub fn stored_cart(lines: &[(Product, u32)], version: i64) -> Cart {
    let mut cart = Cart::new(test_owner());
    cart.items = lines
        .iter()
        .map(|(product, quantity)| CartItem {
            product: product.clone(),
            quantity: *quantity,
        })
        .collect();
    cart.version = version;
    cart
}

/// Mimics the repository bumping the version on a successful save.
pub fn saved(cart: &Cart) -> Cart {
    let mut next = cart.clone();
    next.version += 1;
    next
}
