use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {} in cart of {}",
            params.product_id, params.quantity, params.owner
        ));

        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut cart = self
            .repository
            .get_by_owner(&params.owner)
            .await?
            .ok_or(CartError::NoCartToModify)?;

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotInCatalog,
                other => CartError::Repository(other),
            })?;

        cart.set_quantity(params.product_id, params.quantity)?;
        let saved = self.repository.save(&cart).await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Product;
    use crate::test_support::{
        MockCartRepo, MockProductRepo, mock_logger, product_costing, saved, stored_cart,
        test_owner,
    };
    use uuid::Uuid;

    fn catalog_with(product: Product) -> MockProductRepo {
        let mut mock = MockProductRepo::new();
        mock.expect_get_by_id()
            .returning(move |_| Ok(product.clone()));
        mock
    }

    fn use_case(repo: MockCartRepo, products: MockProductRepo) -> UpdateCartQuantityUseCaseImpl {
        UpdateCartQuantityUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_overwrite_quantity_and_keep_item_count() {
        let first = product_costing(10);
        let second = product_costing(25);
        let target = second.id;
        let existing = stored_cart(&[(first.clone(), 1), (second.clone(), 1)], 5);
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_owner()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|cart| Ok(saved(cart)));

        let cart = use_case(mock_repo, catalog_with(second))
            .execute(UpdateCartQuantityParams {
                owner: test_owner(),
                product_id: target,
                quantity: 6,
            })
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].product.id, first.id);
        assert_eq!(cart.items[1].product.id, target);
        assert_eq!(cart.items[1].quantity, 6);
        assert_eq!(cart.version, 6);
    }

    #[tokio::test]
    async fn should_reject_update_when_owner_has_no_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_by_owner().returning(|_| Ok(None));
        mock_repo.expect_save().never();
        let mut products = MockProductRepo::new();
        products.expect_get_by_id().never();

        let result = use_case(mock_repo, products)
            .execute(UpdateCartQuantityParams {
                owner: test_owner(),
                product_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NoCartToModify));
    }

    #[tokio::test]
    async fn should_reject_update_for_unknown_product() {
        let existing = stored_cart(&[(product_costing(10), 1)], 1);
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_owner()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().never();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(mock_repo, products)
            .execute(UpdateCartQuantityParams {
                owner: test_owner(),
                product_id: Uuid::new_v4(),
                quantity: 2,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::ProductNotInCatalog
        ));
    }

    #[tokio::test]
    async fn should_reject_update_for_product_not_in_cart() {
        let outsider = product_costing(99);
        let outsider_id = outsider.id;
        let existing = stored_cart(&[(product_costing(10), 1)], 1);
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_owner()
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().never();

        let result = use_case(mock_repo, catalog_with(outsider))
            .execute(UpdateCartQuantityParams {
                owner: test_owner(),
                product_id: outsider_id,
                quantity: 2,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotInCart));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_by_owner().never();

        let result = use_case(mock_repo, MockProductRepo::new())
            .execute(UpdateCartQuantityParams {
                owner: test_owner(),
                product_id: Uuid::new_v4(),
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
