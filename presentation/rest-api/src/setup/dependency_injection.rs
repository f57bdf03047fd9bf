use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::checkout::ledger::CheckoutLedgerPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::checkout::CheckoutCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;

use crate::config::user_store_config::UserStoreConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, user_store: &UserStoreConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(
            pool.clone(),
            user_store.default_address.clone(),
        ));
        let ledger = Arc::new(CheckoutLedgerPostgres::new(pool));

        // Cart use cases
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutCartUseCaseImpl {
            repository: cart_repository,
            user_repository,
            ledger,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
            checkout_use_case,
        );

        Self {
            health_api,
            cart_api,
        }
    }
}
