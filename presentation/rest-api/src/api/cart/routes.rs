use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::checkout::{CheckoutCartParams, CheckoutCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::cart::errors::CartError;
use business::domain::shared::value_objects::OwnerId;

use crate::api::cart::dto::{CartProductRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    checkout_use_case: Arc<dyn CheckoutCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
        checkout_use_case: Arc<dyn CheckoutCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_product_use_case,
            update_quantity_use_case,
            remove_product_use_case,
            checkout_use_case,
        }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("cart.invalid_product_id"))
}

/// Mutating operations share the same error statuses.
fn mutation_response(result: Result<Cart, CartError>) -> CartMutationResponse {
    match result {
        Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                400 => CartMutationResponse::BadRequest(json),
                404 => CartMutationResponse::NotFound(json),
                409 => CartMutationResponse::Conflict(json),
                _ => CartMutationResponse::InternalError(json),
            }
        }
    }
}

/// Shopping cart API
///
/// Every endpoint acts on the cart of the authenticated user.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/v1/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: JwtBearer) -> GetCartResponse {
        let params = GetCartParams {
            owner: OwnerId::new(auth.0),
        };

        match self.get_use_case.execute(params).await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Creates the cart on the first add. Fails if the product is unknown or
    /// already in the cart.
    #[oai(path = "/v1/cart", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(
        &self,
        auth: JwtBearer,
        body: Json<CartProductRequest>,
    ) -> CartMutationResponse {
        let product_id = match parse_product_id(&body.0.product_id) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        let params = AddProductToCartParams {
            owner: OwnerId::new(auth.0),
            product_id,
            quantity: body.0.quantity,
        };

        mutation_response(self.add_product_use_case.execute(params).await)
    }

    /// Change a product's quantity
    ///
    /// A quantity of 0 removes the product from the cart.
    #[oai(path = "/v1/cart", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        auth: JwtBearer,
        body: Json<CartProductRequest>,
    ) -> CartMutationResponse {
        let product_id = match parse_product_id(&body.0.product_id) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };
        let owner = OwnerId::new(auth.0);

        let result = if body.0.quantity == 0 {
            self.remove_product_use_case
                .execute(RemoveProductFromCartParams { owner, product_id })
                .await
        } else {
            self.update_quantity_use_case
                .execute(UpdateCartQuantityParams {
                    owner,
                    product_id,
                    quantity: body.0.quantity,
                })
                .await
        };

        mutation_response(result)
    }

    /// Remove a product from the cart
    #[oai(path = "/v1/cart/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_product(&self, auth: JwtBearer, product_id: Path<String>) -> CartMutationResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        let params = RemoveProductFromCartParams {
            owner: OwnerId::new(auth.0),
            product_id,
        };

        mutation_response(self.remove_product_use_case.execute(params).await)
    }

    /// Check out the cart
    ///
    /// Debits the cart total from the wallet and empties the cart. Requires a
    /// shipping address and enough wallet balance.
    #[oai(path = "/v1/cart/checkout", method = "put", tag = "ApiTags::Cart")]
    async fn checkout(&self, auth: JwtBearer) -> CartMutationResponse {
        let params = CheckoutCartParams {
            owner: OwnerId::new(auth.0),
        };

        mutation_response(self.checkout_use_case.execute(params).await)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
