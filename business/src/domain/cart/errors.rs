use crate::domain::errors::RepositoryError;

/// Broad classes of cart failures, used by callers to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartErrorKind {
    NotFound,
    InvalidRequest,
    Conflict,
    Internal,
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("User does not have a cart")]
    NotFound,
    #[error("Cart is not present for the user")]
    CheckoutCartMissing,
    #[error("User does not have a cart. Use POST to create cart and add a product")]
    NoCartToModify,
    #[error("Product doesn't exist in database")]
    ProductNotInCatalog,
    #[error("Product already in cart. Use the cart sidebar to update or remove product from cart")]
    ProductAlreadyInCart,
    #[error("Product not in cart")]
    ProductNotInCart,
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
    #[error("User's cart does not have any products")]
    EmptyCart,
    #[error("User must specify a valid address")]
    AddressRequired,
    #[error("Wallet balance is insufficient")]
    InsufficientBalance,
    #[error("User account not found")]
    UserNotFound,
    #[error("Cart was modified by another request, retry the operation")]
    Conflict,
    #[error("Cart creation failed")]
    CreationFailed(#[source] RepositoryError),
    #[error("Internal storage failure")]
    Repository(#[source] RepositoryError),
}

impl CartError {
    pub fn kind(&self) -> CartErrorKind {
        match self {
            CartError::NotFound | CartError::CheckoutCartMissing | CartError::UserNotFound => {
                CartErrorKind::NotFound
            }
            CartError::NoCartToModify
            | CartError::ProductNotInCatalog
            | CartError::ProductAlreadyInCart
            | CartError::ProductNotInCart
            | CartError::InvalidQuantity
            | CartError::EmptyCart
            | CartError::AddressRequired
            | CartError::InsufficientBalance => CartErrorKind::InvalidRequest,
            CartError::Conflict => CartErrorKind::Conflict,
            CartError::CreationFailed(_) | CartError::Repository(_) => CartErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for CartError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict => CartError::Conflict,
            other => CartError::Repository(other),
        }
    }
}
