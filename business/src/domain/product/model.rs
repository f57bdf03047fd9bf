use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog product. The catalog is read-only from the cart's point of view;
/// a cart item keeps its own copy taken when the item was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub cost: BigDecimal,
    pub rating: u8,
    pub image: String,
}

impl Product {
    /// Constructor for data already persisted in the catalog (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        category: String,
        cost: BigDecimal,
        rating: u8,
        image: String,
    ) -> Self {
        Self {
            id,
            name,
            category,
            cost,
            rating,
            image,
        }
    }
}
