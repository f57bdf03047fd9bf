use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::product::model::Product;
use business::domain::shared::value_objects::OwnerId;

/// Columns selected by every cart query.
pub const CART_COLUMNS: &str = "owner_email, items, version, created_at, updated_at";

/// Product copy embedded in a cart line of the `items` document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub cost: BigDecimal,
    pub rating: u8,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDocument {
    pub product: ProductDocument,
    pub quantity: u32,
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub owner_email: String,
    pub items: Json<Vec<CartItemDocument>>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            OwnerId::new(self.owner_email),
            self.items.0.into_iter().map(CartItem::from).collect(),
            self.version,
            self.created_at,
            self.updated_at,
        )
    }
}

impl From<CartItemDocument> for CartItem {
    fn from(doc: CartItemDocument) -> Self {
        let p = doc.product;
        CartItem {
            product: Product::from_repository(p.id, p.name, p.category, p.cost, p.rating, p.image),
            quantity: doc.quantity,
        }
    }
}

impl From<&CartItem> for CartItemDocument {
    fn from(item: &CartItem) -> Self {
        let p = &item.product;
        Self {
            product: ProductDocument {
                id: p.id,
                name: p.name.clone(),
                category: p.category.clone(),
                cost: p.cost.clone(),
                rating: p.rating,
                image: p.image.clone(),
            },
            quantity: item.quantity,
        }
    }
}

/// The `items` document for a cart, ready to bind.
pub fn items_document(cart: &Cart) -> Json<Vec<CartItemDocument>> {
    Json(cart.items.iter().map(CartItemDocument::from).collect())
}
