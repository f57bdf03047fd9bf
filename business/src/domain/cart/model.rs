use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::OwnerId;

/// One product line of a cart.
///
/// `product` is the catalog entry as it was when the line was added; later
/// catalog price changes do not affect the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self { product, quantity })
    }

    pub fn line_total(&self) -> BigDecimal {
        self.product.cost.clone() * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub owner: OwnerId,
    pub items: Vec<CartItem>,
    /// Optimistic concurrency token, bumped by the repository on every save.
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(owner: OwnerId) -> Self {
        let now = Utc::now();
        Self {
            owner,
            items: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        owner: OwnerId,
        items: Vec<CartItem>,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner,
            items,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product_id: Uuid) -> bool {
        self.position_of(product_id).is_some()
    }

    fn position_of(&self, product_id: Uuid) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }

    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if self.contains(product.id) {
            return Err(CartError::ProductAlreadyInCart);
        }
        let item = CartItem::new(product, quantity)?;
        self.items.push(item);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Overwrites the quantity of an existing line, keeping its position.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product_id)
            .ok_or(CartError::ProductNotInCart)?;
        item.quantity = quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes a single line; the remaining lines keep their order.
    pub fn remove_item(&mut self, product_id: Uuid) -> Result<CartItem, CartError> {
        let index = self
            .position_of(product_id)
            .ok_or(CartError::ProductNotInCart)?;
        let removed = self.items.remove(index);
        self.updated_at = Utc::now();
        Ok(removed)
    }

    /// Sum of `cost * quantity` over the snapshotted prices.
    pub fn total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }

    /// Same cart with no items, as left behind by a successful checkout.
    pub fn cleared(&self) -> Self {
        Self {
            owner: self.owner.clone(),
            items: Vec::new(),
            version: self.version,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }
}
