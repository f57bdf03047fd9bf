use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::product::model::Product;

fn amount(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartProductRequest {
    /// Catalog product identifier
    pub product_id: String,
    /// Units of the product; on update, 0 removes the product from the cart
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price recorded when the product was added to the cart
    pub cost: f64,
    pub rating: u8,
    pub image: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category,
            cost: amount(&product.cost),
            rating: product.rating,
            image: product.image,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    /// cost × quantity
    pub line_total: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        let line_total = amount(&item.line_total());
        Self {
            product: item.product.into(),
            quantity: item.quantity,
            line_total,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    /// Owner's email
    pub email: String,
    /// Lines in the order they were added
    pub cart_items: Vec<CartItemResponse>,
    /// Sum of all line totals
    pub total: f64,
    /// Concurrency version of the stored cart
    pub version: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = amount(&cart.total());
        Self {
            email: cart.owner.to_string(),
            cart_items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total,
            version: cart.version,
            updated_at: cart.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::OwnerId;
    use uuid::Uuid;

    fn product(cost: &str) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            "Pearl Onyx Necklace".to_string(),
            "Fashion".to_string(),
            cost.parse().unwrap(),
            3,
            "https://i.imgur.com/necklace.png".to_string(),
        )
    }

    #[test]
    fn should_expose_line_totals_and_cart_total() {
        let mut cart = Cart::new(OwnerId::new("crio-user@gmail.com"));
        cart.add_item(product("30"), 2).unwrap();
        cart.add_item(product("20.5"), 1).unwrap();

        let response = CartResponse::from(cart);

        assert_eq!(response.email, "crio-user@gmail.com");
        assert_eq!(response.cart_items.len(), 2);
        assert_eq!(response.cart_items[0].line_total, 60.0);
        assert_eq!(response.cart_items[1].product.cost, 20.5);
        assert_eq!(response.total, 80.5);
    }

    #[test]
    fn should_expose_empty_cart_after_checkout() {
        let cart = Cart::new(OwnerId::new("crio-user@gmail.com"));

        let response = CartResponse::from(cart);

        assert!(response.cart_items.is_empty());
        assert_eq!(response.total, 0.0);
    }
}
