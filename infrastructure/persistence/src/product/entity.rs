use bigdecimal::BigDecimal;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub cost: BigDecimal,
    pub rating: i16,
    pub image: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        // Ratings are stored on a 0..=5 scale.
        let rating = u8::try_from(self.rating.clamp(0, 5)).unwrap_or_default();
        Product::from_repository(
            self.id,
            self.name,
            self.category,
            self.cost,
            rating,
            self.image,
        )
    }
}
