use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::OwnerId;

use super::entity::{CART_COLUMNS, CartEntity, items_document};
use crate::db::database_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_by_owner(&self, owner: &OwnerId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE owner_email = $1"
        ))
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, owner: &OwnerId) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            r#"INSERT INTO carts (owner_email, items, version, created_at, updated_at)
            VALUES ($1, '[]'::jsonb, 0, $2, $2)
            ON CONFLICT (owner_email) DO NOTHING
            RETURNING {CART_COLUMNS}"#
        ))
        .bind(owner.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::Duplicated)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, cart: &Cart) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            r#"UPDATE carts
            SET items = $3, version = version + 1, updated_at = $4
            WHERE owner_email = $1 AND version = $2
            RETURNING {CART_COLUMNS}"#
        ))
        .bind(cart.owner.as_str())
        .bind(cart.version)
        .bind(items_document(cart))
        .bind(cart.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::Conflict)?;

        Ok(entity.into_domain())
    }
}
