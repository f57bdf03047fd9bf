use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::OwnerId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::db::database_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
    /// Sentinel the user store writes for accounts without a shipping address.
    default_address: String,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool, default_address: String) -> Self {
        Self {
            pool,
            default_address,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, owner: &OwnerId) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT email, name, wallet_money, address FROM users WHERE email = $1",
        )
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_wallet(&self, owner: &OwnerId) -> Result<BigDecimal, RepositoryError> {
        Ok(self.find_by_email(owner).await?.wallet_money)
    }

    async fn set_wallet(
        &self,
        owner: &OwnerId,
        amount: &BigDecimal,
    ) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("UPDATE users SET wallet_money = $2, updated_at = NOW() WHERE email = $1")
                .bind(owner.as_str())
                .bind(amount)
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn has_non_default_address(&self, owner: &OwnerId) -> Result<bool, RepositoryError> {
        let user = self.find_by_email(owner).await?;
        Ok(user.has_non_default_address(&self.default_address))
    }
}
