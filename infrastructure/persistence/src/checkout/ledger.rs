use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use sqlx::PgPool;

use business::domain::cart::ledger::CheckoutLedger;
use business::domain::cart::model::Cart;
use business::domain::errors::RepositoryError;

use crate::cart::entity::{CART_COLUMNS, CartEntity};
use crate::db::database_error;

/// Settles a checkout inside one PostgreSQL transaction.
///
/// The wallet debit only applies while the balance still covers the total and
/// the cart clear only applies while the version is unchanged; when either
/// guard misses, the transaction is rolled back.
pub struct CheckoutLedgerPostgres {
    pool: PgPool,
}

impl CheckoutLedgerPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckoutLedger for CheckoutLedgerPostgres {
    async fn settle(&self, cart: &Cart, total: &BigDecimal) -> Result<Cart, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let debit = sqlx::query(
            r#"UPDATE users
            SET wallet_money = wallet_money - $2, updated_at = NOW()
            WHERE email = $1 AND wallet_money >= $2"#,
        )
        .bind(cart.owner.as_str())
        .bind(total)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        if debit.rows_affected() == 0 {
            tx.rollback().await.map_err(database_error)?;
            tracing::warn!(owner = %cart.owner, "Checkout debit guard missed, rolled back");
            return Err(RepositoryError::Conflict);
        }

        let cleared = sqlx::query_as::<_, CartEntity>(&format!(
            r#"UPDATE carts
            SET items = '[]'::jsonb, version = version + 1, updated_at = $3
            WHERE owner_email = $1 AND version = $2
            RETURNING {CART_COLUMNS}"#
        ))
        .bind(cart.owner.as_str())
        .bind(cart.version)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?;

        let Some(cleared) = cleared else {
            tx.rollback().await.map_err(database_error)?;
            tracing::warn!(owner = %cart.owner, "Cart changed during checkout, rolled back");
            return Err(RepositoryError::Conflict);
        };

        tx.commit().await.map_err(database_error)?;
        Ok(cleared.into_domain())
    }
}
