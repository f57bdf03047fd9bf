use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::shared::value_objects::OwnerId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub email: String,
    pub name: String,
    pub wallet_money: BigDecimal,
    pub address: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            OwnerId::new(self.email),
            self.name,
            self.wallet_money,
            self.address,
        )
    }
}
