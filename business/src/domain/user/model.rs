use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::OwnerId;

#[derive(Debug, Clone)]
pub struct User {
    pub email: OwnerId,
    pub name: String,
    pub wallet_money: BigDecimal,
    pub address: String,
}

impl User {
    pub fn from_repository(
        email: OwnerId,
        name: String,
        wallet_money: BigDecimal,
        address: String,
    ) -> Self {
        Self {
            email,
            name,
            wallet_money,
            address,
        }
    }

    /// `default_address` is the sentinel the user store writes for accounts
    /// that never configured a shipping address.
    pub fn has_non_default_address(&self, default_address: &str) -> bool {
        self.address != default_address
    }
}
