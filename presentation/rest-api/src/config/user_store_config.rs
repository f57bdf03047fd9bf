use std::env;

pub const DEFAULT_ADDRESS_SENTINEL: &str = "ADDRESS_NOT_SET";

/// How the user store marks accounts that never set a shipping address.
#[derive(Debug, Clone)]
pub struct UserStoreConfig {
    pub default_address: String,
}

impl UserStoreConfig {
    /// Environment variables:
    /// - DEFAULT_ADDRESS: address sentinel (default: "ADDRESS_NOT_SET")
    pub fn from_env() -> Self {
        let default_address = env::var("DEFAULT_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS_SENTINEL.to_string());

        Self { default_address }
    }
}
