use super::{
    auth_config::AuthConfig, cors_config, server_config::ServerConfig,
    user_store_config::UserStoreConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub user_store: UserStoreConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            user_store: UserStoreConfig::from_env(),
        })
    }
}
