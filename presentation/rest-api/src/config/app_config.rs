use super::{
    checkout_config::CheckoutConfig, cors_config, error::ConfigError, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            checkout: CheckoutConfig::from_env()?,
        })
    }
}
