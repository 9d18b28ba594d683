pub mod app_config;
pub mod checkout_config;
pub mod cors_config;
pub mod error;
pub mod server_config;
