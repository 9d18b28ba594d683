use std::env;

use super::error::ConfigError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener address
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load the listener address from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: TCP port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            None => DEFAULT_PORT,
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "SERVICE_PORT",
                    value,
                })?,
        };

        Ok(Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
