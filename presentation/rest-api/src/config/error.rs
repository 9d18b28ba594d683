#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {var}={value}")]
    InvalidValue { var: &'static str, value: String },
}
