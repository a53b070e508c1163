//! Error types for Plurprice

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlurpriceError>;

#[derive(Error, Debug)]
pub enum PlurpriceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl PlurpriceError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlurpriceError::Account(_) => 3,
            PlurpriceError::Pricing(_) => 2,
            PlurpriceError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid rate for provider '{provider}': {rate}")]
    InvalidRate { provider: String, rate: f64 },

    #[error("Rate for provider '{0}' is set more than once")]
    DuplicateRate(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Follower count cannot be negative: {0}")]
    InvalidFollowerCount(i64),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("No pricing strategy registered for provider '{0}'")]
    UnknownProvider(String),

    #[error("Pricing strategy already registered for provider '{0}'")]
    DuplicateProvider(String),
}
