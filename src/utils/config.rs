use crate::utils::helpers::OTP_EXPIRATION_SECONDS;
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be a valid number, got {1:?}")]
    InvalidNumber(&'static str, String),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

/// Server and OTP settings, loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub otp_expiry_seconds: u64,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "localhost".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber("PORT", raw))?,
            None => 8000,
        };

        let otp_expiry_seconds = match lookup("OTP_EXPIRY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber("OTP_EXPIRY_SECONDS", raw))?,
            None => OTP_EXPIRATION_SECONDS,
        };
        if otp_expiry_seconds == 0 {
            return Err(ConfigError::NotPositive("OTP_EXPIRY_SECONDS"));
        }

        Ok(Self {
            host,
            port,
            otp_expiry_seconds,
        })
    }
}
