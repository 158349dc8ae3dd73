use std::env;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PRODUCT_SERVICE_TIMEOUT_SECS: u64 = 10;

/// Errors raised while reading the server configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("{name} has invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the discount service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the product service, e.g. `https://host/app/products`.
    pub product_service_url: String,
    pub product_service_timeout: Duration,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let address = lookup("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        // An unparsable port falls back to the default, like the other services.
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let product_service_url = lookup("PRODUCT_SERVICE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("PRODUCT_SERVICE_URL"))?;

        let timeout_secs = match lookup("PRODUCT_SERVICE_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "PRODUCT_SERVICE_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_PRODUCT_SERVICE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            address,
            port,
            product_service_url,
            product_service_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
