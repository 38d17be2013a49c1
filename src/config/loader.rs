//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;

use crate::config::schema::{AppConfig, Environment, API_KEY_UNSET, DEFAULT_GREETING, DEFAULT_PORT};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Resolve the configuration from environment variables.
///
/// | Variable       | Default                |
/// |----------------|------------------------|
/// | `NODE_ENV`     | `development`          |
/// | `APP_GREETING` | the built-in greeting  |
/// | `API_KEY`      | the `not-set` sentinel |
/// | `PORT`         | 8000                   |
///
/// A non-numeric `PORT` is a startup error; every other variable falls back
/// to its default.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_node_env(env::var("NODE_ENV").ok().as_deref());
    let greeting = env::var("APP_GREETING").unwrap_or_else(|_| DEFAULT_GREETING.to_string());
    let api_key = env::var("API_KEY").unwrap_or_else(|_| API_KEY_UNSET.to_string());
    let port = match env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
        Err(_) => DEFAULT_PORT,
    };

    Ok(AppConfig {
        greeting,
        api_key,
        port,
        environment,
    })
}
