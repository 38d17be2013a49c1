//! Configuration schema definitions.
//!
//! The complete runtime configuration of the service. Everything here is
//! resolved once at startup (see `loader`) and immutable afterwards.

use std::fmt;

/// Greeting returned by `GET /` when `APP_GREETING` is unset.
pub const DEFAULT_GREETING: &str = "Hello from the User API!";

/// Sentinel for an unconfigured API key.
///
/// Never empty, so "not configured" stays distinguishable from "empty
/// string provided".
pub const API_KEY_UNSET: &str = "not-set";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Deployment environment the service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// Resolve the `NODE_ENV` value.
    ///
    /// Unset or empty resolves to `Development`. Any value other than the
    /// three known names resolves to `Production`, so the authorization
    /// gate fails closed on typos.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "development") => Environment::Development,
            Some("test") => Environment::Test,
            Some(_) => Environment::Production,
        }
    }

    /// Whether the authorization gate enforces the API key.
    pub fn requires_api_key(self) -> bool {
        !matches!(self, Environment::Development | Environment::Test)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        })
    }
}

/// Root configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Greeting served at `GET /`.
    pub greeting: String,

    /// Shared secret checked by the authorization gate.
    pub api_key: String,

    /// Listen port.
    pub port: u16,

    /// Deployment environment.
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            api_key: API_KEY_UNSET.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_env_resolution() {
        assert_eq!(Environment::from_node_env(None), Environment::Development);
        assert_eq!(Environment::from_node_env(Some("")), Environment::Development);
        assert_eq!(
            Environment::from_node_env(Some("development")),
            Environment::Development
        );
        assert_eq!(Environment::from_node_env(Some("test")), Environment::Test);
        assert_eq!(
            Environment::from_node_env(Some("production")),
            Environment::Production
        );
    }

    #[test]
    fn unknown_node_env_fails_closed() {
        assert_eq!(
            Environment::from_node_env(Some("staging")),
            Environment::Production
        );
        assert!(Environment::from_node_env(Some("Production")).requires_api_key());
    }

    #[test]
    fn only_production_requires_api_key() {
        assert!(!Environment::Development.requires_api_key());
        assert!(!Environment::Test.requires_api_key());
        assert!(Environment::Production.requires_api_key());
    }

    #[test]
    fn defaults_use_sentinel_key() {
        let config = AppConfig::default();
        assert_eq!(config.api_key, API_KEY_UNSET);
        assert!(!config.api_key.is_empty());
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
