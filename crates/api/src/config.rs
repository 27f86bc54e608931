//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - `MongoDB` connection string. Presence is checked at
//!   startup; the URL itself is only validated by the driver.
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 8000)
//! - `DATABASE_NAME` - Database name used when the connection string names no
//!   default database (default: `vic_signature`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `RUST_LOG` - Tracing filter (default: `vic_signature_api=info,tower_http=debug`)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_DATABASE_NAME: &str = "vic_signature";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `MongoDB` connection URL (may contain credentials)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Database name fallback when the URL names no default database
    pub database_name: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_URL` is missing or if `HOST`/`PORT`
    /// fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_required_env("DATABASE_URL").map(SecretString::from)?;
        let host = parse_host(&get_env_or_default("HOST", DEFAULT_HOST))?;
        let port = parse_port(&get_env_or_default("PORT", DEFAULT_PORT))?;
        let database_name = get_env_or_default("DATABASE_NAME", DEFAULT_DATABASE_NAME);
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            database_name,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a bind address.
fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    raw.parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))
}

/// Parse a listen port.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_valid() {
        assert_eq!(
            parse_host("0.0.0.0").unwrap(),
            "0.0.0.0".parse::<IpAddr>().unwrap()
        );
        assert_eq!(
            parse_host("::1").unwrap(),
            "::1".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_parse_host_invalid() {
        let err = parse_host("not-an-ip").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "HOST"));
    }

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("8000").unwrap(), 8000);
    }

    #[test]
    fn test_parse_port_invalid() {
        assert!(parse_port("eight thousand").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_defaults_parse() {
        // The compiled-in defaults must always round-trip.
        assert!(parse_host(DEFAULT_HOST).is_ok());
        assert_eq!(parse_port(DEFAULT_PORT).unwrap(), 8000);
    }

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: SecretString::from("mongodb://localhost:27017/vic_signature"),
            host: "0.0.0.0".parse().unwrap(),
            port: 8000,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8000);
    }
}
