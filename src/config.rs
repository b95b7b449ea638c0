//! Configuration for biblia
//!
//! All runtime configuration is environment-sourced; nothing is hardcoded at
//! the call sites. Constants here carry the defaults and the environment
//! variable names that override them.

use std::time::Duration;

/// Default listener port for the proxy server
pub const DEFAULT_PORT: u16 = 5000;

/// Environment variable for overriding the listener port
pub const PORT_ENV_VAR: &str = "PORT";

/// Default base URL of the upstream Bible provider
pub const DEFAULT_BASE_URL: &str = "https://api.biblia.com/v1/bible";

/// Environment variable for overriding the upstream base URL
pub const BASE_URL_ENV_VAR: &str = "BIBLIA_BASE_URL";

/// Environment variable supplying the upstream API key
pub const API_KEY_ENV_VAR: &str = "BIBLIA_API_KEY";

/// Default timeout for outbound HTTP calls, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable for overriding the outbound HTTP timeout
pub const TIMEOUT_ENV_VAR: &str = "BIBLIA_TIMEOUT_SECS";

/// Get the listener port, falling back to the default when the variable is
/// unset or not a valid port number
pub fn get_port() -> u16 {
    std::env::var(PORT_ENV_VAR)
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get the upstream base URL, checking the environment first
pub fn get_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Get the upstream API key; empty when not configured
pub fn get_api_key() -> String {
    std::env::var(API_KEY_ENV_VAR).unwrap_or_default()
}

/// Get the outbound HTTP timeout, falling back to the default when unset or
/// unparseable
pub fn get_timeout() -> Duration {
    let secs = std::env::var(TIMEOUT_ENV_VAR)
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Resolved runtime configuration shared by the client service and the
/// proxy server
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream Bible provider
    pub base_url: String,
    /// Upstream API key; empty when not configured
    pub api_key: String,
    /// Proxy server listener port
    pub port: u16,
    /// Timeout applied to every outbound HTTP call
    pub timeout: Duration,
}

impl Config {
    /// Build a configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            base_url: get_base_url(),
            api_key: get_api_key(),
            port: get_port(),
            timeout: get_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(DEFAULT_PORT, 5000);
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://api.biblia.com/v1/bible");
    }

    // Single test so parallel runners never race on the PORT variable
    #[test]
    fn test_get_port_env_handling() {
        // Save current env var state
        let original = std::env::var_os(PORT_ENV_VAR);

        std::env::remove_var(PORT_ENV_VAR);
        assert_eq!(get_port(), DEFAULT_PORT);

        std::env::set_var(PORT_ENV_VAR, "8080");
        assert_eq!(get_port(), 8080);

        std::env::set_var(PORT_ENV_VAR, "not-a-port");
        assert_eq!(get_port(), DEFAULT_PORT);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(PORT_ENV_VAR, val),
            None => std::env::remove_var(PORT_ENV_VAR),
        }
    }

    #[test]
    fn test_get_base_url_env_override() {
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        std::env::set_var(BASE_URL_ENV_VAR, "http://localhost:9999/bible");
        assert_eq!(get_base_url(), "http://localhost:9999/bible");

        match original {
            Some(val) => std::env::set_var(BASE_URL_ENV_VAR, val),
            None => std::env::remove_var(BASE_URL_ENV_VAR),
        }
    }

    #[test]
    fn test_get_timeout_default() {
        let original = std::env::var_os(TIMEOUT_ENV_VAR);

        std::env::remove_var(TIMEOUT_ENV_VAR);
        assert_eq!(get_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        if let Some(val) = original {
            std::env::set_var(TIMEOUT_ENV_VAR, val);
        }
    }
}
