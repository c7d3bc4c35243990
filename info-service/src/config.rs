//! Configuration management for the info service.
//!
//! Loads configuration from environment variables (and an optional `.env`
//! file), substituting defaults for anything missing or unparsable.

use serde::Serialize;

/// Resolved service configuration. Serialized verbatim by `GET /config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Interface to bind
    pub host: String,

    /// HTTP listen port
    pub port: u16,

    /// Debug mode (raises logging to `debug`)
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Service name reported by `GET /`
    pub service_name: String,

    /// Service version reported by `GET /`
    pub service_version: String,
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_service_name() -> String {
    "devops-info-service".to_string()
}

fn default_service_version() -> String {
    "1.0.0".to_string()
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(default_host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_else(default_port),
            debug: lookup("DEBUG")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(default_service_name),
            service_version: lookup("SERVICE_VERSION").unwrap_or_else(default_service_version),
        }
    }

    /// Level handed to the log filter. Debug mode wins over `log_level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.service_name, "devops-info-service");
        assert_eq!(config.service_version, "1.0.0");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DEBUG", "TRUE"),
            ("LOG_LEVEL", "warn"),
            ("SERVICE_NAME", "status"),
            ("SERVICE_VERSION", "2.3.4"),
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.service_name, "status");
        assert_eq!(config.service_version, "2.3.4");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, 5000);
        assert_eq!(config_from(&[("PORT", "70000")]).port, 5000);
    }

    #[test]
    fn test_debug_only_true_enables() {
        assert!(!config_from(&[("DEBUG", "1")]).debug);
        assert!(!config_from(&[("DEBUG", "yes")]).debug);
        assert!(config_from(&[("DEBUG", "True")]).debug);
    }

    #[test]
    fn test_effective_log_level() {
        assert_eq!(config_from(&[("LOG_LEVEL", "warn")]).effective_log_level(), "warn");
        assert_eq!(
            config_from(&[("LOG_LEVEL", "warn"), ("DEBUG", "true")]).effective_log_level(),
            "debug"
        );
    }

    #[test]
    fn test_serializes_six_fields() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "host": "0.0.0.0",
                "port": 5000,
                "debug": false,
                "log_level": "info",
                "service_name": "devops-info-service",
                "service_version": "1.0.0",
            })
        );
    }
}
