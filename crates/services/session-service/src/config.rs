//! Session service configuration.

use std::env;

use clap::ValueEnum;
use common::ServiceConfig;
use domain::HashingParams;

use crate::schema::SchemaBackend;

const SERVICE_NAME: &str = "session-service";

/// Session service configuration.
#[derive(Debug, Clone)]
pub struct SessionServiceConfig {
    /// Name and log level
    pub service: ServiceConfig,
    /// Backend to render schema DDL for
    pub schema_backend: SchemaBackend,
    /// Argon2 costs for newly produced hashes
    pub password_hashing: HashingParams,
}

impl SessionServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let hashing = defaults.password_hashing;

        let log_level = lookup("SESSION_SERVICE_LOG_LEVEL")
            .or_else(|| lookup("LOG_LEVEL"))
            .unwrap_or(defaults.service.log_level);

        let schema_backend = lookup("SESSION_SERVICE_SCHEMA_BACKEND")
            .or_else(|| lookup("DATABASE_BACKEND"))
            .and_then(|v| SchemaBackend::from_str(&v, true).ok())
            .unwrap_or(defaults.schema_backend);

        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            service: ServiceConfig::named(SERVICE_NAME).with_log_level(log_level),
            schema_backend,
            password_hashing: HashingParams {
                memory_kib: parse_u32("PASSWORD_HASH_MEMORY_KIB", hashing.memory_kib),
                iterations: parse_u32("PASSWORD_HASH_ITERATIONS", hashing.iterations),
                parallelism: parse_u32("PASSWORD_HASH_PARALLELISM", hashing.parallelism),
            },
        }
    }
}

impl Default for SessionServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named(SERVICE_NAME),
            schema_backend: SchemaBackend::Postgres,
            password_hashing: HashingParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SessionServiceConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SessionServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.service.service_name, "session-service");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.schema_backend, SchemaBackend::Postgres);
        assert_eq!(config.password_hashing, HashingParams::default());
    }

    #[test]
    fn test_service_prefixed_vars_win() {
        let config = config_from(&[
            ("SESSION_SERVICE_LOG_LEVEL", "debug"),
            ("LOG_LEVEL", "warn"),
            ("SESSION_SERVICE_SCHEMA_BACKEND", "SQLite"),
            ("DATABASE_BACKEND", "mysql"),
        ]);

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.schema_backend, SchemaBackend::Sqlite);
    }

    #[test]
    fn test_generic_vars_used_as_fallback() {
        let config = config_from(&[("LOG_LEVEL", "warn"), ("DATABASE_BACKEND", "mysql")]);

        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.schema_backend, SchemaBackend::Mysql);
    }

    #[test]
    fn test_hashing_params_parsed() {
        let config = config_from(&[
            ("PASSWORD_HASH_MEMORY_KIB", "65536"),
            ("PASSWORD_HASH_ITERATIONS", "3"),
            ("PASSWORD_HASH_PARALLELISM", "not-a-number"),
        ]);

        assert_eq!(config.password_hashing.memory_kib, 65536);
        assert_eq!(config.password_hashing.iterations, 3);
        assert_eq!(
            config.password_hashing.parallelism,
            HashingParams::default().parallelism
        );
    }

    #[test]
    fn test_unknown_backend_falls_back() {
        let config = config_from(&[("DATABASE_BACKEND", "oracle")]);
        assert_eq!(config.schema_backend, SchemaBackend::Postgres);
    }
}
