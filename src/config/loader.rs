//! Load [`ServerConfig`] from environment variables.

use crate::config::ServerConfig;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const HOST_VAR: &str = "CATALOG_HOST";
pub const PORT_VAR: &str = "CATALOG_PORT";
pub const PRODUCT_LIST_DELAY_VAR: &str = "CATALOG_PRODUCT_LIST_DELAY_MS";
pub const SEED_VAR: &str = "CATALOG_SEED";
pub const STRICT_VALIDATION_VAR: &str = "CATALOG_STRICT_VALIDATION";
pub const BODY_LIMIT_VAR: &str = "CATALOG_BODY_LIMIT_BYTES";

/// Read config from the process environment. Unset variables keep their defaults.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`load_from_env`] with an arbitrary key lookup.
pub fn load_from_lookup<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ServerConfig::default();
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let delay_ms: u64 = parse_var(&get, PRODUCT_LIST_DELAY_VAR)?.unwrap_or(0);
    let strict_validation = match get(STRICT_VALIDATION_VAR) {
        Some(v) => parse_bool(STRICT_VALIDATION_VAR, &v)?,
        None => defaults.strict_validation,
    };

    Ok(ServerConfig {
        host: get(HOST_VAR).unwrap_or(defaults.host),
        port: parse_var(&get, PORT_VAR)?.unwrap_or(defaults.port),
        product_list_delay: Duration::from_millis(delay_ms),
        seed: parse_var(&get, SEED_VAR)?,
        strict_validation,
        body_limit: parse_var(&get, BODY_LIMIT_VAR)?.unwrap_or(defaults.body_limit),
        seed_counts: defaults.seed_counts,
    })
}

fn parse_var<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|v| v.parse().map_err(|_| ConfigError::Invalid { key, value: v }))
        .transpose()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.product_list_delay, Duration::ZERO);
        assert_eq!(config.seed, None);
        assert!(!config.strict_validation);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            (PORT_VAR, "8080"),
            (PRODUCT_LIST_DELAY_VAR, "1000"),
            (SEED_VAR, "42"),
            (STRICT_VALIDATION_VAR, "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.product_list_delay, Duration::from_secs(1));
        assert_eq!(config.seed, Some(42));
        assert!(config.strict_validation);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[(PORT_VAR, "  ")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = load(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for CATALOG_PORT: 'eighty'");
        assert!(load(&[(STRICT_VALIDATION_VAR, "maybe")]).is_err());
    }
}
