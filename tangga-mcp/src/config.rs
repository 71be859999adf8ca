//! Server configuration from environment variables
//!
//! - `TANGGA_SEED`: fixed RNG seed for reproducible quizzes
//! - `TANGGA_DECIMALS`: decimal places in rendered numbers (default 4)
//! - `TANGGA_MAX_SESSIONS`: live quiz sessions kept before the oldest is evicted (default 1024)
//! - `RUST_LOG`: log filter, read by the logging module

use std::env;
use tracing::warn;

pub const DEFAULT_DECIMALS: usize = 4;
pub const MAX_DECIMALS: usize = 12;
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub seed: Option<u64>,
    pub decimals: usize,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            seed: None,
            decimals: DEFAULT_DECIMALS,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; malformed values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ServerConfig::default();

        if let Some(raw) = lookup("TANGGA_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warn!(value = %raw, "ignoring malformed TANGGA_SEED"),
            }
        }

        if let Some(raw) = lookup("TANGGA_DECIMALS") {
            match raw.trim().parse::<usize>() {
                Ok(d) => config.decimals = d.min(MAX_DECIMALS),
                Err(_) => warn!(value = %raw, "ignoring malformed TANGGA_DECIMALS"),
            }
        }

        if let Some(raw) = lookup("TANGGA_MAX_SESSIONS") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_sessions = n,
                _ => warn!(value = %raw, "ignoring malformed TANGGA_MAX_SESSIONS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig { seed: None, decimals: 4, max_sessions: 1024 });
    }

    #[test]
    fn test_reads_values() {
        let config = ServerConfig::from_lookup(lookup(&[("TANGGA_SEED", "99"), ("TANGGA_DECIMALS", "2")]));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_reads_max_sessions() {
        let config = ServerConfig::from_lookup(lookup(&[("TANGGA_MAX_SESSIONS", "16")]));
        assert_eq!(config.max_sessions, 16);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TANGGA_SEED", "abc"),
            ("TANGGA_DECIMALS", "-1"),
            ("TANGGA_MAX_SESSIONS", "0"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_decimals_clamped() {
        let config = ServerConfig::from_lookup(lookup(&[("TANGGA_DECIMALS", "40")]));
        assert_eq!(config.decimals, MAX_DECIMALS);
    }
}
