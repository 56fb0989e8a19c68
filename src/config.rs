//! Runtime Configuration
//!
//! Defaults can be overridden through environment variables:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FARMOPS_TASK_DURATION_DAYS` | 3 |
//! | `FARMOPS_PROJECTION_YEARS` | 3 |
//! | `FARMOPS_PRICE_GROWTH_PCT` | 5.0 |
//! | `PORT` | 3000 |
//! | `BIND_ADDR` | 0.0.0.0 |
//!
//! Unparseable values fall back to the default with a warning.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::schedule::DEFAULT_TASK_DURATION_DAYS;

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid {}={:?}, using default {}", key, raw, default);
                default
            }
        },
    }
}

fn from_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Planner defaults used by the binaries and HTTP handlers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Work window per task in timeline mode
    pub task_duration_days: u32,
    pub projection_years: u32,
    /// Annual price growth (%)
    pub price_growth_pct: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            task_duration_days: DEFAULT_TASK_DURATION_DAYS,
            projection_years: 3,
            price_growth_pct: 5.0,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(from_env)
    }

    /// Build from any key lookup (environment, test map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut config = Self {
            task_duration_days: parse_or(&lookup, "FARMOPS_TASK_DURATION_DAYS", defaults.task_duration_days),
            projection_years: parse_or(&lookup, "FARMOPS_PROJECTION_YEARS", defaults.projection_years),
            price_growth_pct: parse_or(&lookup, "FARMOPS_PRICE_GROWTH_PCT", defaults.price_growth_pct),
        };

        if config.projection_years == 0 {
            tracing::warn!("FARMOPS_PROJECTION_YEARS must be at least 1, using default");
            config.projection_years = defaults.projection_years;
        }
        if !config.price_growth_pct.is_finite() {
            tracing::warn!("FARMOPS_PRICE_GROWTH_PCT must be finite, using default");
            config.price_growth_pct = defaults.price_growth_pct;
        }
        config
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(from_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
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
    fn test_planner_defaults() {
        let config = PlannerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.task_duration_days, 3);
    }

    #[test]
    fn test_planner_overrides_and_bad_values() {
        let config = PlannerConfig::from_lookup(lookup(&[
            ("FARMOPS_TASK_DURATION_DAYS", "5"),
            ("FARMOPS_PROJECTION_YEARS", "0"),
            ("FARMOPS_PRICE_GROWTH_PCT", "abc"),
        ]));
        assert_eq!(config.task_duration_days, 5);
        assert_eq!(config.projection_years, 3);
        assert_eq!(config.price_growth_pct, 5.0);

        let negative = PlannerConfig::from_lookup(lookup(&[("FARMOPS_PRICE_GROWTH_PCT", "-2.5")]));
        assert_eq!(negative.price_growth_pct, -2.5);
    }

    #[test]
    fn test_server_config() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[])).socket_addr().to_string(),
            "0.0.0.0:3000"
        );
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")]));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");

        let bad = ServerConfig::from_lookup(lookup(&[("PORT", "70000")]));
        assert_eq!(bad.port, 3000);
    }
}
