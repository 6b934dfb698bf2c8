//! Runtime configuration read from the environment.

use std::time::Duration;
use thiserror::Error;

use crate::{Points, seed};

pub const POINTS_VAR: &str = "TIER_ENG_POINTS";
pub const TIER_VAR: &str = "TIER_ENG_TIER";
pub const WALLET_VAR: &str = "TIER_ENG_WALLET";
pub const LATENCY_VAR: &str = "TIER_ENG_LATENCY_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Member seed and simulated backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_points: Points,
    pub seed_tier: String,
    pub wallet_id: String,
    pub latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_points: seed::SEED_POINTS,
            seed_tier: seed::SEED_TIER.to_string(),
            wallet_id: seed::SEED_WALLET.to_string(),
            latency: Duration::ZERO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(POINTS_VAR) {
            config.seed_points = Points::new(parse_u64(POINTS_VAR, &value)?);
        }
        if let Some(value) = lookup(TIER_VAR) {
            config.seed_tier = value.trim().to_string();
        }
        if let Some(value) = lookup(WALLET_VAR) {
            config.wallet_id = value.trim().to_string();
        }
        if let Some(value) = lookup(LATENCY_VAR) {
            config.latency = Duration::from_millis(parse_u64(LATENCY_VAR, &value)?);
        }

        Ok(config)
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
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
    fn defaults_match_seed_member() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seed_points, Points::new(98));
        assert_eq!(config.seed_tier, "general");
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            (POINTS_VAR, "450"),
            (TIER_VAR, " gold "),
            (WALLET_VAR, "NO.1"),
            (LATENCY_VAR, "1500"),
        ]))
        .unwrap();

        assert_eq!(config.seed_points, Points::new(450));
        assert_eq!(config.seed_tier, "gold");
        assert_eq!(config.wallet_id, "NO.1");
        assert_eq!(config.latency, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_negative_points() {
        let err = Config::from_lookup(lookup(&[(POINTS_VAR, "-5")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: POINTS_VAR,
                value: "-5".to_string()
            }
        );
    }

    #[test]
    fn rejects_garbage_latency() {
        assert!(Config::from_lookup(lookup(&[(LATENCY_VAR, "soon")])).is_err());
    }
}
