//! Environment-driven configuration.

use thiserror::Error;

use pizzeria_core::DomainError;
use pizzeria_orders::{CreationStrategy, LoopConfig, StrategyKind};
use pizzeria_products::Region;

pub const REGION_VAR: &str = "PIZZERIA_REGION";
pub const STRATEGY_VAR: &str = "PIZZERIA_STRATEGY";
pub const MAX_FAILURES_VAR: &str = "PIZZERIA_MAX_FAILURES";
pub const STOP_TOKEN_VAR: &str = "PIZZERIA_STOP_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{var}: expected a non-negative integer, got {value:?}")]
    NotANumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` starts the abstract-factory strategy without a family.
    pub region: Option<Region>,
    pub strategy: StrategyKind,
    pub loop_config: LoopConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: Some(Region::Beijing),
            strategy: StrategyKind::AbstractFactory,
            loop_config: LoopConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from any variable source; unset variables keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        match lookup(REGION_VAR) {
            Some(value) if value.trim().eq_ignore_ascii_case("none") => config.region = None,
            Some(value) => {
                config.region = Some(value.parse::<Region>().map_err(|source| ConfigError::Invalid {
                    var: REGION_VAR,
                    source,
                })?);
            }
            None => tracing::info!("{REGION_VAR} not set; defaulting to Beijing"),
        }

        if let Some(value) = lookup(STRATEGY_VAR) {
            config.strategy = value.parse::<StrategyKind>().map_err(|source| ConfigError::Invalid {
                var: STRATEGY_VAR,
                source,
            })?;
        }

        if let Some(value) = lookup(MAX_FAILURES_VAR) {
            let max: u32 = value.trim().parse().map_err(|_| ConfigError::NotANumber {
                var: MAX_FAILURES_VAR,
                value: value.clone(),
            })?;
            // 0 disables the limit.
            config.loop_config.max_consecutive_failures = (max > 0).then_some(max);
        }

        if let Some(value) = lookup(STOP_TOKEN_VAR) {
            config.loop_config = config.loop_config.with_stop_token(value);
        }

        Ok(config)
    }

    pub fn build_strategy(&self) -> Result<Box<dyn CreationStrategy>, ConfigError> {
        self.strategy
            .build(self.region)
            .map_err(|source| ConfigError::Invalid {
                var: STRATEGY_VAR,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_abstract_factory_in_beijing() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.region, Some(Region::Beijing));
        assert_eq!(config.strategy, StrategyKind::AbstractFactory);
        assert_eq!(config.loop_config.max_consecutive_failures, Some(3));
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup(&[
            (REGION_VAR, "LD"),
            (STRATEGY_VAR, "factory-method"),
            (MAX_FAILURES_VAR, "5"),
            (STOP_TOKEN_VAR, "quit"),
        ]))
        .unwrap();

        assert_eq!(config.region, Some(Region::London));
        assert_eq!(config.strategy, StrategyKind::FactoryMethod);
        assert_eq!(config.loop_config.max_consecutive_failures, Some(5));
        assert!(config.loop_config.stop_tokens.contains(&"quit".to_string()));
        assert!(config.loop_config.stop_tokens.contains(&"stop".to_string()));
    }

    #[test]
    fn zero_disables_the_failure_limit() {
        let config = Config::from_lookup(lookup(&[(MAX_FAILURES_VAR, "0")])).unwrap();
        assert_eq!(config.loop_config.max_consecutive_failures, None);
    }

    #[test]
    fn none_region_leaves_the_family_unset() {
        let config = Config::from_lookup(lookup(&[(REGION_VAR, "none")])).unwrap();
        assert_eq!(config.region, None);
        let strategy = config.build_strategy().unwrap();
        assert_eq!(strategy.region(), None);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[(REGION_VAR, "paris")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: REGION_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(STRATEGY_VAR, "builder")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: STRATEGY_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(MAX_FAILURES_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::NotANumber { .. }));
    }

    #[test]
    fn only_abstract_factory_builds_without_a_region() {
        let config = Config::from_lookup(lookup(&[
            (REGION_VAR, "none"),
            (STRATEGY_VAR, "factory-method"),
        ]))
        .unwrap();
        assert!(config.build_strategy().is_err());

        let config = Config::from_lookup(lookup(&[
            (REGION_VAR, "classic"),
            (STRATEGY_VAR, "factory-method"),
        ]))
        .unwrap();
        assert!(config.build_strategy().is_ok());
    }
}
