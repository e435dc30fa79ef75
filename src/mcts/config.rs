//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSConfig {
    /// UCT exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for unexplored-child choice and playout agents.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Rollouts per move when no time budget is set.
    pub rollouts_per_move: u32,

    /// Wall-clock budget per move in milliseconds. Overrides
    /// `rollouts_per_move` when set.
    pub time_budget_ms: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
            rollouts_per_move: 100,
            time_budget_ms: None,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_rollouts(mut self, rollouts: u32) -> Self {
        self.rollouts_per_move = rollouts;
        self
    }

    #[must_use]
    pub fn with_time_budget_ms(mut self, millis: u64) -> Self {
        self.time_budget_ms = Some(millis);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(ConfigError::invalid(
                "exploration_constant",
                "must be finite and non-negative",
            ));
        }
        if self.time_budget_ms.is_none() && self.rollouts_per_move == 0 {
            return Err(ConfigError::invalid(
                "rollouts_per_move",
                "must be positive without a time budget",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.seed, 42);
        assert_eq!(config.time_budget_ms, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_rollouts(50)
            .with_time_budget_ms(20);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.rollouts_per_move, 50);
        assert_eq!(config.time_budget_ms, Some(20));
    }

    #[test]
    fn test_validate() {
        assert!(MCTSConfig::default().with_exploration(-1.0).validate().is_err());
        assert!(MCTSConfig::default().with_exploration(f64::NAN).validate().is_err());
        assert!(MCTSConfig::default().with_rollouts(0).validate().is_err());
        assert!(MCTSConfig::default()
            .with_rollouts(0)
            .with_time_budget_ms(5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let partial: MCTSConfig = serde_json::from_str(r#"{"rollouts_per_move": 7}"#).unwrap();
        assert_eq!(partial.rollouts_per_move, 7);
        assert_eq!(partial.seed, 42);
    }
}
