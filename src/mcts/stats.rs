//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Rollouts performed.
    pub rollouts: u32,

    /// Nodes whose children were generated.
    pub nodes_expanded: u32,

    /// Playout actions applied during simulation.
    pub playout_actions: u64,

    /// Total time spent in rollouts (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.rollouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average playout length in actions.
    #[must_use]
    pub fn avg_playout_length(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.playout_actions as f64 / self.rollouts as f64
        }
    }
}
