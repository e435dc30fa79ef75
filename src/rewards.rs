//! Reward shaping over game states.
//!
//! Rewards are scalar scores of a state from one seat's point of view.
//! They are independent of the search, which only uses win/loss.

use crate::core::{ConfigError, GameState, PlayerOrder};

/// Scores a state for one player.
pub trait RewardFunction {
    fn calculate(&self, state: &GameState, for_player: PlayerOrder) -> f64;

    /// Name accepted by `parse_reward`.
    fn name(&self) -> &'static str;
}

/// +1 for a win, -1 for a loss, 0 while the game is running.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinLoss;

impl RewardFunction for WinLoss {
    fn calculate(&self, state: &GameState, for_player: PlayerOrder) -> f64 {
        match state.winner {
            Some(winner) if winner == for_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn name(&self) -> &'static str {
        "win-loss"
    }
}

/// Own health as a fraction of starting health.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerHealth;

impl RewardFunction for PlayerHealth {
    fn calculate(&self, state: &GameState, for_player: PlayerOrder) -> f64 {
        f64::from(state.players[for_player].health) / f64::from(state.config.starting_health)
    }

    fn name(&self) -> &'static str {
        "player-health"
    }
}

/// Negated opponent health as a fraction of starting health, floored at 0 health.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpponentHealth;

impl RewardFunction for OpponentHealth {
    fn calculate(&self, state: &GameState, for_player: PlayerOrder) -> f64 {
        let health = state.players[for_player.opposing()].health.max(0);
        -f64::from(health) / f64::from(state.config.starting_health)
    }

    fn name(&self) -> &'static str {
        "opponent-health"
    }
}

/// Look up a reward function by name.
///
/// Case-insensitive; spaces count as dashes, so "Win Loss" and "win-loss"
/// are the same.
pub fn parse_reward(name: &str) -> Result<Box<dyn RewardFunction>, ConfigError> {
    match name.to_lowercase().replace(' ', "-").as_str() {
        "win-loss" => Ok(Box::new(WinLoss)),
        "player-health" => Ok(Box::new(PlayerHealth)),
        "opponent-health" => Ok(Box::new(OpponentHealth)),
        _ => Err(ConfigError::invalid(
            "reward",
            format!("unknown reward function `{}`", name),
        )),
    }
}
