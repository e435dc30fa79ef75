//! Error types for the rules engine and configuration.
//!
//! `GameError` has two families:
//!
//! - **Progression** (`FullHand`, `EmptyDeck`, `WardShield`): normal play hit
//!   a boundary. Raised by the zone and combat primitives and resolved by the
//!   engine, which reports the outcome as a `GameEvent`.
//! - **Illegal action** (`NotEnoughMana`, `FullLane`, `MalformedAction`): the
//!   caller proposed a move the rules forbid. Returned from `GameState::act`
//!   with the state untouched.

use thiserror::Error;

use super::state::Lane;

/// Which family a `GameError` belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Boundary condition reached by normal game progression.
    Progression,
    /// Invalid move proposed by the caller.
    IllegalAction,
}

/// Rules engine failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("not enough mana: costs {cost}, {mana} available")]
    NotEnoughMana { cost: i32, mana: i32 },

    #[error("{0} lane is full")]
    FullLane(Lane),

    #[error("hand is full")]
    FullHand,

    /// A single failed draw reports one missed draw. The turn start sums
    /// them over all its draws before applying fatigue.
    #[error("deck is empty ({missed_draws} draws missed)")]
    EmptyDeck { missed_draws: u32 },

    #[error("ward shield absorbed the damage")]
    WardShield,

    #[error("malformed action: {0}")]
    MalformedAction(String),
}

impl GameError {
    /// Shorthand for a `MalformedAction` with a formatted reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        GameError::MalformedAction(reason.into())
    }

    /// The family this error belongs to.
    #[must_use]
    pub fn family(&self) -> ErrorFamily {
        match self {
            GameError::FullHand | GameError::EmptyDeck { .. } | GameError::WardShield => {
                ErrorFamily::Progression
            }
            GameError::NotEnoughMana { .. }
            | GameError::FullLane(_)
            | GameError::MalformedAction(_) => ErrorFamily::IllegalAction,
        }
    }

    /// Check if this error was caused by an invalid move.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        self.family() == ErrorFamily::IllegalAction
    }
}

/// Invalid `GameConfig` or `MCTSConfig` value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
