//! Game configuration.
//!
//! `GameConfig` holds every numeric rule of the game: capacities, the mana
//! curve, draft sizes and the fatigue schedule. It is `Copy` so each
//! `GameState` carries its own rules without sharing.
//!
//! ```
//! use rust_locm::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_draft_turns(10)
//!     .with_starting_health(20);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.deck_size(), 10);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerOrder;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Health each player starts the battle with.
    pub starting_health: i32,

    /// Maximum cards held in hand.
    pub hand_capacity: usize,

    /// Maximum creatures per lane.
    pub lane_capacity: usize,

    /// Upper bound for `base_mana`.
    pub mana_cap: i32,

    /// Number of draft turns. Each player picks once per turn, so this is
    /// also the deck size.
    pub draft_turns: u32,

    /// Templates offered per draft turn.
    pub draft_choices: usize,

    /// Cards drawn before the first battle turn, per seat.
    pub opening_hand: [usize; 2],

    /// Health distance between runes.
    pub rune_step: i32,

    /// Battle turn after which decks are emptied at turn start.
    pub turn_limit: u32,

    /// Number of templates generated for the card pool.
    pub card_pool_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            hand_capacity: 8,
            lane_capacity: 3,
            mana_cap: 12,
            draft_turns: 30,
            draft_choices: 3,
            opening_hand: [4, 5],
            rune_step: 5,
            turn_limit: 50,
            card_pool_size: 160,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_lane_capacity(mut self, capacity: usize) -> Self {
        self.lane_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_mana_cap(mut self, cap: i32) -> Self {
        self.mana_cap = cap;
        self
    }

    #[must_use]
    pub fn with_draft_turns(mut self, turns: u32) -> Self {
        self.draft_turns = turns;
        self
    }

    #[must_use]
    pub fn with_draft_choices(mut self, choices: usize) -> Self {
        self.draft_choices = choices;
        self
    }

    #[must_use]
    pub fn with_opening_hand(mut self, first: usize, second: usize) -> Self {
        self.opening_hand = [first, second];
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    #[must_use]
    pub fn with_card_pool_size(mut self, size: usize) -> Self {
        self.card_pool_size = size;
        self
    }

    /// Cards in each deck once the draft is over.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.draft_turns as usize
    }

    /// Opening hand size for a seat.
    #[must_use]
    pub fn opening_hand_for(&self, player: PlayerOrder) -> usize {
        self.opening_hand[player.index()]
    }

    /// First rune threshold below starting health.
    #[must_use]
    pub fn first_rune(&self) -> i32 {
        (self.starting_health - self.rune_step).max(0)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health <= 0 {
            return Err(ConfigError::invalid("starting_health", "must be positive"));
        }
        if self.hand_capacity == 0 {
            return Err(ConfigError::invalid("hand_capacity", "must be positive"));
        }
        if self.lane_capacity == 0 {
            return Err(ConfigError::invalid("lane_capacity", "must be positive"));
        }
        if self.mana_cap <= 0 {
            return Err(ConfigError::invalid("mana_cap", "must be positive"));
        }
        if self.draft_turns == 0 {
            return Err(ConfigError::invalid("draft_turns", "must be positive"));
        }
        if self.draft_choices == 0 {
            return Err(ConfigError::invalid("draft_choices", "must be positive"));
        }
        if self.card_pool_size < self.draft_choices {
            return Err(ConfigError::invalid(
                "card_pool_size",
                "must be at least draft_choices",
            ));
        }
        if self.opening_hand.iter().any(|&n| n > self.hand_capacity) {
            return Err(ConfigError::invalid(
                "opening_hand",
                "cannot exceed hand_capacity",
            ));
        }
        if self.opening_hand.iter().any(|&n| n > self.deck_size()) {
            return Err(ConfigError::invalid("opening_hand", "cannot exceed deck size"));
        }
        if self.rune_step <= 0 {
            return Err(ConfigError::invalid("rune_step", "must be positive"));
        }
        Ok(())
    }
}
