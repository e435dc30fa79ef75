//! # rust-locm
//!
//! A two-player card game engine (a draft followed by a lane battle) with
//! a generic Monte Carlo Tree Search on top.
//!
//! ## Design Principles
//!
//! 1. **Atomic Rules**: `GameState::act` validates everything before it
//!    mutates anything. A rejected action leaves the state untouched.
//!
//! 2. **Cheap Clones**: Decks and the draft queue are persistent `im`
//!    vectors, hands and lanes are inline `SmallVec`s, so the search can
//!    clone states freely.
//!
//! 3. **Determinism**: All randomness flows from seeded `GameRng`s. The same
//!    seeds replay the same games and the same searches.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, state, actions, events, errors, RNG, configuration
//! - `cards`: Card templates, instances and the card pool
//! - `rules`: Draft and battle rules behind `GameState::act`
//! - `mcts`: Monte Carlo Tree Search over hashable nodes
//! - `agents`: Random, greedy and search-based players
//! - `rewards`: Reward shaping functions
//! - `runner`: Sequential match runner
//!
//! ## Example
//!
//! ```
//! use rust_locm::agents::{Agent, GreedyAgent, RandomAgent};
//! use rust_locm::core::{GameConfig, PlayerPair};
//! use rust_locm::runner::run_match;
//!
//! let config = GameConfig::default().with_draft_turns(10).with_opening_hand(3, 4);
//! let mut seats: PlayerPair<Box<dyn Agent>> = PlayerPair::from_parts(
//!     Box::new(GreedyAgent::new()),
//!     Box::new(RandomAgent::new(7)),
//! );
//!
//! let result = run_match(config, &mut seats, 2, 1).unwrap();
//! assert_eq!(result.games, 2);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod mcts;
pub mod agents;
pub mod rewards;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionType, ConfigError, GameConfig, GameError, GameEvent, GameRng, GameState,
    InstanceId, Lane, Phase, PlayerOrder, PlayerPair, Target,
};

pub use crate::cards::{Card, CardId, CardPool, CardTemplate, CardType, Creature, Keyword, Keywords};

pub use crate::mcts::{GameNode, MCTSConfig, MCTSSearch, SearchError, SearchNode, SearchStats};

pub use crate::agents::{Agent, GreedyAgent, MCTSAgent, RandomAgent};

pub use crate::rewards::{parse_reward, RewardFunction};

pub use crate::runner::{play_game, run_match, MatchError, MatchResult};
