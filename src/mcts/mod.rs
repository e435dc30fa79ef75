//! Monte Carlo Tree Search over hashable game states.
//!
//! ## Overview
//!
//! The search is generic over `SearchNode`: anything cloneable, hashable
//! and able to list its successors. `GameNode` adapts any `Playout` state,
//! `GameState` included. Statistics live in the search context, keyed by
//! node content, so transpositions share one entry.
//!
//! Rewards are signed from FIRST's point of view: +1 when FIRST wins a
//! playout, -1 when SECOND wins. A node accumulates the reward when FIRST
//! is to move there and its negation otherwise.
//!
//! ## Usage
//!
//! ```rust
//! use rust_locm::agents::{Agent, RandomAgent};
//! use rust_locm::core::{GameConfig, GameState, PlayerPair};
//! use rust_locm::mcts::{GameNode, MCTSConfig, MCTSSearch};
//!
//! let state = GameState::new(GameConfig::default().with_draft_turns(3).with_opening_hand(1, 1), 1).unwrap();
//! let agents: PlayerPair<Box<dyn Agent>> = PlayerPair::from_parts(
//!     Box::new(RandomAgent::new(1)),
//!     Box::new(RandomAgent::new(2)),
//! );
//!
//! let mut search = MCTSSearch::new(MCTSConfig::default(), agents).unwrap();
//! let root = GameNode::new(state);
//! search.run(&root, 50).unwrap();
//!
//! assert_eq!(search.visits(&root), 50);
//! let best = search.choose(&root).unwrap();
//! assert!(search.visits(&best) > 0);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;

pub use config::MCTSConfig;
pub use node::{GameNode, NodeId, Playout, SearchNode};
pub use policy::{average_reward, playout_reward, uct};
pub use search::{MCTSSearch, PlayoutAgents, SearchError};
pub use stats::SearchStats;
