//! Agents: anything that picks an action for the player to move.
//!
//! - `RandomAgent`: uniform over legal actions
//! - `GreedyAgent`: highest-attack draft, then summon and go face
//! - `MCTSAgent`: runs a tree search per move
//!
//! The search uses agents as playout policies, so `Agent` is generic over
//! the state type it plays.

pub mod greedy;
pub mod mcts;
pub mod random;

pub use greedy::GreedyAgent;
pub use mcts::MCTSAgent;
pub use random::RandomAgent;

use crate::core::{Action, GameState};

/// A move-picking policy.
pub trait Agent<S = GameState> {
    /// Pick an action for the player to move in `state`.
    ///
    /// The action should be legal; the caller applies it and reports an
    /// error otherwise.
    fn act(&mut self, state: &S) -> Action;
}

impl<S, A: Agent<S> + ?Sized> Agent<S> for Box<A> {
    fn act(&mut self, state: &S) -> Action {
        (**self).act(state)
    }
}
