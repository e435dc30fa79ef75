//! Uniform random agent.

use crate::core::{Action, GameRng};
use crate::mcts::Playout;

use super::Agent;

/// Picks uniformly among the legal actions. Passes when there are none.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<S: Playout> Agent<S> for RandomAgent {
    fn act(&mut self, state: &S) -> Action {
        let actions = state.legal_actions();
        self.rng.choose(&actions).copied().unwrap_or(Action::Pass)
    }
}
