//! Tree-search agent.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::core::{Action, ConfigError, GameRng, GameState, PlayerPair};
use crate::mcts::{GameNode, MCTSConfig, MCTSSearch, SearchError, SearchStats};

use super::{Agent, RandomAgent};

/// Runs a fresh search for every decision and plays the chosen child.
///
/// Playouts use two random agents seeded from the agent's own RNG, so a
/// fixed config seed replays the same game.
///
/// `act` never fails: when the search errors it logs the error with `warn!`
/// and plays the first legal action, or `Pass` if there is none. Call
/// [`MCTSAgent::search`] directly to see the error.
#[derive(Clone, Debug)]
pub struct MCTSAgent {
    config: MCTSConfig,
    rng: GameRng,
    last_stats: SearchStats,
}

impl MCTSAgent {
    /// Fails if `config` does not validate.
    pub fn new(config: MCTSConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            rng,
            last_stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Search from `state` and return the action leading to the best child.
    pub fn search(&mut self, state: &GameState) -> Result<Action, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalNode);
        }

        let actions = state.legal_actions();
        if let [only] = actions.as_slice() {
            return Ok(*only);
        }

        let config = self.config.clone().with_seed(self.rng.fork().seed());
        let agents: PlayerPair<Box<dyn Agent<GameState>>> = PlayerPair::from_parts(
            Box::new(RandomAgent::from_rng(self.rng.fork())),
            Box::new(RandomAgent::from_rng(self.rng.fork())),
        );
        let mut search = MCTSSearch::new(config, agents)?;
        let root = GameNode::new(state.clone());

        match self.config.time_budget_ms {
            Some(millis) => {
                let deadline = Instant::now() + Duration::from_millis(millis);
                loop {
                    search.do_rollout(&root)?;
                    if Instant::now() >= deadline {
                        break;
                    }
                }
            }
            None => search.run(&root, self.config.rollouts_per_move)?,
        }

        let best = search.choose(&root)?;
        self.last_stats = search.stats().clone();

        for action in actions {
            let mut next = state.clone();
            if next.act(&action).is_err() {
                continue;
            }
            if GameNode::new(next) == best {
                debug!(%action, visits = search.visits(&best), "mcts move");
                return Ok(action);
            }
        }

        Err(SearchError::Invariant(
            "chosen child matches no legal action".into(),
        ))
    }
}

impl Agent for MCTSAgent {
    fn act(&mut self, state: &GameState) -> Action {
        match self.search(state) {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "search failed, playing first legal action");
                state
                    .legal_actions()
                    .first()
                    .copied()
                    .unwrap_or(Action::Pass)
            }
        }
    }
}
