//! Core MCTS search algorithm.
//!
//! Each rollout runs four steps:
//!
//! 1. **Select**: walk down from the root. Stop at a terminal, unexpanded or
//!    childless node. If any child of the current node is unexpanded, pick
//!    one at random, append it and stop. Otherwise descend by UCT.
//! 2. **Expand**: generate the leaf's children (no-op if already done).
//! 3. **Simulate**: play a copy of the leaf to the end with the per-seat
//!    playout agents. +1 if FIRST wins, -1 if SECOND wins, 0 otherwise.
//! 4. **Backpropagate**: every node on the path gets one more visit. The
//!    reward is added to nodes where FIRST is to move and subtracted where
//!    SECOND is to move.
//!
//! Nodes are interned by content into an arena, so the statistics tables
//! are plain vectors indexed by `NodeId`.

use std::time::Instant;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::agents::Agent;
use crate::core::{ConfigError, GameError, GameRng, PlayerOrder, PlayerPair};

use super::config::MCTSConfig;
use super::node::{NodeId, Playout, SearchNode};
use super::policy::{average_reward, first_max, playout_reward, uct};
use super::stats::SearchStats;

/// Search failure.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SearchError {
    /// The rules engine rejected a move during expansion or a playout.
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("choose called on a terminal node")]
    TerminalNode,

    /// The statistics tables are inconsistent.
    #[error("search invariant violated: {0}")]
    Invariant(String),
}

/// Playout agents, one per seat.
pub type PlayoutAgents<S> = PlayerPair<Box<dyn Agent<S>>>;

/// Main MCTS search context.
///
/// Owns the statistics tables, the playout agents and its RNG. Nothing is
/// shared between instances.
pub struct MCTSSearch<N: SearchNode> {
    config: MCTSConfig,

    /// Node -> arena index.
    index: FxHashMap<N, NodeId>,

    nodes: Vec<N>,

    /// Cumulative signed reward per node.
    q: Vec<f64>,

    /// Visit count per node.
    n: Vec<u32>,

    /// Children of expanded nodes; `None` until expanded.
    children: Vec<Option<Vec<NodeId>>>,

    agents: PlayoutAgents<N::State>,

    rng: GameRng,

    stats: SearchStats,
}

impl<N: SearchNode> MCTSSearch<N> {
    /// Fails if `config` does not validate.
    pub fn new(config: MCTSConfig, agents: PlayoutAgents<N::State>) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            index: FxHashMap::default(),
            nodes: Vec::new(),
            q: Vec::new(),
            n: Vec::new(),
            children: Vec::new(),
            agents,
            rng,
            stats: SearchStats::default(),
        })
    }

    /// Run one select/expand/simulate/backpropagate iteration from `root`.
    ///
    /// A rollout whose playout fails keeps any expansion it made but records
    /// no visit and is not counted in the stats.
    pub fn do_rollout(&mut self, root: &N) -> Result<(), SearchError> {
        let start = Instant::now();
        let root = self.intern(root.clone());

        let path = self.select(root)?;
        let leaf = *path
            .last()
            .ok_or_else(|| SearchError::Invariant("empty selection path".into()))?;

        self.expand(leaf)?;
        let reward = self.simulate(leaf)?;
        self.backpropagate(&path, reward);

        self.stats.rollouts += 1;
        self.stats.time_us += start.elapsed().as_micros() as u64;
        trace!(depth = path.len(), reward, "rollout");
        Ok(())
    }

    /// Run `rollouts` iterations from `root`.
    pub fn run(&mut self, root: &N, rollouts: u32) -> Result<(), SearchError> {
        for _ in 0..rollouts {
            self.do_rollout(root)?;
        }
        debug!(
            rollouts,
            nodes = self.nodes.len(),
            rollouts_per_sec = self.stats.rollouts_per_second(),
            "search finished"
        );
        Ok(())
    }

    /// Pick the best successor of `root`.
    ///
    /// An unexpanded root yields a random child. Otherwise the child with
    /// the highest average reward wins; unvisited children are never
    /// preferred and ties go to the first child.
    pub fn choose(&mut self, root: &N) -> Result<N, SearchError> {
        if root.is_terminal() {
            return Err(SearchError::TerminalNode);
        }

        let children = match self.index.get(root).and_then(|&id| self.children[id.index()].as_ref()) {
            Some(children) => children,
            None => {
                return root.find_random_child(&mut self.rng)?.ok_or_else(|| {
                    SearchError::Invariant("non-terminal node has no children".into())
                });
            }
        };

        let best = first_max(
            children
                .iter()
                .map(|c| average_reward(self.q[c.index()], self.n[c.index()])),
        )
        .ok_or_else(|| SearchError::Invariant("non-terminal node has no children".into()))?;

        Ok(self.nodes[children[best].index()].clone())
    }

    // === Statistics access ===

    /// Visit count of a node, 0 if unknown.
    #[must_use]
    pub fn visits(&self, node: &N) -> u32 {
        self.index.get(node).map_or(0, |id| self.n[id.index()])
    }

    /// Cumulative reward of a node, 0 if unknown.
    #[must_use]
    pub fn total_reward(&self, node: &N) -> f64 {
        self.index.get(node).map_or(0.0, |id| self.q[id.index()])
    }

    #[must_use]
    pub fn is_expanded(&self, node: &N) -> bool {
        self.index
            .get(node)
            .map_or(false, |id| self.children[id.index()].is_some())
    }

    /// Children of an expanded node.
    #[must_use]
    pub fn children(&self, node: &N) -> Option<Vec<&N>> {
        let id = self.index.get(node)?;
        let children = self.children[id.index()].as_ref()?;
        Some(children.iter().map(|c| &self.nodes[c.index()]).collect())
    }

    /// Number of distinct nodes seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop all statistics. The RNG keeps its position.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.q.clear();
        self.n.clear();
        self.children.clear();
        self.stats.reset();
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    // === Internals ===

    fn intern(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = NodeId::new(self.nodes.len() as u32);
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        self.q.push(0.0);
        self.n.push(0);
        self.children.push(None);
        id
    }

    fn select(&mut self, root: NodeId) -> Result<Vec<NodeId>, SearchError> {
        let mut path = Vec::new();
        let mut current = root;

        loop {
            path.push(current);

            let children = match &self.children[current.index()] {
                Some(children) if !children.is_empty() => children,
                _ => return Ok(path),
            };
            if self.nodes[current.index()].is_terminal() {
                return Ok(path);
            }

            let unexplored: Vec<NodeId> = children
                .iter()
                .copied()
                .filter(|c| self.children[c.index()].is_none())
                .collect();

            if !unexplored.is_empty() {
                let pick = unexplored[self.rng.gen_range_usize(0..unexplored.len())];
                path.push(pick);
                return Ok(path);
            }

            current = self.uct_select(current)?;
        }
    }

    fn expand(&mut self, leaf: NodeId) -> Result<(), SearchError> {
        if self.children[leaf.index()].is_some() {
            return Ok(());
        }

        let found = self.nodes[leaf.index()].find_children()?;
        let ids: Vec<NodeId> = found.into_iter().map(|child| self.intern(child)).collect();
        self.children[leaf.index()] = Some(ids);
        self.stats.nodes_expanded += 1;
        Ok(())
    }

    fn simulate(&mut self, leaf: NodeId) -> Result<f64, SearchError> {
        let mut game = self.nodes[leaf.index()].state().clone();

        while !game.is_over() {
            let action = self.agents[game.to_move()].act(&game);
            game.play(&action)?;
            self.stats.playout_actions += 1;
        }

        Ok(playout_reward(game.winner()))
    }

    fn backpropagate(&mut self, path: &[NodeId], reward: f64) {
        for &id in path.iter().rev() {
            let i = id.index();
            self.n[i] += 1;
            if self.nodes[i].state().to_move() == PlayerOrder::First {
                self.q[i] += reward;
            } else {
                self.q[i] -= reward;
            }
        }
    }

    fn uct_select(&self, node: NodeId) -> Result<NodeId, SearchError> {
        let children = self.children[node.index()]
            .as_ref()
            .ok_or_else(|| SearchError::Invariant(format!("{} is not expanded", node)))?;

        if let Some(child) = children.iter().find(|c| self.children[c.index()].is_none()) {
            return Err(SearchError::Invariant(format!(
                "UCT over unexpanded child {}",
                child
            )));
        }

        let parent_visits = self.n[node.index()];
        let exploration = self.config.exploration_constant;
        let best = first_max(children.iter().map(|c| {
            uct(self.q[c.index()], self.n[c.index()], parent_visits, exploration)
        }))
        .ok_or_else(|| SearchError::Invariant(format!("{} has no children", node)))?;

        Ok(children[best])
    }
}
