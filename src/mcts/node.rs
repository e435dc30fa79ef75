//! Search node abstraction.
//!
//! `MCTSSearch` is generic over `SearchNode`: anything cloneable, hashable
//! and comparable that can list its successor nodes. Nodes are compared by
//! content, so two move orders that reach the same position share one set
//! of statistics.
//!
//! `GameNode<S>` adapts any `Playout` state (the rules engine's `GameState`
//! by default) to `SearchNode`. It caches an `FxHasher` digest of the state
//! so hashing a node in the statistics tables is O(1).

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameError, GameRng, GameState, PlayerOrder};

/// Index into the `MCTSSearch` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A two-player game state that agents can play to completion.
pub trait Playout: Clone {
    /// The seat whose move it is.
    fn to_move(&self) -> PlayerOrder;

    fn is_over(&self) -> bool;

    /// The winner, once the game is over. `None` for an unfinished game or
    /// a finished game without a winner.
    fn winner(&self) -> Option<PlayerOrder>;

    fn legal_actions(&self) -> Vec<Action>;

    fn play(&mut self, action: &Action) -> Result<(), GameError>;
}

impl Playout for GameState {
    fn to_move(&self) -> PlayerOrder {
        self.current_player
    }

    fn is_over(&self) -> bool {
        self.is_terminal()
    }

    fn winner(&self) -> Option<PlayerOrder> {
        self.winner
    }

    fn legal_actions(&self) -> Vec<Action> {
        GameState::legal_actions(self)
    }

    fn play(&mut self, action: &Action) -> Result<(), GameError> {
        self.act(action).map(|_| ())
    }
}

/// A node of the search graph.
pub trait SearchNode: Clone + Eq + Hash {
    type State: Playout;

    fn state(&self) -> &Self::State;

    fn is_terminal(&self) -> bool;

    /// All distinct successor nodes.
    fn find_children(&self) -> Result<Vec<Self>, GameError>;

    /// One successor chosen uniformly at random, or `None` if there is none.
    fn find_random_child(&self, rng: &mut GameRng) -> Result<Option<Self>, GameError>;
}

/// `SearchNode` over a playable state, keyed by its content hash.
///
/// ```
/// use rust_locm::core::{GameConfig, GameState};
/// use rust_locm::mcts::{GameNode, SearchNode};
///
/// let node = GameNode::new(GameState::new(GameConfig::default(), 1).unwrap());
/// let children = node.find_children().unwrap();
///
/// assert_eq!(children.len(), 3);
/// assert!(!node.is_terminal());
/// ```
#[derive(Clone, Debug)]
pub struct GameNode<S = GameState> {
    state: S,
    key: u64,
}

impl<S: Playout + Hash> GameNode<S> {
    #[must_use]
    pub fn new(state: S) -> Self {
        let mut hasher = FxHasher::default();
        state.hash(&mut hasher);
        Self {
            key: hasher.finish(),
            state,
        }
    }

    /// Cached content hash.
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[must_use]
    pub fn into_state(self) -> S {
        self.state
    }

    fn successor(&self, action: &Action) -> Result<Self, GameError> {
        let mut state = self.state.clone();
        state.play(action)?;
        Ok(Self::new(state))
    }
}

impl<S: PartialEq> PartialEq for GameNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.state == other.state
    }
}

impl<S: Eq> Eq for GameNode<S> {}

impl<S> Hash for GameNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<S: Playout + Eq + Hash> SearchNode for GameNode<S> {
    type State = S;

    fn state(&self) -> &S {
        &self.state
    }

    fn is_terminal(&self) -> bool {
        self.state.is_over()
    }

    fn find_children(&self) -> Result<Vec<Self>, GameError> {
        let mut children: Vec<Self> = Vec::new();
        for action in self.state.legal_actions() {
            let child = self.successor(&action)?;
            if !children.contains(&child) {
                children.push(child);
            }
        }
        Ok(children)
    }

    fn find_random_child(&self, rng: &mut GameRng) -> Result<Option<Self>, GameError> {
        let actions = self.state.legal_actions();
        match rng.choose(&actions) {
            Some(action) => self.successor(action).map(Some),
            None => Ok(None),
        }
    }
}
