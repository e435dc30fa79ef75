//! Game state.
//!
//! ## Player
//!
//! Per-seat data: health, mana, runes, hand, deck and the two lanes.
//! The zone primitives (`draw`, `damage`) live here and raise the
//! progression-family errors that the rules engine resolves.
//!
//! ## GameState
//!
//! Complete game state:
//! - Phase, turn, current player, winner
//! - Both players
//! - The draft offers still to come
//! - RNG
//!
//! Decks and the draft queue use `im::Vector`, so cloning a state for search
//! is cheap and clones never observe each other's mutations.
//!
//! Fields are public for inspection and scenario setup. `GameState::act`
//! maintains the rules invariants; code that writes fields directly is on
//! its own.

use std::hash::{Hash, Hasher};

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::entity::InstanceId;
use super::error::{ConfigError, GameError};
use super::event::Events;
use super::player::{PlayerOrder, PlayerPair};
use super::rng::GameRng;
use crate::cards::{Card, CardPool, CardTemplate, Creature};

/// Game phase. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Draft,
    Battle,
    Ended,
}

/// Board lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Left, Lane::Right];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Left => write!(f, "left"),
            Lane::Right => write!(f, "right"),
        }
    }
}

/// Cards in a player's hand.
pub type Hand = SmallVec<[Card; 8]>;

/// Creatures in one lane.
pub type LaneSlots = SmallVec<[Creature; 3]>;

/// Templates offered in one draft turn.
pub type Offer = SmallVec<[CardTemplate; 3]>;

/// One seat's state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub health: i32,

    /// Mana left this turn.
    pub mana: i32,

    /// Mana refilled at turn start.
    pub base_mana: i32,

    /// Health threshold of the next rune. Zero once all runes are gone.
    pub next_rune: i32,

    /// Extra cards to draw at the next turn start.
    pub bonus_draw: u32,

    pub hand: Hand,

    /// Draw pile, drawn from the front.
    pub deck: Vector<Card>,

    /// Creatures, indexed by `Lane::index`.
    pub lanes: [LaneSlots; 2],
}

impl Player {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            health: config.starting_health,
            mana: 0,
            base_mana: 0,
            next_rune: config.first_rune(),
            bonus_draw: 0,
            hand: Hand::new(),
            deck: Vector::new(),
            lanes: [LaneSlots::new(), LaneSlots::new()],
        }
    }

    #[must_use]
    pub fn lane(&self, lane: Lane) -> &LaneSlots {
        &self.lanes[lane.index()]
    }

    pub fn lane_mut(&mut self, lane: Lane) -> &mut LaneSlots {
        &mut self.lanes[lane.index()]
    }

    /// All creatures on the board, left lane first.
    pub fn creatures(&self) -> impl Iterator<Item = (Lane, &Creature)> {
        Lane::ALL
            .into_iter()
            .flat_map(move |lane| self.lane(lane).iter().map(move |c| (lane, c)))
    }

    /// Locate a creature by instance id.
    #[must_use]
    pub fn find_creature(&self, id: InstanceId) -> Option<(Lane, usize)> {
        Lane::ALL.into_iter().find_map(|lane| {
            self.lane(lane)
                .iter()
                .position(|c| c.id() == id)
                .map(|index| (lane, index))
        })
    }

    #[must_use]
    pub fn creature(&self, id: InstanceId) -> Option<&Creature> {
        let (lane, index) = self.find_creature(id)?;
        self.lane(lane).get(index)
    }

    pub fn creature_mut(&mut self, id: InstanceId) -> Option<&mut Creature> {
        let (lane, index) = self.find_creature(id)?;
        self.lane_mut(lane).get_mut(index)
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_position(&self, id: InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }

    /// Draw the top card of the deck into the hand.
    ///
    /// Fails with `EmptyDeck { missed_draws: 1 }` when there is nothing to
    /// draw and with `FullHand` when the hand is at capacity. Neither failure
    /// changes the player.
    pub fn draw(&mut self, hand_capacity: usize) -> Result<InstanceId, GameError> {
        if self.deck.is_empty() {
            return Err(GameError::EmptyDeck { missed_draws: 1 });
        }
        if self.hand.len() >= hand_capacity {
            return Err(GameError::FullHand);
        }
        let card = self
            .deck
            .pop_front()
            .ok_or(GameError::EmptyDeck { missed_draws: 1 })?;
        self.hand.push(card);
        Ok(card.id)
    }

    /// Discard the top card of the deck.
    pub fn burn_top(&mut self) -> Option<Card> {
        self.deck.pop_front()
    }

    /// Lose health, breaking any runes passed on the way down.
    ///
    /// Each broken rune grants one bonus draw.
    pub fn damage(&mut self, amount: i32, rune_step: i32) {
        if amount <= 0 {
            return;
        }
        self.health -= amount;
        while self.next_rune > 0 && self.health <= self.next_rune {
            self.next_rune = (self.next_rune - rune_step).max(0);
            self.bonus_draw += 1;
        }
    }

    /// Apply a signed health change.
    pub fn change_health(&mut self, delta: i32, rune_step: i32) {
        if delta < 0 {
            self.damage(-delta, rune_step);
        } else {
            self.health += delta;
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remove dead creatures, returning their ids.
    pub fn remove_dead(&mut self) -> SmallVec<[InstanceId; 4]> {
        let mut dead = SmallVec::new();
        for lane in &mut self.lanes {
            lane.retain(|c| {
                if c.is_dead() {
                    dead.push(c.id());
                    false
                } else {
                    true
                }
            });
        }
        dead
    }
}

/// Full game state.
///
/// Equality and hashing cover everything except the RNG, so two states
/// reached by different move orders compare equal.
///
/// ## Example
///
/// ```
/// use rust_locm::core::{GameConfig, GameState, Phase, PlayerOrder};
///
/// let state = GameState::new(GameConfig::default(), 7).unwrap();
///
/// assert_eq!(state.phase, Phase::Draft);
/// assert_eq!(state.current_player, PlayerOrder::First);
/// assert_eq!(state.current_offer().map(|o| o.len()), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,

    /// Draft turn during the draft, round number during the battle.
    pub turn: u32,

    pub current_player: PlayerOrder,

    /// Set exactly when the phase becomes `Ended`.
    pub winner: Option<PlayerOrder>,

    pub players: PlayerPair<Player>,

    /// Offers for the current and remaining draft turns.
    pub draft: Vector<Offer>,

    pub rng: GameRng,

    next_instance_id: u32,
}

impl GameState {
    /// Start a game in the draft phase with a generated card pool.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let pool = CardPool::generate(&mut rng, config.card_pool_size);
        Ok(Self::draft_with_rng(config, &pool, rng))
    }

    /// Start a game in the draft phase, drafting from `pool`.
    pub fn with_pool(config: GameConfig, pool: &CardPool, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if pool.len() < config.draft_choices {
            return Err(ConfigError::invalid(
                "card_pool_size",
                format!("pool has {} cards, draft needs {}", pool.len(), config.draft_choices),
            ));
        }
        Ok(Self::draft_with_rng(config, pool, GameRng::new(seed)))
    }

    /// Skip the draft: build both decks from templates and start the battle.
    ///
    /// Decks are shuffled and opening hands dealt as after a draft.
    pub fn from_decks(
        config: GameConfig,
        decks: PlayerPair<Vec<CardTemplate>>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self::empty(config, GameRng::new(seed));
        for player in PlayerOrder::ALL {
            for &template in &decks[player] {
                let card = state.create_card(template);
                state.players[player].deck.push_back(card);
            }
        }
        crate::rules::battle::begin_battle(&mut state, &mut Events::new());
        Ok(state)
    }

    fn draft_with_rng(config: GameConfig, pool: &CardPool, mut rng: GameRng) -> Self {
        let draft = (0..config.draft_turns)
            .map(|_| pool.sample(&mut rng, config.draft_choices).into_iter().collect())
            .collect();
        let mut state = Self::empty(config, rng);
        state.draft = draft;
        state
    }

    fn empty(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            phase: Phase::Draft,
            turn: 1,
            current_player: PlayerOrder::First,
            winner: None,
            players: PlayerPair::new(|_| Player::new(&config)),
            draft: Vector::new(),
            rng,
            next_instance_id: 1,
        }
    }

    /// Allocate a fresh instance id.
    pub fn alloc_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }

    /// Create a card instance from a template.
    pub fn create_card(&mut self, template: CardTemplate) -> Card {
        Card::new(self.alloc_instance(), template)
    }

    /// The offer for the current draft turn.
    #[must_use]
    pub fn current_offer(&self) -> Option<&Offer> {
        if self.phase == Phase::Draft {
            self.draft.front()
        } else {
            None
        }
    }

    /// The player to move.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[self.current_player.opposing()]
    }

    /// Fold every rules-relevant field into `hasher`.
    fn hash_content<H: Hasher>(&self, hasher: &mut H) {
        self.config.hash(hasher);
        self.phase.hash(hasher);
        self.turn.hash(hasher);
        self.current_player.hash(hasher);
        self.winner.hash(hasher);
        self.players.hash(hasher);
        self.draft.hash(hasher);
        self.next_instance_id.hash(hasher);
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.phase == other.phase
            && self.turn == other.turn
            && self.current_player == other.current_player
            && self.winner == other.winner
            && self.next_instance_id == other.next_instance_id
            && self.config == other.config
            && self.players == other.players
            && self.draft == other.draft
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_content(state);
    }
}
