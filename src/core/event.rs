//! Events reported by `GameState::act`.
//!
//! Every successful action returns the events it caused, in order. Boundary
//! conditions reached during play (a burned card, an exhausted deck, a broken
//! ward) show up here rather than as errors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Target;
use super::entity::InstanceId;
use super::player::PlayerOrder;
use super::state::{Lane, Phase};
use crate::cards::CardId;

/// Something that happened while applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    CardPicked { player: PlayerOrder, card: InstanceId, template: CardId },
    PhaseChanged { phase: Phase },
    TurnStarted { player: PlayerOrder, turn: u32 },
    CardDrawn { player: PlayerOrder, card: InstanceId },

    /// A draw found the hand full; the card was discarded.
    CardBurned { player: PlayerOrder, card: InstanceId },

    /// Draws were missed on an empty deck and fatigue applied.
    DeckExhausted { player: PlayerOrder, missed_draws: u32 },

    CreatureSummoned { player: PlayerOrder, creature: InstanceId, lane: Lane },
    ItemUsed { player: PlayerOrder, item: InstanceId, target: Target },
    CreatureAttacked { attacker: InstanceId, target: Target },
    CreatureDamaged { creature: InstanceId, amount: i32 },

    /// A ward absorbed a damage instance and was removed.
    WardBroken { creature: InstanceId },

    CreatureDied { player: PlayerOrder, creature: InstanceId },
    HealthChanged { player: PlayerOrder, delta: i32 },
    TurnPassed { player: PlayerOrder },
    GameEnded { winner: PlayerOrder },
}

/// Events from one action. Most actions produce only a handful.
pub type Events = SmallVec<[GameEvent; 8]>;
