//! Action representation.
//!
//! An action is a tagged value: a type (the "verb") plus the operands that
//! type needs (the "nouns"):
//!
//! - `Pick`: index into the current draft offer
//! - `Summon`: creature card in hand + destination lane
//! - `Attack`: ready creature + enemy creature or the enemy player
//! - `Use`: item card in hand + creature target, or the enemy player for
//!   blue items
//! - `Pass`: no operands, ends the turn
//!
//! `origin()` and `target()` expose the flat `{type, origin, target}` view
//! used by agents and logs.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::state::Lane;

/// Discriminant of an `Action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Pick,
    Summon,
    Attack,
    Use,
    Pass,
}

/// What an attack or item is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The opposing player's face.
    Player,
    /// A creature on the board.
    Creature(InstanceId),
}

impl Target {
    /// The creature id, if this targets a creature.
    #[must_use]
    pub fn creature(self) -> Option<InstanceId> {
        match self {
            Target::Creature(id) => Some(id),
            Target::Player => None,
        }
    }
}

/// A complete game action.
///
/// ## Example
///
/// ```
/// use rust_locm::core::{Action, ActionType, InstanceId, Lane, Target};
///
/// let summon = Action::Summon { card: InstanceId(7), lane: Lane::Left };
/// assert_eq!(summon.kind(), ActionType::Summon);
/// assert_eq!(summon.origin(), Some(InstanceId(7)));
///
/// let face = Action::Attack { attacker: InstanceId(3), target: Target::Player };
/// assert_eq!(face.target(), Some(Target::Player));
/// assert_eq!(face.to_string(), "ATTACK 3 -1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Pick { choice: usize },
    Summon { card: InstanceId, lane: Lane },
    Attack { attacker: InstanceId, target: Target },
    Use { item: InstanceId, target: Target },
    Pass,
}

impl Action {
    /// The action's type.
    #[must_use]
    pub fn kind(&self) -> ActionType {
        match self {
            Action::Pick { .. } => ActionType::Pick,
            Action::Summon { .. } => ActionType::Summon,
            Action::Attack { .. } => ActionType::Attack,
            Action::Use { .. } => ActionType::Use,
            Action::Pass => ActionType::Pass,
        }
    }

    /// The card or creature performing the action.
    #[must_use]
    pub fn origin(&self) -> Option<InstanceId> {
        match *self {
            Action::Summon { card, .. } => Some(card),
            Action::Attack { attacker, .. } => Some(attacker),
            Action::Use { item, .. } => Some(item),
            Action::Pick { .. } | Action::Pass => None,
        }
    }

    /// The action's target, for attacks and items.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match *self {
            Action::Attack { target, .. } | Action::Use { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target_id = |target: &Target| match target {
            Target::Player => -1,
            Target::Creature(id) => id.0 as i64,
        };
        match self {
            Action::Pick { choice } => write!(f, "PICK {}", choice),
            Action::Summon { card, lane } => write!(f, "SUMMON {} {}", card.0, lane.index()),
            Action::Attack { attacker, target } => {
                write!(f, "ATTACK {} {}", attacker.0, target_id(target))
            }
            Action::Use { item, target } => write!(f, "USE {} {}", item.0, target_id(target)),
            Action::Pass => write!(f, "PASS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_operands() {
        let pick = Action::Pick { choice: 2 };
        assert_eq!(pick.kind(), ActionType::Pick);
        assert_eq!(pick.origin(), None);
        assert_eq!(pick.target(), None);

        let item = Action::Use {
            item: InstanceId(4),
            target: Target::Creature(InstanceId(9)),
        };
        assert_eq!(item.kind(), ActionType::Use);
        assert_eq!(item.origin(), Some(InstanceId(4)));
        assert_eq!(item.target().and_then(Target::creature), Some(InstanceId(9)));

        assert_eq!(Action::Pass.kind(), ActionType::Pass);
        assert_eq!(Action::Pass.origin(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::Pick { choice: 1 }.to_string(), "PICK 1");
        assert_eq!(
            Action::Summon { card: InstanceId(5), lane: Lane::Right }.to_string(),
            "SUMMON 5 1"
        );
        assert_eq!(
            Action::Use { item: InstanceId(5), target: Target::Creature(InstanceId(8)) }.to_string(),
            "USE 5 8"
        );
        assert_eq!(Action::Pass.to_string(), "PASS");
    }

    #[test]
    fn test_action_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |a: &Action| {
            let mut h = DefaultHasher::new();
            a.hash(&mut h);
            h.finish()
        };

        let a1 = Action::Attack { attacker: InstanceId(5), target: Target::Player };
        let a2 = Action::Attack { attacker: InstanceId(5), target: Target::Player };
        let a3 = Action::Attack { attacker: InstanceId(6), target: Target::Player };

        assert_eq!(hash(&a1), hash(&a2));
        assert_ne!(hash(&a1), hash(&a3));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Summon { card: InstanceId(12), lane: Lane::Left };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
