//! Card instances - runtime card state.
//!
//! `Card` is a template plus the instance id it was given when drafted. It
//! moves deck -> hand -> lane unchanged. Once summoned, a creature card is
//! wrapped in a `Creature`, which tracks the mutable combat state.

use serde::{Deserialize, Serialize};

use super::definition::{CardTemplate, CardType, Keyword, Keywords};
use crate::core::entity::InstanceId;
use crate::core::error::GameError;

/// A card instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the game.
    pub id: InstanceId,

    /// The card's template.
    pub template: CardTemplate,
}

impl Card {
    #[must_use]
    pub fn new(id: InstanceId, template: CardTemplate) -> Self {
        Self { id, template }
    }

    #[must_use]
    pub fn cost(&self) -> i32 {
        self.template.cost
    }

    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.template.card_type
    }
}

/// A creature standing in a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    /// The summoned card.
    pub card: Card,

    /// Current attack.
    pub attack: i32,

    /// Current defense. The creature dies at zero or below.
    pub defense: i32,

    /// Current keywords.
    pub keywords: Keywords,

    /// Whether the creature is ready to attack this turn.
    pub can_attack: bool,

    /// Whether the creature already attacked this turn.
    pub has_attacked: bool,
}

impl Creature {
    /// Put a creature card into play.
    ///
    /// Freshly summoned creatures can only attack if they have Charge.
    #[must_use]
    pub fn summon(card: Card) -> Self {
        let keywords = card.template.keywords;
        Self {
            card,
            attack: card.template.attack.max(0),
            defense: card.template.defense,
            keywords,
            can_attack: keywords.contains(Keyword::Charge),
            has_attacked: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.card.id
    }

    #[must_use]
    pub fn has(&self, keyword: Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    /// Check if the creature may attack right now.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.can_attack && !self.has_attacked
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.defense <= 0
    }

    /// Deal damage to this creature.
    ///
    /// Returns the damage actually dealt. A warded creature loses its ward
    /// and reports `GameError::WardShield` instead of taking damage.
    /// `lethal` damage reduces defense to zero.
    pub fn damage(&mut self, amount: i32, lethal: bool) -> Result<i32, GameError> {
        if amount <= 0 {
            return Ok(0);
        }

        if self.has(Keyword::Ward) {
            self.keywords.remove(Keyword::Ward);
            return Err(GameError::WardShield);
        }

        self.defense -= amount;
        if lethal {
            self.defense = self.defense.min(0);
        }
        Ok(amount)
    }

    /// Ready the creature at the start of its owner's turn.
    pub fn refresh(&mut self) {
        self.can_attack = true;
        self.has_attacked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn creature(keywords: &[Keyword]) -> Creature {
        let template = CardTemplate::creature(CardId::new(1), 2, 3, 4)
            .with_keywords(Keywords::from_slice(keywords));
        Creature::summon(Card::new(InstanceId(10), template))
    }

    #[test]
    fn test_summon_readiness() {
        assert!(!creature(&[]).is_ready());
        assert!(creature(&[Keyword::Charge]).is_ready());

        let mut c = creature(&[]);
        c.refresh();
        assert!(c.is_ready());
        c.has_attacked = true;
        assert!(!c.is_ready());
    }

    #[test]
    fn test_damage() {
        let mut c = creature(&[]);

        assert_eq!(c.damage(3, false), Ok(3));
        assert_eq!(c.defense, 1);
        assert!(!c.is_dead());
        assert_eq!(c.damage(0, true), Ok(0));
        assert_eq!(c.defense, 1);
    }

    #[test]
    fn test_lethal_damage() {
        let mut c = creature(&[]);

        assert_eq!(c.damage(1, true), Ok(1));
        assert_eq!(c.defense, 0);
        assert!(c.is_dead());
    }

    #[test]
    fn test_ward_absorbs_once() {
        let mut c = creature(&[Keyword::Ward]);

        assert_eq!(c.damage(10, true), Err(GameError::WardShield));
        assert_eq!(c.defense, 4);
        assert!(!c.has(Keyword::Ward));

        assert_eq!(c.damage(2, false), Ok(2));
        assert_eq!(c.defense, 2);
    }

    #[test]
    fn test_zero_damage_keeps_ward() {
        let mut c = creature(&[Keyword::Ward]);

        assert_eq!(c.damage(0, false), Ok(0));
        assert!(c.has(Keyword::Ward));
    }
}
