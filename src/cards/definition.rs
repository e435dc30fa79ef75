//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card: its type, cost,
//! stats, keywords and the on-play effects shared by every card type
//! (`player_hp`, `enemy_hp`, `card_draw`).
//!
//! Instance-specific data (instance id, current stats of a creature on the
//! board) is stored separately in `Card` and `Creature`.

use serde::{Deserialize, Serialize};

/// Identifier of a card template in the card pool.
///
/// This identifies the "kind" of card, not a specific instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The four card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Summoned into a lane.
    Creature,
    /// Buffs one of the owner's creatures.
    GreenItem,
    /// Debuffs or damages an enemy creature.
    RedItem,
    /// Damages an enemy creature or the enemy player.
    BlueItem,
}

impl CardType {
    /// Check if the card is played with USE rather than SUMMON.
    #[must_use]
    pub fn is_item(self) -> bool {
        !matches!(self, CardType::Creature)
    }
}

/// Creature keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Excess combat damage carries over to the enemy player.
    Breakthrough,
    /// Can attack on the turn it is summoned.
    Charge,
    /// Damage dealt while attacking heals the owner.
    Drain,
    /// Enemies in the same lane must attack this creature first.
    Guard,
    /// Any damage dealt kills the target creature.
    Lethal,
    /// Absorbs the next instance of damage, then disappears.
    Ward,
}

impl Keyword {
    pub const ALL: [Keyword; 6] = [
        Keyword::Breakthrough,
        Keyword::Charge,
        Keyword::Drain,
        Keyword::Guard,
        Keyword::Lethal,
        Keyword::Ward,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    const fn letter(self) -> char {
        match self {
            Keyword::Breakthrough => 'B',
            Keyword::Charge => 'C',
            Keyword::Drain => 'D',
            Keyword::Guard => 'G',
            Keyword::Lethal => 'L',
            Keyword::Ward => 'W',
        }
    }
}

/// Set of keywords stored as a bit mask.
///
/// ```
/// use rust_locm::cards::{Keyword, Keywords};
///
/// let mut kw = Keywords::from_slice(&[Keyword::Guard, Keyword::Ward]);
/// assert!(kw.contains(Keyword::Ward));
///
/// kw.remove(Keyword::Ward);
/// assert_eq!(kw.to_string(), "---G--");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keywords(u8);

impl Keywords {
    /// The empty set.
    pub const NONE: Keywords = Keywords(0);

    #[must_use]
    pub fn from_slice(keywords: &[Keyword]) -> Self {
        keywords.iter().fold(Self::NONE, |acc, &k| acc.with(k))
    }

    #[must_use]
    pub const fn with(self, keyword: Keyword) -> Self {
        Self(self.0 | keyword.bit())
    }

    #[must_use]
    pub const fn contains(self, keyword: Keyword) -> bool {
        self.0 & keyword.bit() != 0
    }

    pub fn insert(&mut self, keyword: Keyword) {
        self.0 |= keyword.bit();
    }

    pub fn remove(&mut self, keyword: Keyword) {
        self.0 &= !keyword.bit();
    }

    /// Keywords present in either set.
    #[must_use]
    pub const fn union(self, other: Keywords) -> Self {
        Self(self.0 | other.0)
    }

    /// Keywords in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Keywords) -> Self {
        Self(self.0 & !other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter(self) -> impl Iterator<Item = Keyword> {
        Keyword::ALL.into_iter().filter(move |&k| self.contains(k))
    }
}

impl std::fmt::Display for Keywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for keyword in Keyword::ALL {
            let c = if self.contains(keyword) { keyword.letter() } else { '-' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Static card template.
///
/// For creatures `attack`/`defense` are the base stats. For items they are
/// modifiers: green items add them to a friendly creature, red and blue items
/// carry non-positive values whose magnitude is applied as a debuff/damage.
///
/// ## Example
///
/// ```
/// use rust_locm::cards::{CardId, CardTemplate, Keyword};
///
/// let knight = CardTemplate::creature(CardId::new(1), 3, 2, 4)
///     .with_keyword(Keyword::Guard);
///
/// assert_eq!(knight.cost, 3);
/// assert!(knight.keywords.contains(Keyword::Guard));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: CardId,
    pub card_type: CardType,
    pub cost: i32,
    pub attack: i32,
    pub defense: i32,
    pub keywords: Keywords,

    /// Health change for the card's owner when played.
    pub player_hp: i32,

    /// Health change for the opponent when played.
    pub enemy_hp: i32,

    /// Extra cards drawn at the owner's next turn start.
    pub card_draw: u32,
}

impl CardTemplate {
    fn new(id: CardId, card_type: CardType, cost: i32, attack: i32, defense: i32) -> Self {
        Self {
            id,
            card_type,
            cost,
            attack,
            defense,
            keywords: Keywords::NONE,
            player_hp: 0,
            enemy_hp: 0,
            card_draw: 0,
        }
    }

    /// A creature card.
    #[must_use]
    pub fn creature(id: CardId, cost: i32, attack: i32, defense: i32) -> Self {
        Self::new(id, CardType::Creature, cost, attack, defense)
    }

    /// A green item: `attack`/`defense` are added to the target.
    #[must_use]
    pub fn green_item(id: CardId, cost: i32, attack: i32, defense: i32) -> Self {
        Self::new(id, CardType::GreenItem, cost, attack, defense)
    }

    /// A red item: `attack` and `defense` should be non-positive.
    #[must_use]
    pub fn red_item(id: CardId, cost: i32, attack: i32, defense: i32) -> Self {
        Self::new(id, CardType::RedItem, cost, attack, defense)
    }

    /// A blue item: `defense` should be non-positive.
    #[must_use]
    pub fn blue_item(id: CardId, cost: i32, attack: i32, defense: i32) -> Self {
        Self::new(id, CardType::BlueItem, cost, attack, defense)
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.insert(keyword);
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_player_hp(mut self, hp: i32) -> Self {
        self.player_hp = hp;
        self
    }

    #[must_use]
    pub fn with_enemy_hp(mut self, hp: i32) -> Self {
        self.enemy_hp = hp;
        self
    }

    #[must_use]
    pub fn with_card_draw(mut self, draw: u32) -> Self {
        self.card_draw = draw;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_keywords_set_ops() {
        let a = Keywords::from_slice(&[Keyword::Breakthrough, Keyword::Ward]);
        let b = Keywords::from_slice(&[Keyword::Ward, Keyword::Lethal]);

        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.difference(b), Keywords::NONE.with(Keyword::Breakthrough));
        assert!(Keywords::NONE.is_empty());
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![Keyword::Breakthrough, Keyword::Ward]);
    }

    #[test]
    fn test_keywords_display() {
        let all = Keywords::from_slice(&Keyword::ALL);
        assert_eq!(all.to_string(), "BCDGLW");
        assert_eq!(Keywords::NONE.to_string(), "------");
    }

    #[test]
    fn test_template_builders() {
        let bolt = CardTemplate::blue_item(CardId::new(9), 2, 0, -3)
            .with_player_hp(2)
            .with_card_draw(1);

        assert_eq!(bolt.card_type, CardType::BlueItem);
        assert!(bolt.card_type.is_item());
        assert_eq!(bolt.defense, -3);
        assert_eq!(bolt.player_hp, 2);
        assert_eq!(bolt.card_draw, 1);
        assert!(!CardType::Creature.is_item());
    }

    #[test]
    fn test_template_serialization() {
        let card = CardTemplate::creature(CardId::new(1), 4, 3, 5).with_keyword(Keyword::Drain);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
