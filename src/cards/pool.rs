//! Card pool - the set of templates the draft offers from.
//!
//! Pools are either supplied explicitly (`CardPool::from_templates`) or
//! generated from a seed. Generated cards follow a simple stat budget per
//! mana point so that cost roughly tracks power; they are meant for
//! simulation and search, not as a balanced card database.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardTemplate, CardType, Keyword, Keywords};
use crate::core::error::ConfigError;
use crate::core::rng::GameRng;

/// Highest generated card cost.
const MAX_COST: i32 = 12;

/// Card template collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    templates: Vec<CardTemplate>,
}

impl CardPool {
    /// Create a pool from explicit templates.
    ///
    /// Rejects templates that fail `is_well_formed`, such as a creature
    /// that would enter play already dead.
    pub fn from_templates(templates: Vec<CardTemplate>) -> Result<Self, ConfigError> {
        if let Some(bad) = templates.iter().find(|t| !is_well_formed(t)) {
            return Err(ConfigError::invalid(
                "card_pool",
                format!("{} has stats that do not fit its type", bad.id),
            ));
        }
        Ok(Self { templates })
    }

    /// Generate `size` templates deterministically from `rng`.
    #[must_use]
    pub fn generate(rng: &mut GameRng, size: usize) -> Self {
        let templates = (0..size)
            .map(|i| generate_template(rng, CardId::new(i as u32 + 1)))
            .collect();
        Self { templates }
    }

    /// Get a template by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardTemplate> {
        self.templates.get(index)
    }

    /// Look up a template by card id.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<&CardTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter()
    }

    /// Sample `amount` distinct templates.
    pub fn sample(&self, rng: &mut GameRng, amount: usize) -> Vec<CardTemplate> {
        rng.sample_distinct(self.templates.len(), amount)
            .into_iter()
            .map(|i| self.templates[i])
            .collect()
    }
}

fn generate_template(rng: &mut GameRng, id: CardId) -> CardTemplate {
    // Bias toward cheap cards: min of two uniform rolls.
    let cost = rng
        .gen_range_inclusive(0..=MAX_COST)
        .min(rng.gen_range_inclusive(0..=MAX_COST));

    match rng.gen_range(0..100) {
        0..=69 => generate_creature(rng, id, cost),
        70..=81 => generate_green_item(rng, id, cost),
        82..=91 => generate_red_item(rng, id, cost),
        _ => generate_blue_item(rng, id, cost),
    }
}

fn generate_creature(rng: &mut GameRng, id: CardId, cost: i32) -> CardTemplate {
    let mut budget = 2 * cost + 1;
    let mut keywords = Keywords::NONE;

    for keyword in Keyword::ALL {
        if budget > 2 && rng.gen_bool(0.12) {
            keywords.insert(keyword);
            budget -= 1;
        }
    }

    let defense = rng.gen_range_inclusive(1..=budget.max(1));
    let attack = budget - defense;

    let mut template = CardTemplate::creature(id, cost, attack.max(0), defense)
        .with_keywords(keywords);

    if cost >= 2 && rng.gen_bool(0.1) {
        if rng.gen_bool(0.5) {
            template = template.with_player_hp(rng.gen_range_inclusive(1..=cost));
        } else {
            template = template.with_enemy_hp(-rng.gen_range_inclusive(1..=cost));
        }
    }
    if cost >= 3 && rng.gen_bool(0.08) {
        template = template.with_card_draw(1);
    }
    template
}

fn generate_green_item(rng: &mut GameRng, id: CardId, cost: i32) -> CardTemplate {
    let budget = cost + 1;
    let attack = rng.gen_range_inclusive(0..=budget);
    let defense = budget - attack;

    let mut template = CardTemplate::green_item(id, cost, attack, defense);
    if rng.gen_bool(0.3) {
        let keyword = Keyword::ALL[rng.gen_range_usize(0..Keyword::ALL.len())];
        template = template.with_keyword(keyword);
    }
    template
}

fn generate_red_item(rng: &mut GameRng, id: CardId, cost: i32) -> CardTemplate {
    let budget = cost + 1;
    let attack = rng.gen_range_inclusive(0..=budget / 2);
    let defense = (budget - attack).max(1);

    let mut template = CardTemplate::red_item(id, cost, -attack, -defense);
    if rng.gen_bool(0.25) {
        template = template.with_keywords(Keywords::from_slice(&Keyword::ALL));
    }
    template
}

fn generate_blue_item(rng: &mut GameRng, id: CardId, cost: i32) -> CardTemplate {
    let damage = rng.gen_range_inclusive(0..=cost + 1);
    let mut template = CardTemplate::blue_item(id, cost, 0, -damage);

    if damage <= cost / 2 {
        template = template.with_player_hp(cost + 1 - damage);
    }
    if cost >= 4 && rng.gen_bool(0.3) {
        template = template.with_card_draw(1);
    }
    template
}

/// Check if a template's type and stats are consistent with its type.
#[must_use]
pub fn is_well_formed(template: &CardTemplate) -> bool {
    if template.cost < 0 {
        return false;
    }
    match template.card_type {
        CardType::Creature => template.defense > 0 && template.attack >= 0,
        CardType::GreenItem => template.attack >= 0 && template.defense >= 0,
        CardType::RedItem | CardType::BlueItem => template.attack <= 0 && template.defense <= 0,
    }
}
