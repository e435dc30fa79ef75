//! Battle phase rules: turn start, summon, use, attack and pass.
//!
//! Actions are checked by `validate`, which resolves every id to a board or
//! hand position and returns a `Plan`. `apply` then executes the plan
//! without further checks, so a rejected action never touches the state.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardType, Creature, Keyword};
use crate::core::{
    Action, Events, GameError, GameEvent, GameState, InstanceId, Lane, Phase, Player, PlayerOrder,
    Target,
};

/// A validated battle action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Plan {
    Summon { hand_index: usize, lane: Lane },
    Use { hand_index: usize, target: Slot },
    Attack { lane: Lane, index: usize, target: Slot },
    Pass,
}

/// Resolved target position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Face,
    Creature { owner: PlayerOrder, lane: Lane, index: usize },
}

// ===== Validation =====

pub(crate) fn validate(state: &GameState, action: &Action) -> Result<Plan, GameError> {
    match *action {
        Action::Summon { card, lane } => validate_summon(state, card, lane),
        Action::Use { item, target } => validate_use(state, item, target),
        Action::Attack { attacker, target } => validate_attack(state, attacker, target),
        Action::Pass => Ok(Plan::Pass),
        Action::Pick { .. } => Err(GameError::malformed("cannot pick during the battle")),
    }
}

fn hand_card(player: &Player, id: InstanceId) -> Result<(usize, Card), GameError> {
    let index = player
        .hand_position(id)
        .ok_or_else(|| GameError::malformed(format!("{} is not in hand", id)))?;
    Ok((index, player.hand[index]))
}

fn check_mana(player: &Player, card: &Card) -> Result<(), GameError> {
    if card.cost() > player.mana {
        return Err(GameError::NotEnoughMana {
            cost: card.cost(),
            mana: player.mana,
        });
    }
    Ok(())
}

fn validate_summon(state: &GameState, id: InstanceId, lane: Lane) -> Result<Plan, GameError> {
    let player = state.current();
    let (hand_index, card) = hand_card(player, id)?;

    if card.card_type() != CardType::Creature {
        return Err(GameError::malformed(format!("{} is not a creature", id)));
    }
    check_mana(player, &card)?;
    if player.lane(lane).len() >= state.config.lane_capacity {
        return Err(GameError::FullLane(lane));
    }
    Ok(Plan::Summon { hand_index, lane })
}

fn creature_slot(state: &GameState, owner: PlayerOrder, id: InstanceId) -> Option<Slot> {
    let (lane, index) = state.players[owner].find_creature(id)?;
    Some(Slot::Creature { owner, lane, index })
}

fn validate_use(state: &GameState, id: InstanceId, target: Target) -> Result<Plan, GameError> {
    let player = state.current();
    let (hand_index, card) = hand_card(player, id)?;

    if !card.card_type().is_item() {
        return Err(GameError::malformed(format!("{} is not an item", id)));
    }
    check_mana(player, &card)?;

    let me = state.current_player;
    let slot = match (card.card_type(), target) {
        (CardType::GreenItem, Target::Creature(creature)) => creature_slot(state, me, creature),
        (CardType::RedItem | CardType::BlueItem, Target::Creature(creature)) => {
            creature_slot(state, me.opposing(), creature)
        }
        (CardType::BlueItem, Target::Player) => Some(Slot::Face),
        _ => None,
    };
    let target = slot
        .ok_or_else(|| GameError::malformed(format!("{} cannot target {:?}", id, target)))?;
    Ok(Plan::Use { hand_index, target })
}

fn validate_attack(state: &GameState, id: InstanceId, target: Target) -> Result<Plan, GameError> {
    let player = state.current();
    let (lane, index) = player
        .find_creature(id)
        .ok_or_else(|| GameError::malformed(format!("{} is not on the board", id)))?;

    if !player.lane(lane)[index].is_ready() {
        return Err(GameError::malformed(format!("{} cannot attack", id)));
    }

    let enemy = state.current_player.opposing();
    let defenders = state.players[enemy].lane(lane);
    let guarded = defenders.iter().any(|c| c.has(Keyword::Guard));

    let target = match target {
        Target::Player if guarded => {
            return Err(GameError::malformed(format!(
                "a guard in the {} lane blocks attacks on the player",
                lane
            )));
        }
        Target::Player => Slot::Face,
        Target::Creature(defender) => {
            let target_index = defenders
                .iter()
                .position(|c| c.id() == defender)
                .ok_or_else(|| {
                    GameError::malformed(format!("{} is not in the enemy {} lane", defender, lane))
                })?;
            if guarded && !defenders[target_index].has(Keyword::Guard) {
                return Err(GameError::malformed(format!(
                    "{} must attack a guard first",
                    id
                )));
            }
            Slot::Creature {
                owner: enemy,
                lane,
                index: target_index,
            }
        }
    };
    Ok(Plan::Attack { lane, index, target })
}

// ===== Application =====

pub(crate) fn apply(state: &mut GameState, plan: Plan, events: &mut Events) {
    match plan {
        Plan::Summon { hand_index, lane } => summon(state, hand_index, lane, events),
        Plan::Use { hand_index, target } => use_item(state, hand_index, target, events),
        Plan::Attack { lane, index, target } => attack(state, lane, index, target, events),
        Plan::Pass => pass_turn(state, events),
    }
}

fn summon(state: &mut GameState, hand_index: usize, lane: Lane, events: &mut Events) {
    let me = state.current_player;
    let player = &mut state.players[me];
    let card = player.hand.remove(hand_index);
    player.mana -= card.cost();
    player.lane_mut(lane).push(Creature::summon(card));

    events.push(GameEvent::CreatureSummoned {
        player: me,
        creature: card.id,
        lane,
    });
    apply_card_effects(state, &card, events);
}

fn use_item(state: &mut GameState, hand_index: usize, target: Slot, events: &mut Events) {
    let me = state.current_player;
    let rune_step = state.config.rune_step;
    let player = &mut state.players[me];
    let card = player.hand.remove(hand_index);
    player.mana -= card.cost();
    let template = card.template;

    match target {
        Slot::Face => {
            events.push(GameEvent::ItemUsed {
                player: me,
                item: card.id,
                target: Target::Player,
            });
            let amount = -template.defense;
            if amount > 0 {
                state.players[me.opposing()].damage(amount, rune_step);
                events.push(GameEvent::HealthChanged {
                    player: me.opposing(),
                    delta: -amount,
                });
            }
        }
        Slot::Creature { owner, lane, index } => {
            let creature = &mut state.players[owner].lane_mut(lane)[index];
            events.push(GameEvent::ItemUsed {
                player: me,
                item: card.id,
                target: Target::Creature(creature.id()),
            });

            if template.card_type == CardType::GreenItem {
                creature.attack += template.attack;
                creature.defense += template.defense;
                creature.keywords = creature.keywords.union(template.keywords);
                if creature.has(Keyword::Charge) && !creature.has_attacked {
                    creature.can_attack = true;
                }
            } else {
                creature.keywords = creature.keywords.difference(template.keywords);
                creature.attack = (creature.attack + template.attack).max(0);
                strike(creature, -template.defense, false, events);
            }
        }
    }

    apply_card_effects(state, &card, events);
    remove_dead(state, events);
}

fn attack(state: &mut GameState, lane: Lane, index: usize, target: Slot, events: &mut Events) {
    let me = state.current_player;
    let rune_step = state.config.rune_step;
    let (player, enemy) = state.players.split_mut(me);

    let attacker = &mut player.lane_mut(lane)[index];
    attacker.has_attacked = true;
    let attacker = *attacker;
    let power = attacker.attack;

    match target {
        Slot::Face => {
            events.push(GameEvent::CreatureAttacked {
                attacker: attacker.id(),
                target: Target::Player,
            });
            if power > 0 {
                enemy.damage(power, rune_step);
                events.push(GameEvent::HealthChanged {
                    player: me.opposing(),
                    delta: -power,
                });
                if attacker.has(Keyword::Drain) {
                    player.health += power;
                    events.push(GameEvent::HealthChanged { player: me, delta: power });
                }
            }
        }
        Slot::Creature {
            lane: target_lane,
            index: target_index,
            ..
        } => {
            let defender = &mut enemy.lane_mut(target_lane)[target_index];
            events.push(GameEvent::CreatureAttacked {
                attacker: attacker.id(),
                target: Target::Creature(defender.id()),
            });

            let defense_before = defender.defense;
            let counter = defender.attack;
            let counter_lethal = defender.has(Keyword::Lethal);
            let dealt = strike(defender, power, attacker.has(Keyword::Lethal), events);

            strike(
                &mut player.lane_mut(lane)[index],
                counter,
                counter_lethal,
                events,
            );

            if dealt > 0 && attacker.has(Keyword::Breakthrough) {
                let excess = dealt - defense_before.max(0);
                if excess > 0 {
                    enemy.damage(excess, rune_step);
                    events.push(GameEvent::HealthChanged {
                        player: me.opposing(),
                        delta: -excess,
                    });
                }
            }
            if dealt > 0 && attacker.has(Keyword::Drain) {
                player.health += dealt;
                events.push(GameEvent::HealthChanged { player: me, delta: dealt });
            }
        }
    }

    remove_dead(state, events);
}

fn pass_turn(state: &mut GameState, events: &mut Events) {
    let me = state.current_player;
    events.push(GameEvent::TurnPassed { player: me });

    state.current_player = me.opposing();
    if state.current_player == PlayerOrder::First {
        state.turn += 1;
    }
    start_turn(state, events);
}

/// Damage a creature, turning a ward hit into an event.
///
/// Returns the damage actually dealt.
fn strike(creature: &mut Creature, amount: i32, lethal: bool, events: &mut Events) -> i32 {
    match creature.damage(amount, lethal) {
        Ok(dealt) => {
            if dealt > 0 {
                events.push(GameEvent::CreatureDamaged {
                    creature: creature.id(),
                    amount: dealt,
                });
            }
            dealt
        }
        Err(GameError::WardShield) => {
            events.push(GameEvent::WardBroken {
                creature: creature.id(),
            });
            0
        }
        Err(_) => 0,
    }
}

/// Health changes and bonus draws printed on a played card.
fn apply_card_effects(state: &mut GameState, card: &Card, events: &mut Events) {
    let me = state.current_player;
    let rune_step = state.config.rune_step;
    let template = card.template;
    let (player, enemy) = state.players.split_mut(me);

    if template.player_hp != 0 {
        player.change_health(template.player_hp, rune_step);
        events.push(GameEvent::HealthChanged {
            player: me,
            delta: template.player_hp,
        });
    }
    if template.enemy_hp != 0 {
        enemy.change_health(template.enemy_hp, rune_step);
        events.push(GameEvent::HealthChanged {
            player: me.opposing(),
            delta: template.enemy_hp,
        });
    }
    player.bonus_draw += template.card_draw;
}

fn remove_dead(state: &mut GameState, events: &mut Events) {
    for (order, player) in state.players.iter_mut() {
        for creature in player.remove_dead() {
            events.push(GameEvent::CreatureDied {
                player: order,
                creature,
            });
        }
    }
}

// ===== Turn structure =====

/// Shuffle the decks, deal opening hands and start FIRST's first turn.
pub(crate) fn begin_battle(state: &mut GameState, events: &mut Events) {
    state.phase = Phase::Battle;
    state.turn = 1;
    state.current_player = PlayerOrder::First;
    state.draft.clear();

    let config = state.config;
    for order in PlayerOrder::ALL {
        let mut cards: Vec<Card> = state.players[order].deck.iter().copied().collect();
        state.rng.shuffle(&mut cards);

        let player = &mut state.players[order];
        player.deck = cards.into_iter().collect();
        for _ in 0..config.opening_hand_for(order) {
            if player.draw(config.hand_capacity).is_err() {
                break;
            }
        }
    }

    debug!(
        first_deck = state.players[PlayerOrder::First].deck.len(),
        second_deck = state.players[PlayerOrder::Second].deck.len(),
        "battle started"
    );
    events.push(GameEvent::PhaseChanged {
        phase: Phase::Battle,
    });
    start_turn(state, events);
}

/// Refill mana, draw and ready the creatures of the player to move.
///
/// Past the turn limit the deck is emptied first, so every draw misses.
/// Each missed draw drops the player's health to their next rune.
pub(crate) fn start_turn(state: &mut GameState, events: &mut Events) {
    let me = state.current_player;
    let turn = state.turn;
    let config = state.config;
    let player = &mut state.players[me];

    if turn > config.turn_limit && !player.deck.is_empty() {
        debug!(player = %me, turn, "turn limit reached, deck removed");
        player.deck.clear();
    }

    player.base_mana = (player.base_mana + 1).min(config.mana_cap);
    player.mana = player.base_mana;
    for lane in &mut player.lanes {
        lane.iter_mut().for_each(Creature::refresh);
    }
    events.push(GameEvent::TurnStarted { player: me, turn });

    let draws = 1 + std::mem::take(&mut player.bonus_draw);
    let mut missed = 0;
    for _ in 0..draws {
        match player.draw(config.hand_capacity) {
            Ok(card) => events.push(GameEvent::CardDrawn { player: me, card }),
            Err(GameError::FullHand) => {
                if let Some(card) = player.burn_top() {
                    events.push(GameEvent::CardBurned {
                        player: me,
                        card: card.id,
                    });
                }
            }
            // Each failed draw reports one miss; the total drives fatigue.
            Err(GameError::EmptyDeck { missed_draws }) => missed += missed_draws,
            Err(_) => {}
        }
    }

    if missed > 0 {
        for _ in 0..missed {
            let fatigue = player.health - player.next_rune;
            player.damage(fatigue, config.rune_step);
        }
        events.push(GameEvent::DeckExhausted {
            player: me,
            missed_draws: missed,
        });
    }
}

// ===== Legal actions =====

pub(crate) fn legal_actions(state: &GameState) -> Vec<Action> {
    let player = state.current();
    let enemy = state.opponent();
    let mut actions = vec![Action::Pass];

    for card in player.hand.iter().filter(|c| c.cost() <= player.mana) {
        match card.card_type() {
            CardType::Creature => {
                for lane in Lane::ALL {
                    if player.lane(lane).len() < state.config.lane_capacity {
                        actions.push(Action::Summon { card: card.id, lane });
                    }
                }
            }
            CardType::GreenItem => {
                for (_, creature) in player.creatures() {
                    actions.push(Action::Use {
                        item: card.id,
                        target: Target::Creature(creature.id()),
                    });
                }
            }
            CardType::RedItem | CardType::BlueItem => {
                if card.card_type() == CardType::BlueItem {
                    actions.push(Action::Use {
                        item: card.id,
                        target: Target::Player,
                    });
                }
                for (_, creature) in enemy.creatures() {
                    actions.push(Action::Use {
                        item: card.id,
                        target: Target::Creature(creature.id()),
                    });
                }
            }
        }
    }

    for (lane, creature) in player.creatures().filter(|(_, c)| c.is_ready()) {
        let defenders = enemy.lane(lane);
        let guards: SmallVec<[InstanceId; 3]> = defenders
            .iter()
            .filter(|c| c.has(Keyword::Guard))
            .map(Creature::id)
            .collect();

        if guards.is_empty() {
            actions.push(Action::Attack {
                attacker: creature.id(),
                target: Target::Player,
            });
            actions.extend(defenders.iter().map(|d| Action::Attack {
                attacker: creature.id(),
                target: Target::Creature(d.id()),
            }));
        } else {
            actions.extend(guards.into_iter().map(|g| Action::Attack {
                attacker: creature.id(),
                target: Target::Creature(g),
            }));
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardTemplate, Keywords};
    use crate::core::{GameConfig, PlayerPair};

    fn filler() -> CardTemplate {
        CardTemplate::creature(CardId::new(99), 1, 1, 1)
    }

    /// A battle with ten filler cards per deck and empty hands.
    fn battle() -> GameState {
        let decks = PlayerPair::with_value(vec![filler(); 10]);
        let mut state = GameState::from_decks(GameConfig::default(), decks, 5).unwrap();
        for (_, player) in state.players.iter_mut() {
            player.hand.clear();
            player.mana = 10;
            player.base_mana = 10;
        }
        state
    }

    fn put_in_hand(state: &mut GameState, player: PlayerOrder, template: CardTemplate) -> InstanceId {
        let card = state.create_card(template);
        state.players[player].hand.push(card);
        card.id
    }

    fn put_on_board(
        state: &mut GameState,
        player: PlayerOrder,
        lane: Lane,
        template: CardTemplate,
    ) -> InstanceId {
        let card = state.create_card(template);
        let mut creature = Creature::summon(card);
        creature.refresh();
        state.players[player].lane_mut(lane).push(creature);
        card.id
    }

    #[test]
    fn test_begin_battle_deals_opening_hands() {
        let decks = PlayerPair::with_value(vec![filler(); 30]);
        let state = GameState::from_decks(GameConfig::default(), decks, 1).unwrap();

        assert_eq!(state.phase, Phase::Battle);
        // FIRST has drawn for turn 1 already.
        assert_eq!(state.players[PlayerOrder::First].hand.len(), 5);
        assert_eq!(state.players[PlayerOrder::Second].hand.len(), 5);
        assert_eq!(state.players[PlayerOrder::First].mana, 1);
        assert_eq!(state.players[PlayerOrder::Second].mana, 0);
    }

    #[test]
    fn test_summon_spends_mana_and_applies_effects() {
        let mut state = battle();
        let template = CardTemplate::creature(CardId::new(1), 3, 2, 2)
            .with_player_hp(2)
            .with_enemy_hp(-3)
            .with_card_draw(1);
        let id = put_in_hand(&mut state, PlayerOrder::First, template);

        state.act(&Action::Summon { card: id, lane: Lane::Right }).unwrap();

        let me = &state.players[PlayerOrder::First];
        assert_eq!(me.mana, 7);
        assert_eq!(me.health, 32);
        assert_eq!(me.bonus_draw, 1);
        assert_eq!(me.lane(Lane::Right).len(), 1);
        assert!(!me.lane(Lane::Right)[0].is_ready());
        assert_eq!(state.players[PlayerOrder::Second].health, 27);
    }

    #[test]
    fn test_charge_attacks_immediately() {
        let mut state = battle();
        let template = CardTemplate::creature(CardId::new(1), 1, 4, 1).with_keyword(Keyword::Charge);
        let id = put_in_hand(&mut state, PlayerOrder::First, template);

        state.act(&Action::Summon { card: id, lane: Lane::Left }).unwrap();
        state.act(&Action::Attack { attacker: id, target: Target::Player }).unwrap();

        assert_eq!(state.players[PlayerOrder::Second].health, 26);
        assert!(state
            .act(&Action::Attack { attacker: id, target: Target::Player })
            .is_err());
    }

    #[test]
    fn test_full_lane_rejected() {
        let mut state = battle();
        for _ in 0..3 {
            put_on_board(&mut state, PlayerOrder::First, Lane::Left, filler());
        }
        let id = put_in_hand(&mut state, PlayerOrder::First, filler());

        assert_eq!(
            state.act(&Action::Summon { card: id, lane: Lane::Left }),
            Err(GameError::FullLane(Lane::Left))
        );
        assert!(state.act(&Action::Summon { card: id, lane: Lane::Right }).is_ok());
    }

    #[test]
    fn test_guard_must_be_attacked_first() {
        let mut state = battle();
        let attacker = put_on_board(&mut state, PlayerOrder::First, Lane::Left, filler());
        let plain = put_on_board(&mut state, PlayerOrder::Second, Lane::Left, filler());
        let guard = put_on_board(
            &mut state,
            PlayerOrder::Second,
            Lane::Left,
            CardTemplate::creature(CardId::new(2), 1, 0, 5).with_keyword(Keyword::Guard),
        );

        let legal = legal_actions(&state);
        assert!(legal.contains(&Action::Attack { attacker, target: Target::Creature(guard) }));
        assert!(!legal.contains(&Action::Attack { attacker, target: Target::Player }));
        assert!(!legal.contains(&Action::Attack { attacker, target: Target::Creature(plain) }));

        assert!(state.act(&Action::Attack { attacker, target: Target::Player }).is_err());
        assert!(state
            .act(&Action::Attack { attacker, target: Target::Creature(plain) })
            .is_err());
        assert!(state
            .act(&Action::Attack { attacker, target: Target::Creature(guard) })
            .is_ok());
    }

    #[test]
    fn test_attacks_stay_in_lane() {
        let mut state = battle();
        let attacker = put_on_board(&mut state, PlayerOrder::First, Lane::Left, filler());
        let other_lane = put_on_board(&mut state, PlayerOrder::Second, Lane::Right, filler());

        assert!(state
            .act(&Action::Attack { attacker, target: Target::Creature(other_lane) })
            .is_err());
    }

    #[test]
    fn test_combat_trades_damage() {
        let mut state = battle();
        let attacker = put_on_board(
            &mut state,
            PlayerOrder::First,
            Lane::Left,
            CardTemplate::creature(CardId::new(1), 3, 3, 4),
        );
        let defender = put_on_board(
            &mut state,
            PlayerOrder::Second,
            Lane::Left,
            CardTemplate::creature(CardId::new(2), 2, 2, 3),
        );

        let events = state
            .act(&Action::Attack { attacker, target: Target::Creature(defender) })
            .unwrap();

        assert!(events.contains(&GameEvent::CreatureDied {
            player: PlayerOrder::Second,
            creature: defender,
        }));
        let survivor = state.players[PlayerOrder::First].creature(attacker).unwrap();
        assert_eq!(survivor.defense, 2);
        assert!(survivor.has_attacked);
    }

    #[test]
    fn test_lethal_breakthrough_drain() {
        let mut state = battle();
        let keywords = Keywords::from_slice(&[Keyword::Lethal, Keyword::Breakthrough, Keyword::Drain]);
        let attacker = put_on_board(
            &mut state,
            PlayerOrder::First,
            Lane::Right,
            CardTemplate::creature(CardId::new(1), 5, 5, 5).with_keywords(keywords),
        );
        let defender = put_on_board(
            &mut state,
            PlayerOrder::Second,
            Lane::Right,
            CardTemplate::creature(CardId::new(2), 5, 1, 8),
        );

        state
            .act(&Action::Attack { attacker, target: Target::Creature(defender) })
            .unwrap();

        assert!(state.players[PlayerOrder::Second].creature(defender).is_none());
        // 5 damage into 8 defense: lethal kills, no excess carries over.
        assert_eq!(state.players[PlayerOrder::Second].health, 30);
        assert_eq!(state.players[PlayerOrder::First].health, 35);
    }

    #[test]
    fn test_breakthrough_excess_hits_face() {
        let mut state = battle();
        let attacker = put_on_board(
            &mut state,
            PlayerOrder::First,
            Lane::Left,
            CardTemplate::creature(CardId::new(1), 5, 6, 5).with_keyword(Keyword::Breakthrough),
        );
        let defender = put_on_board(
            &mut state,
            PlayerOrder::Second,
            Lane::Left,
            CardTemplate::creature(CardId::new(2), 1, 1, 2),
        );

        state
            .act(&Action::Attack { attacker, target: Target::Creature(defender) })
            .unwrap();

        assert_eq!(state.players[PlayerOrder::Second].health, 26);
    }

    #[test]
    fn test_items() {
        let mut state = battle();
        let mine = put_on_board(&mut state, PlayerOrder::First, Lane::Left, filler());
        let theirs = put_on_board(
            &mut state,
            PlayerOrder::Second,
            Lane::Left,
            CardTemplate::creature(CardId::new(2), 3, 3, 3)
                .with_keywords(Keywords::from_slice(&[Keyword::Guard, Keyword::Ward])),
        );

        let green = put_in_hand(
            &mut state,
            PlayerOrder::First,
            CardTemplate::green_item(CardId::new(3), 1, 2, 1).with_keyword(Keyword::Lethal),
        );
        let red = put_in_hand(
            &mut state,
            PlayerOrder::First,
            CardTemplate::red_item(CardId::new(4), 2, -1, -1)
                .with_keywords(Keywords::from_slice(&[Keyword::Ward])),
        );
        let blue = put_in_hand(
            &mut state,
            PlayerOrder::First,
            CardTemplate::blue_item(CardId::new(5), 2, 0, -3),
        );

        // Green targets only own creatures.
        assert!(state.act(&Action::Use { item: green, target: Target::Creature(theirs) }).is_err());
        state.act(&Action::Use { item: green, target: Target::Creature(mine) }).unwrap();
        let buffed = state.players[PlayerOrder::First].creature(mine).unwrap();
        assert_eq!((buffed.attack, buffed.defense), (3, 2));
        assert!(buffed.has(Keyword::Lethal));

        // Red strips ward before dealing its damage.
        state.act(&Action::Use { item: red, target: Target::Creature(theirs) }).unwrap();
        let debuffed = state.players[PlayerOrder::Second].creature(theirs).unwrap();
        assert!(!debuffed.has(Keyword::Ward));
        assert!(debuffed.has(Keyword::Guard));
        assert_eq!((debuffed.attack, debuffed.defense), (2, 2));

        // Blue may hit the face.
        state.act(&Action::Use { item: blue, target: Target::Player }).unwrap();
        assert_eq!(state.players[PlayerOrder::Second].health, 27);
        assert_eq!(state.players[PlayerOrder::First].mana, 5);
    }

    #[test]
    fn test_pass_starts_next_turn() {
        let mut state = battle();
        put_on_board(&mut state, PlayerOrder::Second, Lane::Left, filler());
        if let Some(c) = state.players[PlayerOrder::Second].lane_mut(Lane::Left).get_mut(0) {
            c.has_attacked = true;
        }

        let events = state.act(&Action::Pass).unwrap();
        assert_eq!(state.current_player, PlayerOrder::Second);
        assert_eq!(state.turn, 1);
        assert!(events.contains(&GameEvent::TurnStarted {
            player: PlayerOrder::Second,
            turn: 1,
        }));

        let second = &state.players[PlayerOrder::Second];
        assert_eq!(second.base_mana, 11);
        assert_eq!(second.mana, 11);
        assert_eq!(second.hand.len(), 1);
        assert!(second.lane(Lane::Left)[0].is_ready());

        state.act(&Action::Pass).unwrap();
        assert_eq!(state.turn, 2);
        assert_eq!(state.players[PlayerOrder::First].base_mana, 11);
    }

    #[test]
    fn test_mana_is_capped() {
        let mut state = battle();
        state.players[PlayerOrder::Second].base_mana = 12;

        state.act(&Action::Pass).unwrap();
        assert_eq!(state.players[PlayerOrder::Second].mana, 12);
    }

    #[test]
    fn test_full_hand_burns_card() {
        let mut state = battle();
        for _ in 0..8 {
            put_in_hand(&mut state, PlayerOrder::Second, filler());
        }
        let deck_before = state.players[PlayerOrder::Second].deck.len();

        let events = state.act(&Action::Pass).unwrap();

        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::CardBurned { player: PlayerOrder::Second, .. })));
        assert_eq!(state.players[PlayerOrder::Second].hand.len(), 8);
        assert_eq!(state.players[PlayerOrder::Second].deck.len(), deck_before - 1);
    }

    #[test]
    fn test_empty_deck_fatigue() {
        let mut state = battle();
        state.players[PlayerOrder::Second].deck.clear();
        state.players[PlayerOrder::Second].bonus_draw = 1;

        let events = state.act(&Action::Pass).unwrap();

        assert!(events.contains(&GameEvent::DeckExhausted {
            player: PlayerOrder::Second,
            missed_draws: 2,
        }));
        let second = &state.players[PlayerOrder::Second];
        assert_eq!(second.health, 20);
        assert_eq!(second.next_rune, 15);
        assert_eq!(second.bonus_draw, 2);
    }

    #[test]
    fn test_turn_limit_empties_deck() {
        let mut state = battle();
        state.turn = state.config.turn_limit;

        state.act(&Action::Pass).unwrap();
        assert!(!state.players[PlayerOrder::Second].deck.is_empty());

        state.act(&Action::Pass).unwrap();
        assert_eq!(state.turn, state.config.turn_limit + 1);
        assert!(state.players[PlayerOrder::First].deck.is_empty());
        assert!(state.players[PlayerOrder::First].health < 30);
    }

    #[test]
    fn test_legal_actions_are_accepted() {
        let mut state = battle();
        put_on_board(&mut state, PlayerOrder::First, Lane::Left, filler());
        put_on_board(&mut state, PlayerOrder::Second, Lane::Left, filler());
        put_in_hand(&mut state, PlayerOrder::First, filler());
        put_in_hand(&mut state, PlayerOrder::First, CardTemplate::blue_item(CardId::new(5), 1, 0, -1));
        put_in_hand(&mut state, PlayerOrder::First, CardTemplate::green_item(CardId::new(6), 1, 1, 1));

        let legal = legal_actions(&state);
        assert_eq!(legal[0], Action::Pass);
        // 2 summons, 2 blue targets, 1 green target, 2 attack targets, pass.
        assert_eq!(legal.len(), 8);

        for action in legal {
            let mut copy = state.clone();
            assert!(copy.act(&action).is_ok(), "{} rejected", action);
        }
    }
}
