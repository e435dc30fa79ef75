//! Max-attack heuristic agent.
//!
//! Draft: take the offered card with the highest attack.
//! Battle, in priority order: summon the strongest affordable creature,
//! attack the enemy player, attack a creature, use an item, pass.

use crate::cards::CardTemplate;
use crate::core::{Action, GameState, InstanceId, Phase, Target};

use super::Agent;

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn score(state: &GameState, action: &Action) -> i32 {
        let attack_of = |id: InstanceId| {
            state
                .current()
                .hand
                .iter()
                .find(|c| c.id == id)
                .map_or(0, |c| c.template.attack)
        };

        match *action {
            Action::Pick { choice } => state
                .current_offer()
                .and_then(|offer| offer.get(choice))
                .map_or(i32::MIN, |t: &CardTemplate| t.attack),
            Action::Summon { card, .. } => 1000 + attack_of(card),
            Action::Attack { target: Target::Player, .. } => 500,
            Action::Attack { .. } => 100,
            Action::Use { .. } => 10,
            Action::Pass => 0,
        }
    }
}

impl Agent for GreedyAgent {
    fn act(&mut self, state: &GameState) -> Action {
        let actions = state.legal_actions();
        let mut best: Option<(Action, i32)> = None;
        for action in actions {
            let score = Self::score(state, &action);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((action, score)),
            }
        }

        match best {
            Some((action, _)) => action,
            None if state.phase == Phase::Draft => Action::Pick { choice: 0 },
            None => Action::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardPool};
    use crate::core::{GameConfig, Lane, PlayerOrder, PlayerPair};

    #[test]
    fn test_drafts_highest_attack() {
        let pool = CardPool::from_templates(vec![
            CardTemplate::creature(CardId::new(1), 2, 1, 3),
            CardTemplate::creature(CardId::new(2), 2, 4, 1),
            CardTemplate::creature(CardId::new(3), 2, 2, 2),
        ])
        .unwrap();
        let state = GameState::with_pool(GameConfig::default(), &pool, 3).unwrap();
        let offer = state.current_offer().unwrap();
        let strongest = offer.iter().position(|t| t.id == CardId::new(2)).unwrap();

        assert_eq!(GreedyAgent::new().act(&state), Action::Pick { choice: strongest });
    }

    #[test]
    fn test_summons_then_goes_face() {
        let weak = CardTemplate::creature(CardId::new(1), 1, 1, 1);
        let decks = PlayerPair::with_value(vec![weak; 10]);
        let mut state = GameState::from_decks(GameConfig::default(), decks, 2).unwrap();
        let me = PlayerOrder::First;
        state.players[me].hand.clear();
        state.players[me].mana = 5;

        let big = state.create_card(CardTemplate::creature(CardId::new(2), 4, 5, 5));
        let small = state.create_card(CardTemplate::creature(CardId::new(3), 1, 2, 2));
        state.players[me].hand.push(small);
        state.players[me].hand.push(big);

        let mut agent = GreedyAgent::new();
        let action = agent.act(&state);
        assert_eq!(action, Action::Summon { card: big.id, lane: Lane::Left });
        state.act(&action).unwrap();

        let ready = state.create_card(CardTemplate::creature(CardId::new(4), 1, 3, 3));
        let mut creature = crate::cards::Creature::summon(ready);
        creature.refresh();
        state.players[me].lane_mut(Lane::Right).push(creature);
        state.players[me].mana = 0;

        assert_eq!(
            agent.act(&state),
            Action::Attack { attacker: ready.id, target: Target::Player }
        );
    }

    #[test]
    fn test_passes_when_nothing_to_do() {
        let weak = CardTemplate::creature(CardId::new(1), 9, 1, 1);
        let decks = PlayerPair::with_value(vec![weak; 10]);
        let state = GameState::from_decks(GameConfig::default(), decks, 2).unwrap();

        assert_eq!(GreedyAgent::new().act(&state), Action::Pass);
    }
}
