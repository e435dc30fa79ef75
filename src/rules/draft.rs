//! Draft phase rules.
//!
//! Each draft turn offers the same templates to both seats. FIRST picks,
//! then SECOND picks from the same offer, then the next offer comes up.
//! After the last offer the battle begins.

use crate::cards::CardTemplate;
use crate::core::{Action, Events, GameError, GameEvent, GameState, PlayerOrder};

use super::battle;

/// Check a draft action, returning the template it picks.
pub(crate) fn validate(state: &GameState, action: &Action) -> Result<CardTemplate, GameError> {
    match *action {
        Action::Pick { choice } => {
            let offer = state
                .current_offer()
                .ok_or_else(|| GameError::malformed("no draft offer is open"))?;
            offer.get(choice).copied().ok_or_else(|| {
                GameError::malformed(format!(
                    "choice {} out of range, {} cards offered",
                    choice,
                    offer.len()
                ))
            })
        }
        other => Err(GameError::malformed(format!(
            "{:?} is not allowed during the draft",
            other.kind()
        ))),
    }
}

/// Apply a validated pick.
pub(crate) fn apply(state: &mut GameState, template: CardTemplate, events: &mut Events) {
    let picker = state.current_player;
    let card = state.create_card(template);
    state.players[picker].deck.push_back(card);
    events.push(GameEvent::CardPicked {
        player: picker,
        card: card.id,
        template: template.id,
    });

    match picker {
        PlayerOrder::First => state.current_player = PlayerOrder::Second,
        PlayerOrder::Second => {
            state.current_player = PlayerOrder::First;
            state.draft.pop_front();
            if state.draft.is_empty() {
                battle::begin_battle(state, events);
            } else {
                state.turn += 1;
            }
        }
    }
}

/// One pick per offered card.
pub(crate) fn legal_actions(state: &GameState) -> Vec<Action> {
    let offered = state.current_offer().map_or(0, |offer| offer.len());
    (0..offered).map(|choice| Action::Pick { choice }).collect()
}
