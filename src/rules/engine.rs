//! The rules engine entry points on `GameState`.
//!
//! - `act`: validate and apply one action, or reject it untouched
//! - `legal_actions`: every action `act` would accept right now
//! - `is_terminal`: whether the game has ended
//!
//! After every applied action (including the turn start a PASS triggers)
//! the engine checks health: if the acting player's opponent is at zero or
//! below the acting player wins, otherwise if the acting player is at zero
//! or below the opponent wins. Simultaneous deaths therefore never draw.

use tracing::{debug, trace};

use crate::core::{Action, Events, GameError, GameEvent, GameState, Phase, PlayerOrder};

use super::{battle, draft};

impl GameState {
    /// Apply an action for the player to move.
    ///
    /// Returns the events the action caused. On error the state is
    /// unchanged and the error is always of the illegal-action family.
    ///
    /// ```
    /// use rust_locm::core::{Action, GameConfig, GameState, PlayerOrder};
    ///
    /// let mut state = GameState::new(GameConfig::default(), 42).unwrap();
    /// state.act(&Action::Pick { choice: 1 }).unwrap();
    /// assert_eq!(state.current_player, PlayerOrder::Second);
    ///
    /// assert!(state.act(&Action::Pick { choice: 7 }).is_err());
    /// ```
    pub fn act(&mut self, action: &Action) -> Result<Events, GameError> {
        let actor = self.current_player;
        let mut events = Events::new();

        match self.phase {
            Phase::Draft => {
                let template = draft::validate(self, action)?;
                draft::apply(self, template, &mut events);
            }
            Phase::Battle => {
                let plan = battle::validate(self, action)?;
                battle::apply(self, plan, &mut events);
            }
            Phase::Ended => return Err(GameError::malformed("the game is over")),
        }

        trace!(player = %actor, %action, events = events.len(), "applied action");
        self.check_winner(actor, &mut events);
        Ok(events)
    }

    /// Every action `act` accepts in the current state.
    ///
    /// Empty once the game has ended. During the battle PASS is always first.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase {
            Phase::Draft => draft::legal_actions(self),
            Phase::Battle => battle::legal_actions(self),
            Phase::Ended => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Ended
    }

    fn check_winner(&mut self, actor: PlayerOrder, events: &mut Events) {
        if self.phase == Phase::Ended {
            return;
        }

        let winner = if self.players[actor.opposing()].is_dead() {
            actor
        } else if self.players[actor].is_dead() {
            actor.opposing()
        } else {
            return;
        };

        self.phase = Phase::Ended;
        self.winner = Some(winner);
        events.push(GameEvent::PhaseChanged { phase: Phase::Ended });
        events.push(GameEvent::GameEnded { winner });
        debug!(
            %winner,
            turn = self.turn,
            first_health = self.players[PlayerOrder::First].health,
            second_health = self.players[PlayerOrder::Second].health,
            "game ended"
        );
    }
}
