//! Sequential match runner.
//!
//! Plays agents against each other on fresh games. Game `i` of a match is
//! seeded with `seed + i`, so a match is reproducible from its seed.

use thiserror::Error;
use tracing::{debug, info};

use crate::agents::Agent;
use crate::core::{ConfigError, GameConfig, GameError, GameState, PlayerOrder, PlayerPair};

/// Agents seated for a match, indexed by seat.
pub type Seats = PlayerPair<Box<dyn Agent>>;

/// Match failure.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An agent proposed an action the rules rejected.
    #[error("game {game}: {source}")]
    Game {
        game: u32,
        #[source]
        source: GameError,
    },
}

/// Tally of a finished match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub games: u32,
    pub wins: PlayerPair<u32>,
}

impl MatchResult {
    /// Share of games won by `player`, 0 for an empty match.
    #[must_use]
    pub fn win_rate(&self, player: PlayerOrder) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(self.games)
        }
    }
}

/// Drive `state` to the end, asking the agent of the player to move.
///
/// Returns the winner. Fails on the first rejected action, leaving `state`
/// as it was before that action.
pub fn play_game(state: &mut GameState, agents: &mut Seats) -> Result<Option<PlayerOrder>, GameError> {
    let mut actions = 0u32;
    while !state.is_terminal() {
        let action = agents[state.current_player].act(state);
        state.act(&action)?;
        actions += 1;
    }
    debug!(actions, winner = ?state.winner, "game finished");
    Ok(state.winner)
}

/// Play `games` games between the seated agents.
pub fn run_match(
    config: GameConfig,
    agents: &mut Seats,
    games: u32,
    seed: u64,
) -> Result<MatchResult, MatchError> {
    config.validate()?;
    let mut result = MatchResult::default();

    for game in 0..games {
        let mut state = GameState::new(config, seed.wrapping_add(u64::from(game)))?;
        let winner = play_game(&mut state, agents).map_err(|source| MatchError::Game { game, source })?;

        result.games += 1;
        if let Some(winner) = winner {
            result.wins[winner] += 1;
        }
        info!(
            game = result.games,
            first_win_rate = result.win_rate(PlayerOrder::First),
            "game recorded"
        );
    }

    Ok(result)
}
