//! Core engine types: instance ids, players, state, actions, events,
//! errors, RNG and configuration.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod event;
pub mod state;

pub use entity::InstanceId;
pub use player::{PlayerOrder, PlayerPair};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, ErrorFamily, GameError};
pub use action::{Action, ActionType, Target};
pub use event::{Events, GameEvent};
pub use state::{GameState, Hand, Lane, LaneSlots, Offer, Phase, Player};
