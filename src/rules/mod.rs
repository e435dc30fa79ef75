//! Game rules.
//!
//! `engine` adds `act`, `legal_actions` and `is_terminal` to `GameState`
//! and dispatches by phase to `draft` and `battle`. Every action is
//! validated in full before anything is written, so a rejected action
//! leaves the state exactly as it was.

pub mod engine;
pub(crate) mod draft;
pub(crate) mod battle;
