//! Scoring rules used by the search.
//!
//! - `uct`: selection score while descending the tree
//! - `average_reward`: final move choice at the root
//! - `playout_reward`: signed reward of a finished playout

use crate::core::PlayerOrder;

/// Upper confidence bound for trees.
///
/// Formula: Q/N + c * sqrt(ln(N_parent) / N). Unvisited nodes score
/// infinity.
#[must_use]
pub fn uct(total_reward: f64, visits: u32, parent_visits: u32, exploration: f64) -> f64 {
    if visits == 0 {
        return f64::INFINITY;
    }
    let n = f64::from(visits);
    let log_parent = f64::from(parent_visits.max(1)).ln();
    total_reward / n + exploration * (log_parent / n).sqrt()
}

/// Mean reward. Unvisited nodes score negative infinity so they are never
/// chosen over a visited one.
#[must_use]
pub fn average_reward(total_reward: f64, visits: u32) -> f64 {
    if visits == 0 {
        f64::NEG_INFINITY
    } else {
        total_reward / f64::from(visits)
    }
}

/// +1 if FIRST won, -1 if SECOND won, 0 without a winner.
#[must_use]
pub fn playout_reward(winner: Option<PlayerOrder>) -> f64 {
    match winner {
        Some(PlayerOrder::First) => 1.0,
        Some(PlayerOrder::Second) => -1.0,
        None => 0.0,
    }
}

/// Index of the first maximum of `scores`.
pub(crate) fn first_max(scores: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}
