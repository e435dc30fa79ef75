//! Player identification and per-player data storage.
//!
//! ## PlayerOrder
//!
//! The game is strictly two-player: `First` opens the draft and the battle,
//! `Second` follows.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage indexed by `PlayerOrder`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat of a player in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerOrder {
    First,
    Second,
}

impl PlayerOrder {
    /// Both seats, in turn order.
    pub const ALL: [PlayerOrder; 2] = [PlayerOrder::First, PlayerOrder::Second];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerOrder::First => 0,
            PlayerOrder::Second => 1,
        }
    }

    /// The other seat.
    ///
    /// ```
    /// use rust_locm::core::PlayerOrder;
    ///
    /// assert_eq!(PlayerOrder::First.opposing(), PlayerOrder::Second);
    /// assert_eq!(PlayerOrder::Second.opposing(), PlayerOrder::First);
    /// ```
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            PlayerOrder::First => PlayerOrder::Second,
            PlayerOrder::Second => PlayerOrder::First,
        }
    }
}

impl std::fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerOrder::First => write!(f, "First"),
            PlayerOrder::Second => write!(f, "Second"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_locm::core::{PlayerOrder, PlayerPair};
///
/// let mut health = PlayerPair::with_value(30);
/// health[PlayerOrder::Second] -= 5;
///
/// assert_eq!(health[PlayerOrder::First], 30);
/// assert_eq!(health[PlayerOrder::Second], 25);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerOrder) -> T) -> Self {
        Self {
            data: [factory(PlayerOrder::First), factory(PlayerOrder::Second)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a pair from explicit first/second values.
    pub fn from_parts(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Mutable access to both entries at once, in `(player, opponent)` order.
    pub fn split_mut(&mut self, player: PlayerOrder) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match player {
            PlayerOrder::First => (first, second),
            PlayerOrder::Second => (second, first),
        }
    }

    /// Iterate over (PlayerOrder, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerOrder, &T)> {
        PlayerOrder::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerOrder, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerOrder, &mut T)> {
        PlayerOrder::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerOrder> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerOrder) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerOrder> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerOrder) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_order_basics() {
        assert_eq!(PlayerOrder::First.index(), 0);
        assert_eq!(PlayerOrder::Second.index(), 1);
        assert_eq!(format!("{}", PlayerOrder::Second), "Second");
        assert_eq!(PlayerOrder::First.opposing().opposing(), PlayerOrder::First);
    }

    #[test]
    fn test_player_pair_new() {
        let pair = PlayerPair::new(|p| p.index() as i32 * 10);

        assert_eq!(pair[PlayerOrder::First], 0);
        assert_eq!(pair[PlayerOrder::Second], 10);
    }

    #[test]
    fn test_split_mut() {
        let mut pair = PlayerPair::from_parts(1, 2);

        let (me, them) = pair.split_mut(PlayerOrder::Second);
        *me += 10;
        *them += 100;

        assert_eq!(pair[PlayerOrder::First], 101);
        assert_eq!(pair[PlayerOrder::Second], 12);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::from_parts("a", "b");
        let items: Vec<_> = pair.iter().collect();

        assert_eq!(items, vec![(PlayerOrder::First, &"a"), (PlayerOrder::Second, &"b")]);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::from_parts(30, 25);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
