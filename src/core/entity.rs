//! Card instance identification.
//!
//! Every card that exists in a game (drafted into a deck, held in hand or
//! standing in a lane) carries an `InstanceId` that is unique within one
//! `GameState`. Ids are allocated sequentially as cards are created and are
//! never reused, so a card keeps its id when it moves between zones.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_id() {
        let id = InstanceId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(InstanceId::from(42), id);
        assert_eq!(format!("{}", id), "#42");
    }

    #[test]
    fn test_ordering() {
        assert!(InstanceId(1) < InstanceId(2));
    }
}
