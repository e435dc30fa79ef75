//! Card system: templates, instances, and the card pool.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Static card data (type, cost, stats, keywords, effects)
//! - `Card`: A template bound to a unique `InstanceId`
//! - `Creature`: A summoned card with mutable combat state
//! - `CardPool`: Templates the draft offers from

pub mod definition;
pub mod instance;
pub mod pool;

pub use definition::{CardId, CardTemplate, CardType, Keyword, Keywords};
pub use instance::{Card, Creature};
pub use pool::CardPool;
