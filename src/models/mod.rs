//! Core data models
//!
//! Record types for the marina inventory: the boat entity, its storage
//! category and location payload, and the money type used for balances.

pub mod boat;
pub mod money;

pub use boat::{Boat, Location, StorageCategory, MAX_NAME_LEN, MAX_TAG_LEN};
pub use money::{Money, MoneyParseError};
