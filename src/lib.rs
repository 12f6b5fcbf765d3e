//! Marina boat inventory manager
//!
//! Tracks boats, their storage assignments, and outstanding balances for a
//! marina, persisting everything to a flat text file between runs (one
//! record per line, five comma-separated fields, no header, no escaping).
//!
//! # Architecture
//!
//! - `models`: the boat record, its storage category and location payload,
//!   and the cents-based money type
//! - `codec`: line-level parse/format for the persisted record format
//! - `fleet`: the in-memory store, sorted by name and capacity-bounded
//! - `services`: monthly billing and payment operations
//! - `storage`: load at startup, save at shutdown
//! - `display`: inventory listing
//! - `shell`: the interactive single-letter menu loop
//! - `error`: the error taxonomy

pub mod codec;
pub mod display;
pub mod error;
pub mod fleet;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{MarinaError, MarinaResult};
pub use fleet::Fleet;
