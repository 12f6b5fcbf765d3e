//! Business logic layer
//!
//! Batch billing and payment operations over the fleet.

pub mod billing;
pub mod payment;

pub use billing::apply_monthly_charges;
pub use payment::apply_payment;
