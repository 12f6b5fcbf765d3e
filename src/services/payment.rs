//! Payment handling
//!
//! Applies a payment against a boat's outstanding balance. The balance is
//! never allowed to go negative: a payment larger than the balance is
//! rejected wholesale rather than clamped.

use crate::error::{MarinaError, MarinaResult};
use crate::fleet::Fleet;
use crate::models::Money;

/// Apply a payment to the named boat, returning the new balance
///
/// Fails with `NotFound` if no boat matches, `InvalidAmount` if the payment
/// is zero or negative, and `Overpayment` if it exceeds the balance. On any
/// failure the balance is untouched.
pub fn apply_payment(fleet: &mut Fleet, name: &str, payment: Money) -> MarinaResult<Money> {
    let index = fleet
        .find_by_name(name)
        .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;

    if !payment.is_positive() {
        return Err(MarinaError::InvalidAmount(payment));
    }

    let boat = fleet
        .get_mut(index)
        .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;

    if payment > boat.amount_owed {
        return Err(MarinaError::Overpayment {
            owed: boat.amount_owed,
            payment,
        });
    }

    boat.amount_owed -= payment;
    Ok(boat.amount_owed)
}
