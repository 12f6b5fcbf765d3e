//! Monthly billing pass
//!
//! Applies each category's per-foot monthly rate across the whole fleet.

use crate::fleet::Fleet;

/// Add one month of charges to every boat with a known category
///
/// Each eligible boat's balance grows by `rate(category) * length`; boats
/// with an unknown category have a zero rate and are skipped. Returns the
/// number of boats billed.
pub fn apply_monthly_charges(fleet: &mut Fleet) -> usize {
    let mut billed = 0;
    for boat in fleet.iter_mut() {
        let category = boat.category();
        if !category.is_known() {
            continue;
        }
        boat.amount_owed += category.monthly_rate().times(boat.length);
        billed += 1;
    }
    billed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Boat, Location, Money};

    #[test]
    fn test_charges_are_rate_times_length() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new(
                "Neptune",
                20,
                Location::Slip(15),
                Money::from_cents(10000),
            ))
            .unwrap();

        let billed = apply_monthly_charges(&mut fleet);

        // 100.00 + 12.50 * 20 = 350.00
        assert_eq!(billed, 1);
        assert_eq!(fleet.get(0).unwrap().amount_owed.cents(), 35000);
    }

    #[test]
    fn test_every_category_rate() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new("A", 10, Location::Slip(1), Money::zero()))
            .unwrap();
        fleet
            .insert(Boat::new("B", 10, Location::Land('C'), Money::zero()))
            .unwrap();
        fleet
            .insert(Boat::new("C", 10, Location::trailer("T1"), Money::zero()))
            .unwrap();
        fleet
            .insert(Boat::new("D", 10, Location::Storage(5), Money::zero()))
            .unwrap();

        assert_eq!(apply_monthly_charges(&mut fleet), 4);

        let owed: Vec<i64> = fleet.iter().map(|b| b.amount_owed.cents()).collect();
        // sorted by name: A=slip, B=land, C=trailer, D=storage
        assert_eq!(owed, vec![12500, 14000, 25000, 11200]);
    }

    #[test]
    fn test_unknown_category_is_skipped() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new(
                "Mystery",
                30,
                Location::Unassigned,
                Money::from_cents(5000),
            ))
            .unwrap();

        assert_eq!(apply_monthly_charges(&mut fleet), 0);
        assert_eq!(fleet.get(0).unwrap().amount_owed.cents(), 5000);
    }

    #[test]
    fn test_repeated_passes_accumulate() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new("Neptune", 20, Location::Slip(15), Money::zero()))
            .unwrap();

        apply_monthly_charges(&mut fleet);
        apply_monthly_charges(&mut fleet);

        assert_eq!(fleet.get(0).unwrap().amount_owed.cents(), 50000);
    }
}
