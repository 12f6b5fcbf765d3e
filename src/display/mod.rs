//! Terminal output formatting
//!
//! Formats the fleet for the inventory listing.

use crate::fleet::Fleet;

/// Format the fleet as an aligned table, in sorted order
pub fn format_inventory(fleet: &Fleet) -> String {
    if fleet.is_empty() {
        return "No boats in the marina.\n".to_string();
    }

    let name_width = fleet
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let location_width = fleet
        .iter()
        .map(|b| b.location.describe().chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>6}  {:<8}  {:<location_width$}  {:>12}\n",
        "Name",
        "Length",
        "Type",
        "Location",
        "Amount Owed",
        name_width = name_width,
        location_width = location_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->6}  {:-<8}  {:-<location_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        location_width = location_width,
    ));

    for boat in fleet.iter() {
        output.push_str(&format!(
            "{:<name_width$}  {:>6}  {:<8}  {:<location_width$}  {:>12}\n",
            boat.name,
            boat.length,
            boat.category().to_string(),
            boat.location.describe(),
            boat.amount_owed.to_string(),
            name_width = name_width,
            location_width = location_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Boat, Location, Money};

    #[test]
    fn test_empty_fleet_message() {
        assert_eq!(format_inventory(&Fleet::new()), "No boats in the marina.\n");
    }

    #[test]
    fn test_inventory_lists_every_boat_in_order() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new(
                "Wanderer",
                30,
                Location::Land('C'),
                Money::zero(),
            ))
            .unwrap();
        fleet
            .insert(Boat::new(
                "Neptune",
                20,
                Location::Slip(15),
                Money::from_cents(35000),
            ))
            .unwrap();

        let out = format_inventory(&fleet);
        let neptune = out.find("Neptune").unwrap();
        let wanderer = out.find("Wanderer").unwrap();
        assert!(neptune < wanderer);
        assert!(out.contains("Slip #15"));
        assert!(out.contains("Bay C"));
        assert!(out.contains("350.00"));
    }

    #[test]
    fn test_unknown_location_renders_placeholder() {
        let mut fleet = Fleet::new();
        fleet
            .insert(Boat::new(
                "Mystery",
                30,
                Location::Unassigned,
                Money::zero(),
            ))
            .unwrap();

        let out = format_inventory(&fleet);
        assert!(out.contains("unknown"));
        assert!(out.contains("(none)"));
    }
}
