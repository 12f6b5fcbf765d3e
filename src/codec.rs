//! Line codec for the persisted boat format
//!
//! One record per line, five comma-separated fields in fixed order:
//! `Name,Length,Category,LocationToken,AmountOwed`. There is no header row
//! and no escaping; a comma embedded in a name or trailer tag corrupts the
//! record. That is a documented limitation of the format, preserved here for
//! compatibility rather than fixed by quoting.

use csv::StringRecord;

use crate::error::{MarinaError, MarinaResult};
use crate::models::{Boat, Location, Money, StorageCategory};

/// Number of fields in a record
pub const FIELD_COUNT: usize = 5;

/// Parse a single record line, permissively
///
/// An unrecognized category still yields a boat (Category=Unknown, no
/// location payload); only structural problems — wrong field count,
/// unparseable Length or AmountOwed — are errors. Callers that refuse
/// unclassified records should use [`parse_line_strict`].
pub fn parse_line(line: &str) -> MarinaResult<Boat> {
    let record = split_line(line)?;
    parse_record(&record)
}

/// Parse a single record line, rejecting unrecognized categories
pub fn parse_line_strict(line: &str) -> MarinaResult<Boat> {
    let record = split_line(line)?;
    let (boat, raw_category) = record_to_boat(&record)?;
    if !boat.category().is_known() {
        return Err(MarinaError::UnknownCategory(raw_category));
    }
    Ok(boat)
}

/// Parse an already-split record (load path), permissively
pub fn parse_record(record: &StringRecord) -> MarinaResult<Boat> {
    record_to_boat(record).map(|(boat, _)| boat)
}

/// Serialize a boat to its five record fields
pub fn format_fields(boat: &Boat) -> [String; FIELD_COUNT] {
    [
        boat.name.clone(),
        boat.length.to_string(),
        boat.category().to_string(),
        boat.location.token(),
        boat.amount_owed.to_string(),
    ]
}

/// Serialize a boat to a record line (no trailing newline)
pub fn format_line(boat: &Boat) -> String {
    format_fields(boat).join(",")
}

/// Split one line with the format's reader settings: no header, no quoting
fn split_line(line: &str) -> MarinaResult<StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(MarinaError::Format("empty entry".to_string()));
    }
    Ok(record)
}

fn record_to_boat(record: &StringRecord) -> MarinaResult<(Boat, String)> {
    if record.len() != FIELD_COUNT {
        return Err(MarinaError::Format(format!(
            "expected {} comma-separated fields, got {}",
            FIELD_COUNT,
            record.len()
        )));
    }

    let name = &record[0];
    let length: u32 = record[1]
        .trim()
        .parse()
        .map_err(|_| MarinaError::bad_field("Length", &record[1]))?;
    let raw_category = record[2].to_string();
    let category = StorageCategory::parse(&raw_category);
    let token = &record[3];
    let amount_owed = Money::parse(&record[4])
        .map_err(|_| MarinaError::bad_field("AmountOwed", &record[4]))?;

    let location = match category {
        // non-numeric slip/storage tokens fall back to 0, matching the
        // permissive numeric handling of the original format
        StorageCategory::Slip => Location::Slip(token.trim().parse().unwrap_or(0)),
        StorageCategory::Storage => Location::Storage(token.trim().parse().unwrap_or(0)),
        StorageCategory::Land => Location::Land(token.chars().next().unwrap_or('?')),
        StorageCategory::Trailer => Location::trailer(token),
        StorageCategory::Unknown => Location::Unassigned,
    };

    Ok((Boat::new(name, length, location, amount_owed), raw_category))
}
