//! Boat record model
//!
//! A boat is identified by its name (case-insensitive) and occupies one of
//! four kinds of storage, each with its own location payload. The payload is
//! a sum type keyed by the storage category, so a record can never carry
//! location data that disagrees with its category.

use std::fmt;

use super::money::Money;

/// Maximum boat name length; longer names are truncated
pub const MAX_NAME_LEN: usize = 127;

/// Maximum trailer license-tag length; longer tags are truncated
pub const MAX_TAG_LEN: usize = 9;

/// The kind of storage a boat occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageCategory {
    /// Dock slip, numbered 1-85
    Slip,
    /// Land bay, lettered A-Z
    Land,
    /// Trailer identified by license tag
    Trailer,
    /// Storage bay, numbered 1-50
    Storage,
    /// Unrecognized category; carries no location and is never billed
    Unknown,
}

impl StorageCategory {
    /// Resolve a category token (case-insensitive)
    ///
    /// Anything outside slip/land/trailer/storage resolves to `Unknown`;
    /// classification failure is the caller's policy decision, not a parse
    /// error.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "slip" => Self::Slip,
            "land" => Self::Land,
            "trailer" => Self::Trailer,
            "storage" => Self::Storage,
            _ => Self::Unknown,
        }
    }

    /// Monthly rate per unit of boat length
    pub const fn monthly_rate(&self) -> Money {
        match self {
            Self::Slip => Money::from_cents(1250),
            Self::Land => Money::from_cents(1400),
            Self::Trailer => Money::from_cents(2500),
            Self::Storage => Money::from_cents(1120),
            Self::Unknown => Money::zero(),
        }
    }

    /// True for the four recognized categories
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for StorageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Slip => "slip",
            Self::Land => "land",
            Self::Trailer => "trailer",
            Self::Storage => "storage",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", token)
    }
}

/// Category-specific location data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Slip number (expected 1-85, not enforced)
    Slip(u32),
    /// Land bay letter (expected A-Z, not enforced)
    Land(char),
    /// Trailer license tag, at most [`MAX_TAG_LEN`] characters
    Trailer(String),
    /// Storage bay number (expected 1-50, not enforced)
    Storage(u32),
    /// No location; the record failed to classify
    Unassigned,
}

impl Location {
    /// Build a trailer location, truncating the tag to [`MAX_TAG_LEN`] chars
    pub fn trailer(tag: &str) -> Self {
        Self::Trailer(truncate_chars(tag, MAX_TAG_LEN))
    }

    /// The category this location belongs to
    pub const fn category(&self) -> StorageCategory {
        match self {
            Self::Slip(_) => StorageCategory::Slip,
            Self::Land(_) => StorageCategory::Land,
            Self::Trailer(_) => StorageCategory::Trailer,
            Self::Storage(_) => StorageCategory::Storage,
            Self::Unassigned => StorageCategory::Unknown,
        }
    }

    /// The textual location token used in the persisted format
    pub fn token(&self) -> String {
        match self {
            Self::Slip(n) | Self::Storage(n) => n.to_string(),
            Self::Land(c) => c.to_string(),
            Self::Trailer(tag) => tag.clone(),
            Self::Unassigned => "0".to_string(),
        }
    }

    /// Human-readable label for the location field
    pub fn describe(&self) -> String {
        match self {
            Self::Slip(n) => format!("Slip #{}", n),
            Self::Land(c) => format!("Bay {}", c),
            Self::Trailer(tag) => format!("Tag {}", tag),
            Self::Storage(n) => format!("Bay #{}", n),
            Self::Unassigned => "(none)".to_string(),
        }
    }
}

/// A boat record
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    /// Boat name; the effective unique key, compared case-insensitively
    pub name: String,

    /// Length in feet
    pub length: u32,

    /// Where the boat is kept; also determines the billing category
    pub location: Location,

    /// Outstanding balance; never allowed to go negative
    pub amount_owed: Money,
}

impl Boat {
    /// Create a boat, truncating the name to [`MAX_NAME_LEN`] characters
    pub fn new(name: &str, length: u32, location: Location, amount_owed: Money) -> Self {
        Self {
            name: truncate_chars(name, MAX_NAME_LEN),
            length,
            location,
            amount_owed,
        }
    }

    /// The storage category, derived from the location variant
    pub const fn category(&self) -> StorageCategory {
        self.location.category()
    }

    /// Case-insensitive name comparison key
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive name match
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} ft, {})", self.name, self.length, self.category())
    }
}

/// Truncate a string to at most `max` characters, respecting char boundaries
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
