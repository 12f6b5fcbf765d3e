//! The in-memory boat store
//!
//! A capacity-bounded collection kept sorted by boat name (case-insensitive)
//! after every insertion, so listing and saving never need a separate sort.
//! Duplicate names are allowed; name-based lookups address the first match
//! in sorted order.

use crate::error::{MarinaError, MarinaResult};
use crate::models::Boat;

/// Default maximum number of boats the marina holds
pub const DEFAULT_CAPACITY: usize = 120;

/// Ordered, capacity-bounded collection of boat records
#[derive(Debug, Clone)]
pub struct Fleet {
    boats: Vec<Boat>,
    capacity: usize,
}

impl Fleet {
    /// Create an empty fleet with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty fleet with an explicit capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boats: Vec::new(),
            capacity,
        }
    }

    /// Number of boats currently stored
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// True if no boats are stored
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// True if the fleet has reached capacity
    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.capacity
    }

    /// Maximum number of boats this fleet holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert a boat, preserving sorted order by name
    ///
    /// The insertion point is the first index whose existing name compares
    /// strictly greater, so a new record lands after any existing records
    /// with the same name. Fails with `CapacityExceeded` when full, leaving
    /// the fleet unchanged.
    pub fn insert(&mut self, boat: Boat) -> MarinaResult<()> {
        if self.is_full() {
            return Err(MarinaError::CapacityExceeded(self.capacity));
        }

        let key = boat.sort_key();
        let pos = self.boats.partition_point(|b| b.sort_key() <= key);
        self.boats.insert(pos, boat);
        Ok(())
    }

    /// Find the first boat with the given name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.boats.iter().position(|b| b.name_matches(name))
    }

    /// Get a boat by index
    pub fn get(&self, index: usize) -> Option<&Boat> {
        self.boats.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Boat> {
        self.boats.get_mut(index)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Boat> {
        self.boats.iter_mut()
    }

    /// Remove the first boat with the given name (case-insensitive)
    ///
    /// Remaining boats keep their relative order. Fails with `NotFound` if
    /// no boat matches.
    pub fn remove(&mut self, name: &str) -> MarinaResult<Boat> {
        let index = self
            .find_by_name(name)
            .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;
        Ok(self.boats.remove(index))
    }

    /// The canonical read-only view: boats sorted by name
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Iterate over boats in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Boat> {
        self.boats.iter()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
