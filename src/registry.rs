//! Deduplicating registry of accepted stations.
//!
//! Keyed by callsign and iterated in insertion order. The first record for
//! a callsign wins; later ones are dropped whole, never merged.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::record::StationRecord;

/// Result of [`Registry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    Duplicate,
}

/// Accepted stations in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    stations: IndexMap<String, StationRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record` unless its callsign is already present.
    pub fn insert(&mut self, record: StationRecord) -> Insertion {
        match self.stations.entry(record.callsign.clone()) {
            Entry::Occupied(_) => Insertion::Duplicate,
            Entry::Vacant(slot) => {
                slot.insert(record);
                Insertion::Inserted
            }
        }
    }

    pub fn get(&self, callsign: &str) -> Option<&StationRecord> {
        self.stations.get(callsign)
    }

    pub fn contains(&self, callsign: &str) -> bool {
        self.stations.contains_key(callsign)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &StationRecord> {
        self.stations.values()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a StationRecord;
    type IntoIter = indexmap::map::Values<'a, String, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.values()
    }
}
