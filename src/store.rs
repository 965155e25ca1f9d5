//! In-memory record store for critsit.
//!
//! This module owns the ordered sequence of incident records. It assigns identifiers,
//! appends, and deletes by identifier. It performs no I/O: persistence is handled by
//! [`crate::persist`], which only ever sees snapshots of the sequence.

use crate::error::Error;
use crate::types::{IncidentFields, IncidentRecord};

/// Ordered, append-only sequence of incident records.
///
/// Index order is insertion order. The next identifier is never stored: it is always
/// derived from the records present, `max(id) + 1`, or `0` when the store is empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<IncidentRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order.
    ///
    /// Used when loading a persisted snapshot. The sequence is taken as-is; identifiers
    /// are not renumbered.
    pub fn from_records(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// Identifier the next appended record will receive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdSpaceExhausted`] if a record already carries `u64::MAX`.
    pub fn next_id(&self) -> Result<u64, Error> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or(Error::IdSpaceExhausted),
        }
    }

    /// Append a new record built from `fields` and return a copy of it.
    ///
    /// Field contents are not validated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdSpaceExhausted`] if no identifier is left; the store is
    /// unchanged.
    pub fn append(&mut self, fields: IncidentFields) -> Result<IncidentRecord, Error> {
        let record = IncidentRecord::new(self.next_id()?, fields);
        self.records.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// The first record carrying `id`, if any.
    pub fn get(&self, id: u64) -> Option<&IncidentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Remove the first record carrying `id` and return it.
    ///
    /// Remaining records keep their identifiers and relative order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record matches; the store is unchanged.
    pub fn delete(&mut self, id: u64) -> Result<IncidentRecord, Error> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::RecordNotFound { id })?;
        Ok(self.records.remove(index))
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
