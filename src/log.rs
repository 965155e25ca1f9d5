//! The incident log: one record store bound to one data file.
//!
//! `IncidentLog` is the object every front end holds. Each mutation updates the in-memory
//! store first and then rewrites the whole data file. A failed write is logged and
//! otherwise ignored; the in-memory records stay authoritative for the rest of the
//! session and are written again on the next mutation.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::persist::JsonFile;
use crate::store::RecordStore;
use crate::types::{IncidentFields, IncidentRecord};

/// Record store plus the file it is mirrored to.
#[derive(Debug)]
pub struct IncidentLog {
    store: RecordStore,
    file: JsonFile,
}

impl IncidentLog {
    /// Open the log backed by `path`.
    ///
    /// Never fails: a missing, unreadable or malformed file yields an empty log (see
    /// [`JsonFile::load_or_empty`]). Nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonFile::new(path);
        let store = file.load_or_empty();
        Self { store, file }
    }

    /// Append a new incident and persist the full log.
    ///
    /// Returns the appended record whether or not the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdSpaceExhausted`] if no identifier is left. Nothing is written in
    /// that case.
    pub fn submit(&mut self, fields: IncidentFields) -> Result<IncidentRecord, Error> {
        let record = self.store.append(fields)?;
        tracing::info!(id = record.id, customer = %record.customer_name, "Incident recorded");
        self.persist();
        Ok(record)
    }

    /// Remove the incident with `id` and persist the full log.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecordNotFound`] if no record has `id`. Nothing is written in that
    /// case.
    pub fn delete(&mut self, id: u64) -> Result<IncidentRecord, Error> {
        let record = self.store.delete(id)?;
        tracing::info!(id, "Incident deleted");
        self.persist();
        Ok(record)
    }

    /// Rewrite the data file from the in-memory records.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`Error::Io`] or [`Error::Json`].
    pub fn save(&self) -> Result<(), Error> {
        self.file.save(self.store.list())
    }

    /// All incidents in insertion order.
    pub fn records(&self) -> &[IncidentRecord] {
        self.store.list()
    }

    /// The incident with `id`, if present.
    pub fn get(&self, id: u64) -> Option<&IncidentRecord> {
        self.store.get(id)
    }

    /// Identifier the next submitted incident will receive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdSpaceExhausted`] if no identifier is left.
    pub fn next_id(&self) -> Result<u64, Error> {
        self.store.next_id()
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!(
                path = %self.file.path().display(),
                error = %e,
                "Error writing data file"
            );
        }
    }
}
