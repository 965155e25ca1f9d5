//! JSON file persistence for the record store.
//!
//! The data file holds a single JSON array with one object per incident record, in
//! insertion order. There is no header and no versioning. Every save rewrites the whole
//! document; nothing is ever appended or patched in place.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::store::RecordStore;
use crate::types::IncidentRecord;

/// Reads and writes full snapshots of the record sequence at a fixed path.
///
/// `JsonFile` never holds records itself. Callers pass a slice to [`JsonFile::save`] and
/// receive an owned `Vec` from [`JsonFile::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Bind the adapter to `path`. No I/O happens until `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the data file.
    ///
    /// A document consisting of JSON `null` is read as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file is missing or unreadable.
    /// Returns [`Error::Json`] if the content is not an array of incident records.
    pub fn load(&self) -> Result<Vec<IncidentRecord>, Error> {
        let data = std::fs::read(&self.path)?;
        let records: Option<Vec<IncidentRecord>> = serde_json::from_slice(&data)?;
        Ok(records.unwrap_or_default())
    }

    /// Load the data file into a fresh store, treating any failure as "no prior data".
    ///
    /// Missing, unreadable and malformed files are logged at `warn` and produce an empty
    /// store. A malformed file is left untouched on disk until the next save.
    pub fn load_or_empty(&self) -> RecordStore {
        match self.load() {
            Ok(records) => {
                tracing::info!(
                    path = %self.path.display(),
                    count = records.len(),
                    "Data loaded successfully"
                );
                RecordStore::from_records(records)
            }
            Err(Error::Io(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Error reading data file, starting empty"
                );
                RecordStore::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Error parsing data file, starting empty"
                );
                RecordStore::new()
            }
        }
    }

    /// Serialize `records` and overwrite the data file with them.
    ///
    /// The file is created if missing and truncated otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails or [`Error::Io`] if the write fails.
    /// A failed write may leave the file truncated; the caller's in-memory records remain
    /// the source of truth.
    pub fn save(&self, records: &[IncidentRecord]) -> Result<(), Error> {
        let data = serde_json::to_vec(records)?;
        std::fs::write(&self.path, data)?;
        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            "Data saved successfully"
        );
        Ok(())
    }
}
