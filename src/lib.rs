//! critsit: a small Critical Situation incident log.
//!
//! Incidents are held in an ordered in-memory store and the whole store is rewritten to a
//! single JSON file after every change.

pub mod browser;
pub mod config;
pub mod error;
pub mod log;
pub mod persist;
pub mod store;
pub mod types;

pub use browser::{ITIL_URL, open_url};
pub use config::Config;
pub use error::Error;
pub use log::IncidentLog;
pub use persist::JsonFile;
pub use store::RecordStore;
pub use types::{DEFAULT_DATA_FILE, IncidentFields, IncidentRecord};
