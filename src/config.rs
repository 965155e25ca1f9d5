//! Runtime configuration shared by the `critsit` and `critsit-console` binaries.
//!
//! # Environment Variables
//!
//! | Variable       | Required | Default          | Description              |
//! |----------------|----------|------------------|--------------------------|
//! | `CRITSIT_DATA` | No       | `blog_data.json` | Path of the JSON data file |
//!
//! A `--data` flag on either binary takes precedence over the environment.

use std::path::PathBuf;

use crate::types::DEFAULT_DATA_FILE;

/// Environment variable naming the data file.
pub const DATA_ENV: &str = "CRITSIT_DATA";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON data file.
    pub data_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// An empty `CRITSIT_DATA` is treated as unset.
    pub fn from_env() -> Config {
        let data_path = std::env::var_os(DATA_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Config { data_path }
    }

    /// Apply a command-line override of the data path, if one was given.
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Config {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }
}
