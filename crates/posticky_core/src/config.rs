//! Host-supplied configuration.
//!
//! # Responsibility
//! - Describe where notes are stored, how logging is set up, and the initial
//!   split ratio.
//! - Bootstrap the database connection and logger from those values.
//!
//! # Invariants
//! - Nothing is read from the environment; hosts deserialize or build this
//!   struct themselves.
//! - Missing fields fall back to `CoreConfig::default()`.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::layout::split::{SplitRatio, DEFAULT_SPLIT_RATIO};
use crate::logging::{default_log_level, init_logging};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Notes database file. `None` keeps notes in memory for this process.
    pub db_path: Option<PathBuf>,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<String>,
    /// Clamped into the allowed split range on use.
    pub initial_split_ratio: f64,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            initial_split_ratio: DEFAULT_SPLIT_RATIO,
        }
    }
}

impl CoreConfig {
    /// Opens the configured database with migrations applied.
    pub fn open_database(&self) -> DbResult<Connection> {
        match self.db_path.as_ref() {
            Some(path) => open_db(path),
            None => open_db_in_memory(),
        }
    }

    /// Starts file logging when `log_dir` is set.
    ///
    /// Returns `Ok(false)` when logging is not configured.
    pub fn init_logging(&self) -> Result<bool, String> {
        match self.log_dir.as_deref() {
            Some(dir) => init_logging(self.log_level.as_str(), dir).map(|()| true),
            None => Ok(false),
        }
    }

    pub fn initial_split(&self) -> SplitRatio {
        SplitRatio::clamped(self.initial_split_ratio).unwrap_or_default()
    }
}
