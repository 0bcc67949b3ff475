//! Test utilities for store setup.
//!
//! Reuses the real schema creation so tests never carry their own copy of
//! the table definitions.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Migrated store plus a scratch directory for CSV fixtures.
///
/// Everything lives under one temporary directory that is removed on drop.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Store connection with every table created
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let conn = crate::db::open_store(&temp.path().join("chef_tools.db"))?;

        Ok(Self { temp, conn })
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a fixture file into the scratch directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }
}
