pub mod catalog;
pub mod categories;
pub mod schema;

use rusqlite::{Connection, Result};
use std::path::Path;

pub use catalog::CatalogTable;
pub use categories::{build_categories, get_category_by_id, list_categories};
pub use schema::run_migrations;

/// Result of a skip-on-duplicate insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
  /// A new row was written with this id
  Inserted(i64),
  /// A row with the same unique name already existed; nothing was written
  AlreadyExists,
}

impl InsertOutcome {
  pub fn is_inserted(&self) -> bool {
    matches!(self, Self::Inserted(_))
  }
}

/// Open the store file and make sure every table exists.
pub fn open_store(path: &Path) -> Result<Connection> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      if let Err(e) = std::fs::create_dir_all(parent) {
        tracing::warn!("Could not create store directory {}: {}", parent.display(), e);
      }
    }
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  tracing::debug!("Opened store at {}", path.display());
  Ok(conn)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_open_store_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/chef_tools.db");

    let conn = open_store(&path).unwrap();
    assert!(path.exists());

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM category", [], |row| row.get(0)).unwrap();
    assert_eq!(count, 0);
  }

  #[test]
  fn test_reopen_keeps_data() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("chef_tools.db");

    {
      let conn = open_store(&path).unwrap();
      build_categories(&conn).unwrap();
    }

    let conn = open_store(&path).unwrap();
    assert_eq!(list_categories(&conn).unwrap().len(), 4);
  }

  #[test]
  fn test_insert_outcome_is_inserted() {
    assert!(InsertOutcome::Inserted(3).is_inserted());
    assert!(!InsertOutcome::AlreadyExists.is_inserted());
  }
}
