//! Category index: maps a menu number to one of the four category tables.

use rusqlite::{params, Connection, OptionalExtension, Result};

use super::InsertOutcome;
use crate::domain::Category;

/// Create the four category rows in menu order. Existing rows are left alone.
pub fn build_categories(conn: &Connection) -> Result<Vec<InsertOutcome>> {
  let mut outcomes = Vec::with_capacity(Category::ALL.len());
  for category in Category::ALL {
    let changed = conn.execute(
      "INSERT INTO category (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
      params![category],
    )?;
    let outcome = if changed == 0 {
      InsertOutcome::AlreadyExists
    } else {
      InsertOutcome::Inserted(conn.last_insert_rowid())
    };
    tracing::debug!("Category {}: {:?}", category, outcome);
    outcomes.push(outcome);
  }
  Ok(outcomes)
}

/// `(id, name)` pairs in id order, as shown on the category menu
pub fn list_categories(conn: &Connection) -> Result<Vec<(i64, Category)>> {
  let mut stmt = conn.prepare("SELECT id, name FROM category ORDER BY id ASC")?;
  let categories = stmt
    .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Category>(1)?)))?
    .collect::<Result<Vec<_>>>()?;
  Ok(categories)
}

pub fn get_category_by_id(conn: &Connection, id: i64) -> Result<Option<Category>> {
  conn
    .query_row("SELECT name FROM category WHERE id = ?1", params![id], |row| row.get(0))
    .optional()
}
