use rusqlite::{Connection, Result};

use crate::domain::Category;

/// Create all five tables if they are missing. Safe to run on every start.
pub fn run_migrations(conn: &Connection) -> Result<()> {
  for category in Category::ALL {
    conn.execute_batch(&ingredient_table_sql(category))?;
  }

  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS category (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL UNIQUE
    );
    "#,
  )?;

  Ok(())
}

// Every category table shares one schema; names come from a fixed enum.
fn ingredient_table_sql(category: Category) -> String {
  let table = category.table_name();
  format!(
    r#"
    CREATE TABLE IF NOT EXISTS {table} (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL UNIQUE,
      edible_yield REAL NOT NULL CHECK (edible_yield >= 0),
      by_weight INTEGER NOT NULL DEFAULT 1
    );

    CREATE INDEX IF NOT EXISTS idx_{table}_name ON {table}(name);
    "#
  )
}
