//! Per-category ingredient tables.
//!
//! All four categories share one schema, so a single `CatalogTable` type
//! serves every one of them; the category picks the table.

use rusqlite::{params, Connection, OptionalExtension, Result};

use super::InsertOutcome;
use crate::domain::{Category, Ingredient};

/// Handle on one category's ingredient table, borrowing the open store.
#[derive(Clone, Copy)]
pub struct CatalogTable<'a> {
    conn: &'a Connection,
    category: Category,
}

impl<'a> CatalogTable<'a> {
    pub fn new(conn: &'a Connection, category: Category) -> Self {
        Self { conn, category }
    }

    /// Insert a new ingredient unless one with the same name is already stored.
    pub fn create(&self, name: &str, edible_yield: f64, by_weight: bool) -> Result<InsertOutcome> {
        let sql = format!(
            r#"
            INSERT INTO {} (name, edible_yield, by_weight)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO NOTHING
            "#,
            self.category.table_name()
        );
        let changed = self.conn.execute(&sql, params![name, edible_yield, by_weight])?;
        if changed == 0 {
            return Ok(InsertOutcome::AlreadyExists);
        }
        Ok(InsertOutcome::Inserted(self.conn.last_insert_rowid()))
    }

    /// Every ingredient in the category, ordered by name.
    pub fn list_all(&self) -> Result<Vec<Ingredient>> {
        let sql = format!(
            "SELECT id, name, edible_yield, by_weight FROM {} ORDER BY name ASC, id ASC",
            self.category.table_name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let ingredients = stmt
            .query_map([], |row| row_to_ingredient(row))?
            .collect::<Result<Vec<_>>>()?;
        Ok(ingredients)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Ingredient>> {
        let sql = format!(
            "SELECT id, name, edible_yield, by_weight FROM {} WHERE id = ?1",
            self.category.table_name()
        );
        self.conn
            .query_row(&sql, params![id], |row| row_to_ingredient(row))
            .optional()
    }

    pub fn count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.category.table_name());
        self.conn.query_row(&sql, [], |row| row.get(0))
    }
}

fn row_to_ingredient(row: &rusqlite::Row) -> Result<Ingredient> {
    Ok(Ingredient {
        id: row.get(0)?,
        name: row.get(1)?,
        edible_yield: row.get(2)?,
        by_weight: row.get(3)?,
    })
}
