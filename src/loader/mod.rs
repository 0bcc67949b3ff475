//! Fills the category tables from the kitchen's CSV sheets.
//!
//! Each sheet needs a header row with at least `Item`, `UOM` and `EY %`.
//! Other columns are ignored.

pub mod error;

pub use error::LoaderError;

use rusqlite::Connection;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::db::{CatalogTable, InsertOutcome};
use crate::domain::Category;

const REQUIRED_COLUMNS: [&str; 3] = ["Item", "UOM", "EY %"];

#[derive(Debug, Deserialize)]
struct SourceRow {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "UOM")]
    uom: String,
    #[serde(rename = "EY %")]
    edible_yield: String,
}

/// Counts from one file load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Only an exact "lb" or "lbs" means the item is bought by weight.
pub fn is_by_weight(uom: &str) -> bool {
    matches!(uom, "lb" | "lbs")
}

/// Turn a percentage such as "85%" or "85" into a fraction in [0, 1].
pub fn parse_edible_yield(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let percent: f64 = number.parse().ok()?;
    let fraction = percent / 100.0;
    (fraction.is_finite() && (0.0..=1.0).contains(&fraction)).then_some(fraction)
}

/// Load one category sheet from disk.
pub fn load_category_file<P: AsRef<Path>>(
    conn: &Connection,
    path: P,
    category: Category,
) -> Result<LoadReport, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    let report = load_category(conn, file, category)?;
    tracing::info!(
        "Loaded {} from {}: {} new, {} already present",
        category,
        path.display(),
        report.inserted,
        report.skipped
    );
    Ok(report)
}

/// Load rows from any CSV source into the category's table.
///
/// A duplicate name skips only that row. Any malformed row stops the load;
/// rows before it stay written.
pub fn load_category<R: Read>(
    conn: &Connection,
    source: R,
    category: Category,
) -> Result<LoadReport, LoaderError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoaderError::MissingColumn(column));
        }
    }

    let table = CatalogTable::new(conn, category);
    let mut report = LoadReport::default();

    for (idx, result) in reader.deserialize::<SourceRow>().enumerate() {
        let row_number = idx + 1;
        let row = result?;

        let edible_yield =
            parse_edible_yield(&row.edible_yield).ok_or_else(|| LoaderError::InvalidFormat {
                row: row_number,
                message: format!("edible yield {:?} is not a percentage between 0 and 100", row.edible_yield),
            })?;

        match table.create(&row.item, edible_yield, is_by_weight(&row.uom))? {
            InsertOutcome::Inserted(_) => report.inserted += 1,
            InsertOutcome::AlreadyExists => {
                tracing::debug!("Skipping duplicate {} {:?}", category, row.item);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Load every category from its default file inside `data_dir`.
pub fn fill_all(conn: &Connection, data_dir: &Path) -> Result<Vec<(Category, LoadReport)>, LoaderError> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let path = crate::paths::source_file(data_dir, category);
            load_category_file(conn, path, category).map(|report| (category, report))
        })
        .collect()
}
