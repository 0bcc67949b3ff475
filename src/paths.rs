//! File locations - single source of truth for default paths.
//!
//! The defaults are relative to the working directory. `config` decides
//! whether they are overridden.

use std::path::{Path, PathBuf};

use crate::domain::Category;

/// SQLite store file used when nothing else is configured
pub const DEFAULT_DB_PATH: &str = "chef_tools.db";

/// Directory holding the four category sheets
pub const DEFAULT_DATA_DIR: &str = "clean_data";

/// Optional configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// Path of a category's source sheet inside the data directory
pub fn source_file(data_dir: &Path, category: Category) -> PathBuf {
    data_dir.join(category.source_file_name())
}
