//! Application configuration.
//!
//! Every setting is resolved with the same priority:
//! `config.toml` > environment (including `.env`) > built-in default.
//!
//! ```toml
//! [database]
//! path = "chef_tools.db"
//!
//! [data]
//! dir = "clean_data"
//!
//! [menu]
//! clear_screen = true
//!
//! [calc]
//! yield_model = "legacy"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calc::YieldModel;
use crate::paths;

pub const ENV_DB_PATH: &str = "CHEF_DB_PATH";
pub const ENV_DATA_DIR: &str = "CHEF_DATA_DIR";
pub const ENV_CLEAR_SCREEN: &str = "CHEF_CLEAR_SCREEN";
pub const ENV_YIELD_MODEL: &str = "CHEF_YIELD_MODEL";

// ==================== File Format ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseConfig>,
    data: Option<DataConfig>,
    menu: Option<MenuConfig>,
    calc: Option<CalcConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DataConfig {
    dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MenuConfig {
    clear_screen: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct CalcConfig {
    yield_model: Option<YieldModel>,
}

// ==================== Resolved Settings ====================

/// Settings after every source has been consulted
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub data_dir: PathBuf,
    pub clear_screen: bool,
    pub yield_model: YieldModel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(paths::DEFAULT_DB_PATH),
            data_dir: PathBuf::from(paths::DEFAULT_DATA_DIR),
            clear_screen: true,
            yield_model: YieldModel::Legacy,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the working directory, the process
    /// environment and `.env`.
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();
        Self::resolve(Path::new(paths::CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Resolve settings from an explicit config file and environment lookup.
    pub fn resolve(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = read_config_file(config_path);
        let defaults = Settings::default();

        let db_path = match file.database.and_then(|d| d.path) {
            Some(path) => {
                tracing::info!("Using database from {}: {}", config_path.display(), path);
                PathBuf::from(path)
            }
            None => match env(ENV_DB_PATH) {
                Some(path) => {
                    tracing::info!("Using database from {} env: {}", ENV_DB_PATH, path);
                    PathBuf::from(path)
                }
                None => {
                    tracing::info!("Using default database path: {}", defaults.db_path.display());
                    defaults.db_path
                }
            },
        };

        let data_dir = file
            .data
            .and_then(|d| d.dir)
            .or_else(|| env(ENV_DATA_DIR))
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let clear_screen = file
            .menu
            .and_then(|m| m.clear_screen)
            .or_else(|| env(ENV_CLEAR_SCREEN).and_then(|v| parse_bool(&v)))
            .unwrap_or(defaults.clear_screen);

        let yield_model = file
            .calc
            .and_then(|c| c.yield_model)
            .or_else(|| {
                env(ENV_YIELD_MODEL).and_then(|v| {
                    let parsed = YieldModel::from_str(&v);
                    if parsed.is_none() {
                        tracing::warn!("Ignoring unknown {}={}", ENV_YIELD_MODEL, v);
                    }
                    parsed
                })
            })
            .unwrap_or(defaults.yield_model);

        Self {
            db_path,
            data_dir,
            clear_screen,
            yield_model,
        }
    }
}

fn read_config_file(path: &Path) -> FileConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return FileConfig::default();
    };
    match toml::from_str::<FileConfig>(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
            FileConfig::default()
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
