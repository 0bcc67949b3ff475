pub mod calc;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod loader;
pub mod menu;
pub mod paths;

#[cfg(test)]
pub mod testing;
