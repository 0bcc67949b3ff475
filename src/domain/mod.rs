pub mod ingredient;

pub use ingredient::{Category, Ingredient};
