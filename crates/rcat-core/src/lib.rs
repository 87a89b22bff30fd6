//! Core model for the rcat recipe catalog.
//!
//! This crate provides:
//!
//! - Domain types (`Ingredient`, `Recipe`, `Country`, `RecipeId`)
//! - [`RecipeManager`], the owner of all recipes and of the country index
//! - JSON persistence with a built-in seed for first runs
//! - Configuration structures and error types
//!
//! # Examples
//!
//! ```
//! use rcat_core::RecipeManager;
//!
//! let manager = RecipeManager::with_default_recipes();
//! let sushi = manager.view_recipe("Japanese", "Sushi").unwrap();
//! assert!(sushi.render().contains("3 sheets of Seaweed"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod manager;
pub mod seed;
pub mod store;
pub mod types;

pub use config::{Config, PromptConfig, StorageConfig};
pub use error::{CatalogError, ConfigError, StoreError};
pub use hash::{FxBuildHasher, FxHashMap, fx_hash_map, fx_hash_map_with_capacity};
pub use manager::RecipeManager;
pub use seed::default_recipes;
pub use store::{DEFAULT_INDENT, LoadOutcome};
pub use types::{Country, Ingredient, Recipe, RecipeId, RecipeUpdate};
