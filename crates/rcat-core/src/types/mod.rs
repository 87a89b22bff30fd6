//! Domain types for the recipe catalog.
//!
//! # Module Organization
//!
//! - [`ingredient`] - Ingredient lines
//! - [`recipe`] - Recipes and partial updates
//! - [`country`] - Country grouping (secondary index)
//! - [`id`] - Stable recipe handles
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use rcat_core::{Country, Ingredient, Recipe, RecipeId, RecipeUpdate};
//! ```

pub mod country;
pub mod id;
pub mod ingredient;
pub mod recipe;

pub use country::Country;
pub use id::RecipeId;
pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeUpdate};
