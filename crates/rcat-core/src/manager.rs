//! The recipe manager: canonical recipe storage plus the country index.
//!
//! [`RecipeManager`] owns every [`Recipe`] in an arena keyed by
//! [`RecipeId`]. Two views are kept over that arena:
//!
//! - the canonical sequence, in insertion order, which is what gets persisted
//! - the country index, mapping a country name to a [`Country`] that lists
//!   handles of its dishes
//!
//! Every public mutator updates both views before returning. After any call
//! completes, flattening the country index yields exactly the canonical
//! sequence's members, and each recipe's `country` equals the key of the
//! country listing it. Countries are created on first use and dropped as
//! soon as their last dish leaves.
//!
//! # Examples
//!
//! ```
//! use rcat_core::{Ingredient, Recipe, RecipeManager, RecipeUpdate};
//!
//! let mut manager = RecipeManager::new();
//! manager.add_recipe(Recipe::new("Pizza", "Italian", vec![Ingredient::new("Dough", "1")], "Bake it"));
//!
//! let moved = manager
//!     .update_recipe("Pizza", "Italian", RecipeUpdate::new().country("French"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(moved.country, "French");
//! assert!(manager.country("Italian").is_none());
//! assert!(manager.view_recipe("French", "Pizza").is_some());
//! ```

use tracing::debug;

use crate::error::CatalogError;
use crate::types::{Country, Recipe, RecipeId, RecipeUpdate};
use crate::{FxHashMap, fx_hash_map, fx_hash_map_with_capacity};

/// Owner of all recipes and of the country index derived from them.
///
/// Lookups are addressed by `(country, dish name)` and return the first
/// matching dish in that country. Duplicate pairs may be added, but only the
/// first of them is reachable through lookups.
///
/// The manager has no interior mutability. Callers that need shared access
/// can wrap it in a lock and hold it for the duration of each call.
#[derive(Debug, Clone)]
pub struct RecipeManager {
    /// Recipe storage keyed by handle.
    arena: FxHashMap<RecipeId, Recipe>,

    /// Canonical insertion order of the arena.
    order: Vec<RecipeId>,

    /// Country index keyed by country name.
    countries: FxHashMap<String, Country>,

    /// Country keys in first-seen order.
    country_order: Vec<String>,

    /// Next handle to allocate.
    next_id: RecipeId,
}

impl Default for RecipeManager {
    fn default() -> Self {
        Self {
            arena: fx_hash_map_with_capacity(16),
            order: Vec::new(),
            countries: fx_hash_map(),
            country_order: Vec::new(),
            next_id: RecipeId::new(1),
        }
    }
}

impl RecipeManager {
    /// Creates an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recipes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the catalog holds no recipes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Adds a recipe, creating its country if this is the first dish from it.
    pub fn add_recipe(&mut self, recipe: Recipe) -> RecipeId {
        let id = self.next_id;
        self.next_id = id.next();

        debug!(%id, dish = %recipe.name, country = %recipe.country, "adding recipe");
        self.index(&recipe.country, id);
        self.arena.insert(id, recipe);
        self.order.push(id);
        id
    }

    /// Returns the recipe behind a handle.
    #[inline]
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.arena.get(&id)
    }

    /// Returns the handle of the first dish called `name` in `country`.
    #[must_use]
    pub fn find(&self, country: &str, name: &str) -> Option<RecipeId> {
        self.countries
            .get(country)?
            .get_dish(name, |id| self.arena.get(&id))
    }

    /// Returns the first dish called `name` in `country`.
    ///
    /// An unknown country yields `None`, the same as an unknown dish.
    #[must_use]
    pub fn view_recipe(&self, country: &str, name: &str) -> Option<&Recipe> {
        self.find(country, name).and_then(|id| self.get(id))
    }

    /// Edits the first dish called `name` in `country`.
    ///
    /// Returns `Ok(None)` when no such dish exists. Field rules follow
    /// [`Recipe::apply_update`]. When the update names a different,
    /// non-empty country, the dish is first removed from its old country
    /// (dropping that country if it empties), then appended to the target
    /// country, and only then is the recipe's own `country` rewritten.
    pub fn update_recipe(
        &mut self,
        name: &str,
        country: &str,
        update: RecipeUpdate,
    ) -> Result<Option<&Recipe>, CatalogError> {
        let Some(id) = self.find(country, name) else {
            debug!(dish = name, country, "update target not found");
            return Ok(None);
        };

        if let Some(target) = update.relocation_target(country).map(str::to_owned) {
            debug!(%id, from = country, to = %target, "relocating recipe");
            self.unindex(country, id)?;
            self.index(&target, id);
        }

        let recipe = self
            .arena
            .get_mut(&id)
            .ok_or(CatalogError::UnknownRecipe(id))?;
        recipe.apply_update(update);
        debug!(%id, dish = %recipe.name, country = %recipe.country, "updated recipe");
        Ok(Some(&*recipe))
    }

    /// Removes the first dish called `name` in `country` and returns it.
    ///
    /// Returns `Ok(None)` when no such dish exists. A country left without
    /// dishes is removed from the index.
    pub fn delete_recipe(
        &mut self,
        name: &str,
        country: &str,
    ) -> Result<Option<Recipe>, CatalogError> {
        let Some(id) = self.find(country, name) else {
            debug!(dish = name, country, "delete target not found");
            return Ok(None);
        };

        self.unindex(country, id)?;
        self.order.retain(|listed| *listed != id);
        let recipe = self
            .arena
            .remove(&id)
            .ok_or(CatalogError::UnknownRecipe(id))?;
        debug!(%id, dish = %recipe.name, country = %recipe.country, "deleted recipe");
        Ok(Some(recipe))
    }

    /// Iterates over all recipes in insertion order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.order.iter().filter_map(|id| self.arena.get(id))
    }

    /// Iterates over the countries in first-seen order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> + '_ {
        self.country_order
            .iter()
            .filter_map(|name| self.countries.get(name))
    }

    /// Returns the country with the given name.
    #[inline]
    #[must_use]
    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }

    /// Returns the country names in first-seen order.
    #[must_use]
    pub fn country_names(&self) -> Vec<&str> {
        self.country_order.iter().map(String::as_str).collect()
    }

    /// Returns the dish names of `country` in insertion order.
    #[must_use]
    pub fn dish_names(&self, country: &str) -> Option<Vec<&str>> {
        self.countries
            .get(country)
            .map(|entry| entry.dish_names(|id| self.arena.get(&id)))
    }

    /// Checks that the country index and the canonical sequence agree.
    pub fn verify_index(&self) -> Result<(), CatalogError> {
        let mut listed = 0;
        for country in self.countries() {
            if country.is_empty() {
                return Err(CatalogError::EmptyCountry(country.name().to_owned()));
            }
            for &id in country.dishes() {
                let recipe = self.get(id).ok_or(CatalogError::UnknownRecipe(id))?;
                if recipe.country != country.name() {
                    return Err(CatalogError::CountryMismatch {
                        id,
                        listed: country.name().to_owned(),
                        actual: recipe.country.clone(),
                    });
                }
                listed += 1;
            }
        }

        for &id in &self.order {
            let recipe = self.get(id).ok_or(CatalogError::UnknownRecipe(id))?;
            let home = self
                .countries
                .get(&recipe.country)
                .ok_or_else(|| CatalogError::CountryNotFound(recipe.country.clone()))?;
            if !home.contains(id) {
                return Err(CatalogError::DishNotListed {
                    country: recipe.country.clone(),
                    id,
                });
            }
        }

        if listed != self.order.len() {
            return Err(CatalogError::IndexSizeMismatch {
                listed,
                recipes: self.order.len(),
            });
        }
        Ok(())
    }

    /// Appends `id` to `country`, creating the country if needed.
    fn index(&mut self, country: &str, id: RecipeId) {
        if let Some(entry) = self.countries.get_mut(country) {
            entry.add_dish(id);
            return;
        }

        debug!(country, "creating country");
        let mut entry = Country::new(country);
        entry.add_dish(id);
        self.countries.insert(country.to_owned(), entry);
        self.country_order.push(country.to_owned());
    }

    /// Removes `id` from `country`, dropping the country if it empties.
    fn unindex(&mut self, country: &str, id: RecipeId) -> Result<(), CatalogError> {
        let entry = self
            .countries
            .get_mut(country)
            .ok_or_else(|| CatalogError::CountryNotFound(country.to_owned()))?;
        entry.remove_dish(id)?;

        if entry.is_empty() {
            debug!(country, "pruning empty country");
            self.countries.remove(country);
            self.country_order.retain(|name| name != country);
        }
        Ok(())
    }
}

impl FromIterator<Recipe> for RecipeManager {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut manager = Self::new();
        manager.extend(iter);
        manager
    }
}

impl Extend<Recipe> for RecipeManager {
    fn extend<I: IntoIterator<Item = Recipe>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.arena.reserve(lower);
        self.order.reserve(lower);
        for recipe in iter {
            self.add_recipe(recipe);
        }
    }
}
