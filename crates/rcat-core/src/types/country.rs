//! Country grouping of recipes.

use smallvec::SmallVec;

use super::id::RecipeId;
use super::recipe::Recipe;
use crate::error::CatalogError;

/// A named group of dishes, kept as a secondary index by the manager.
///
/// A country never owns recipes. It lists [`RecipeId`] handles into the
/// manager's arena, in insertion order, which is also display order.
///
/// # Examples
///
/// ```
/// use rcat_core::{Country, RecipeId};
///
/// let mut country = Country::new("Georgian");
/// country.add_dish(RecipeId::new(1));
/// country.add_dish(RecipeId::new(2));
/// assert_eq!(country.dishes(), &[RecipeId::new(1), RecipeId::new(2)]);
///
/// country.remove_dish(RecipeId::new(1)).unwrap();
/// assert_eq!(country.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    name: String,

    /// Most countries hold a handful of dishes.
    dishes: SmallVec<[RecipeId; 8]>,
}

impl Country {
    /// Creates an empty country.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dishes: SmallVec::new(),
        }
    }

    /// Returns the country name (its index key).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dish handles in display order.
    #[inline]
    #[must_use]
    pub fn dishes(&self) -> &[RecipeId] {
        &self.dishes
    }

    /// Returns the number of dishes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Returns `true` if the country lists no dishes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Returns `true` if `id` is listed.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: RecipeId) -> bool {
        self.dishes.contains(&id)
    }

    /// Appends a dish.
    pub fn add_dish(&mut self, id: RecipeId) {
        self.dishes.push(id);
    }

    /// Removes the first occurrence of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DishNotListed`] if the dish is not listed.
    pub fn remove_dish(&mut self, id: RecipeId) -> Result<(), CatalogError> {
        let position = self
            .dishes
            .iter()
            .position(|dish| *dish == id)
            .ok_or_else(|| CatalogError::DishNotListed {
                country: self.name.clone(),
                id,
            })?;
        self.dishes.remove(position);
        Ok(())
    }

    /// Returns the first dish whose name equals `name`.
    ///
    /// `resolve` maps a handle to the recipe it names; handles that fail to
    /// resolve are skipped.
    pub fn get_dish<'a, F>(&self, name: &str, resolve: F) -> Option<RecipeId>
    where
        F: Fn(RecipeId) -> Option<&'a Recipe>,
    {
        self.dishes
            .iter()
            .copied()
            .find(|id| resolve(*id).is_some_and(|recipe| recipe.name == name))
    }

    /// Returns the dish names in display order.
    pub fn dish_names<'a, F>(&self, resolve: F) -> Vec<&'a str>
    where
        F: Fn(RecipeId) -> Option<&'a Recipe>,
    {
        self.dishes
            .iter()
            .filter_map(|id| resolve(*id))
            .map(|recipe| recipe.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FxHashMap;

    fn arena(names: &[&str]) -> FxHashMap<RecipeId, Recipe> {
        names
            .iter()
            .zip(1..)
            .map(|(name, raw)| {
                (
                    RecipeId::new(raw),
                    Recipe::new(*name, "Japanese", Vec::new(), ""),
                )
            })
            .collect()
    }

    #[test]
    fn test_remove_missing_dish_fails() {
        let mut country = Country::new("Japanese");
        country.add_dish(RecipeId::new(1));

        let err = country.remove_dish(RecipeId::new(9)).unwrap_err();
        assert!(matches!(err, CatalogError::DishNotListed { id, .. } if id == RecipeId::new(9)));
        assert_eq!(country.len(), 1);
    }

    #[test]
    fn test_remove_dish_removes_first_occurrence_only() {
        let mut country = Country::new("Japanese");
        country.add_dish(RecipeId::new(1));
        country.add_dish(RecipeId::new(2));
        country.add_dish(RecipeId::new(1));

        country.remove_dish(RecipeId::new(1)).unwrap();
        assert_eq!(country.dishes(), &[RecipeId::new(2), RecipeId::new(1)]);
    }

    #[test]
    fn test_get_dish_returns_first_match() {
        let recipes = arena(&["Sushi", "Ramen", "Sushi"]);
        let mut country = Country::new("Japanese");
        for raw in 1..=3 {
            country.add_dish(RecipeId::new(raw));
        }

        let found = country.get_dish("Sushi", |id| recipes.get(&id));
        assert_eq!(found, Some(RecipeId::new(1)));
        assert_eq!(country.get_dish("Udon", |id| recipes.get(&id)), None);
    }

    #[test]
    fn test_dish_names_in_insertion_order() {
        let recipes = arena(&["Sushi", "Ramen"]);
        let mut country = Country::new("Japanese");
        country.add_dish(RecipeId::new(2));
        country.add_dish(RecipeId::new(1));

        assert_eq!(country.dish_names(|id| recipes.get(&id)), vec!["Ramen", "Sushi"]);
    }
}
