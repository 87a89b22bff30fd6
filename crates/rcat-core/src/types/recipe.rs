//! Recipe type and its field-level update rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ingredient::Ingredient;

/// A named dish from one country.
///
/// Field order matches the on-disk layout: `name`, `country`, `ingredients`,
/// `instructions`.
///
/// # Examples
///
/// ```
/// use rcat_core::{Ingredient, Recipe};
///
/// let recipe = Recipe::new(
///     "Pizza",
///     "Italian",
///     vec![Ingredient::new("Dough", "1")],
///     "Bake it",
/// );
/// assert_eq!(recipe.to_string(), "Pizza (Italian)");
/// assert_eq!(recipe.render(), "Ingredients:\n1 of Dough\nInstructions: Bake it");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the dish.
    pub name: String,

    /// Country of origin. Always equals the key of the country that lists
    /// this recipe inside a [`RecipeManager`](crate::RecipeManager).
    pub country: String,

    /// Ingredients in authoring order.
    pub ingredients: Vec<Ingredient>,

    /// Free-text preparation steps.
    pub instructions: String,
}

impl Recipe {
    /// Creates a new recipe.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        ingredients: Vec<Ingredient>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            ingredients,
            instructions: instructions.into(),
        }
    }

    /// Renders the ingredient list followed by the instructions line.
    ///
    /// An empty ingredient list leaves the ingredient section empty.
    #[must_use]
    pub fn render(&self) -> String {
        let ingredients = self
            .ingredients
            .iter()
            .map(Ingredient::render)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Ingredients:\n{ingredients}\nInstructions: {}",
            self.instructions
        )
    }

    /// Applies the supplied fields of `update` in place.
    ///
    /// Text fields are replaced only by non-empty values; an empty string
    /// means "keep". Ingredients are replaced whenever supplied, so an empty
    /// list clears them.
    ///
    /// Changing `country` here does not touch any country index. Use
    /// [`RecipeManager::update_recipe`](crate::RecipeManager::update_recipe)
    /// for recipes owned by a manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use rcat_core::{Ingredient, Recipe, RecipeUpdate};
    ///
    /// let mut recipe = Recipe::new("Tacos", "Mexican", vec![Ingredient::new("Tortilla", "4")], "Fill.");
    /// recipe.apply_update(RecipeUpdate::new().name("").ingredients(Vec::new()));
    ///
    /// assert_eq!(recipe.name, "Tacos");
    /// assert!(recipe.ingredients.is_empty());
    /// ```
    pub fn apply_update(&mut self, update: RecipeUpdate) {
        let RecipeUpdate {
            name,
            country,
            ingredients,
            instructions,
        } = update;

        if let Some(name) = non_empty(name) {
            self.name = name;
        }
        if let Some(country) = non_empty(country) {
            self.country = country;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = non_empty(instructions) {
            self.instructions = instructions;
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}

/// A partial edit of a [`Recipe`].
///
/// Every field is optional. See [`Recipe::apply_update`] for how empty
/// values are treated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeUpdate {
    /// New dish name.
    pub name: Option<String>,

    /// New country of origin.
    pub country: Option<String>,

    /// Replacement ingredient list.
    pub ingredients: Option<Vec<Ingredient>>,

    /// New instructions.
    pub instructions: Option<String>,
}

impl RecipeUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the replacement ingredient list.
    #[must_use]
    pub fn ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    /// Sets the new instructions.
    #[must_use]
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Returns the target country if this update moves the recipe away from
    /// `current`.
    #[must_use]
    pub fn relocation_target(&self, current: &str) -> Option<&str> {
        self.country
            .as_deref()
            .filter(|country| !country.is_empty() && *country != current)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn khachapuri() -> Recipe {
        Recipe::new(
            "Khachapuri",
            "Georgian",
            vec![
                Ingredient::new("Flour", "500g"),
                Ingredient::new("Cheese", "300g"),
                Ingredient::new("Egg", "1"),
            ],
            "Bake until golden brown.",
        )
    }

    #[test]
    fn test_recipe_render() {
        insta::assert_snapshot!(khachapuri().render(), @r"
        Ingredients:
        500g of Flour
        300g of Cheese
        1 of Egg
        Instructions: Bake until golden brown.
        ");
    }

    #[test]
    fn test_recipe_render_without_ingredients() {
        let recipe = Recipe::new("Water", "Anywhere", Vec::new(), "Pour.");
        assert_eq!(recipe.render(), "Ingredients:\n\nInstructions: Pour.");
    }

    #[test]
    fn test_recipe_display() {
        assert_eq!(khachapuri().to_string(), "Khachapuri (Georgian)");
    }

    #[test]
    fn test_apply_update_ignores_empty_text_fields() {
        let mut recipe = khachapuri();
        recipe.apply_update(
            RecipeUpdate::new()
                .name("")
                .country("")
                .instructions(""),
        );
        assert_eq!(recipe, khachapuri());
    }

    #[test]
    fn test_apply_update_replaces_supplied_fields() {
        let mut recipe = khachapuri();
        recipe.apply_update(
            RecipeUpdate::new()
                .name("Adjaruli")
                .country("Adjara")
                .ingredients(vec![Ingredient::new("Butter", "50g")])
                .instructions("Add butter."),
        );
        assert_eq!(recipe.name, "Adjaruli");
        assert_eq!(recipe.country, "Adjara");
        assert_eq!(recipe.ingredients, vec![Ingredient::new("Butter", "50g")]);
        assert_eq!(recipe.instructions, "Add butter.");
    }

    #[test]
    fn test_apply_update_empty_ingredients_clears_list() {
        let mut recipe = khachapuri();
        recipe.apply_update(RecipeUpdate::new().ingredients(Vec::new()));
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.name, "Khachapuri");
    }

    #[test]
    fn test_apply_update_absent_ingredients_keeps_list() {
        let mut recipe = khachapuri();
        recipe.apply_update(RecipeUpdate::new().instructions("Eat."));
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.instructions, "Eat.");
    }

    #[test]
    fn test_relocation_target() {
        let update = RecipeUpdate::new().country("French");
        assert_eq!(update.relocation_target("Italian"), Some("French"));
        assert_eq!(update.relocation_target("French"), None);
        assert_eq!(RecipeUpdate::new().country("").relocation_target("Italian"), None);
        assert_eq!(RecipeUpdate::new().relocation_target("Italian"), None);
    }
}
