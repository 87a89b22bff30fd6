//! Built-in recipes used when no catalog file exists yet.

use crate::manager::RecipeManager;
use crate::types::{Ingredient, Recipe};

/// Returns the built-in recipe set, two dishes each from Georgia, Mexico and
/// Japan, in catalog order.
///
/// # Examples
///
/// ```
/// let names: Vec<_> = rcat_core::default_recipes().into_iter().map(|r| r.name).collect();
/// assert_eq!(names, ["Khachapuri", "Khinkali", "Tacos", "Enchiladas", "Sushi", "Ramen"]);
/// ```
#[must_use]
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Khachapuri",
            "Georgian",
            vec![
                Ingredient::new("Flour", "500g"),
                Ingredient::new("Cheese", "300g"),
                Ingredient::new("Egg", "1"),
            ],
            "Mix flour, cheese, and egg together. Knead the dough and let it rest. \
             Shape the dough into a round shape and fill with cheese. Bake until golden brown.",
        ),
        Recipe::new(
            "Khinkali",
            "Georgian",
            vec![
                Ingredient::new("Flour", "300g"),
                Ingredient::new("Meat", "200g"),
                Ingredient::new("Onion", "1"),
            ],
            "Mix flour, meat, and onion together. Knead the dough and let it rest. \
             Shape the dough into dumplings and boil them.",
        ),
        Recipe::new(
            "Tacos",
            "Mexican",
            vec![
                Ingredient::new("Tortilla", "4"),
                Ingredient::new("Chicken", "200g"),
                Ingredient::new("Cheese", "100g"),
            ],
            "Fill tortillas with chicken and cheese.",
        ),
        Recipe::new(
            "Enchiladas",
            "Mexican",
            vec![
                Ingredient::new("Tortilla", "6"),
                Ingredient::new("Beef", "300g"),
                Ingredient::new("Tomato", "400g"),
            ],
            "Fill tortillas with beef and tomato sauce. Top with cheese and bake.",
        ),
        Recipe::new(
            "Sushi",
            "Japanese",
            vec![
                Ingredient::new("Rice", "200g"),
                Ingredient::new("Fish", "200g"),
                Ingredient::new("Seaweed", "3 sheets"),
            ],
            "Roll the rice and fish in seaweed.",
        ),
        Recipe::new(
            "Ramen",
            "Japanese",
            vec![
                Ingredient::new("Noodles", "200g"),
                Ingredient::new("Broth", "1L"),
                Ingredient::new("Pork", "100g"),
            ],
            "Cook noodles in broth. Top with pork and other desired toppings.",
        ),
    ]
}

impl RecipeManager {
    /// Creates a manager holding only the built-in recipes.
    #[must_use]
    pub fn with_default_recipes() -> Self {
        default_recipes().into_iter().collect()
    }

    /// Adds the built-in recipes to the current catalog.
    pub fn load_default_recipes(&mut self) {
        self.extend(default_recipes());
    }
}
