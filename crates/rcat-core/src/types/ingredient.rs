//! Ingredient value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe.
///
/// The quantity is free text ("500g", "3 sheets", "1") and is never parsed
/// into a number or unit.
///
/// # Examples
///
/// ```
/// use rcat_core::Ingredient;
///
/// let flour = Ingredient::new("Flour", "500g");
/// assert_eq!(flour.render(), "500g of Flour");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,

    /// Free-text quantity.
    pub quantity: String,
}

impl Ingredient {
    /// Creates a new ingredient.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Returns the display line `"<quantity> of <name>"`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.quantity, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_render() {
        assert_eq!(Ingredient::new("Seaweed", "3 sheets").render(), "3 sheets of Seaweed");
    }

    #[test]
    fn test_ingredient_render_keeps_empty_quantity() {
        assert_eq!(Ingredient::new("Salt", "").render(), " of Salt");
    }

    #[test]
    fn test_ingredient_wire_field_order() {
        let json = serde_json::to_string(&Ingredient::new("Egg", "1")).unwrap();
        assert_eq!(json, r#"{"name":"Egg","quantity":"1"}"#);
    }
}
