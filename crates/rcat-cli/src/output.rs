//! Plain-text rendering of the catalog for the non-interactive commands.

use std::io::{self, Write};

use rcat_core::{Recipe, RecipeManager};

/// Writes every country with its numbered dishes.
pub fn write_catalog(out: &mut impl Write, manager: &RecipeManager) -> io::Result<()> {
    if manager.is_empty() {
        writeln!(out, "No countries available.")?;
        return Ok(());
    }

    for country in manager.countries() {
        writeln!(out, "{} Dishes:", country.name())?;
        let names = manager.dish_names(country.name()).unwrap_or_default();
        for (i, name) in names.iter().enumerate() {
            writeln!(out, "  {}. {name}", i + 1)?;
        }
    }
    Ok(())
}

/// Writes a recipe's title line followed by its rendered body.
pub fn write_recipe(out: &mut impl Write, recipe: &Recipe) -> io::Result<()> {
    writeln!(out, "{recipe}")?;
    writeln!(out, "{}", recipe.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_catalog_seed() {
        let mut out = Vec::new();
        write_catalog(&mut out, &RecipeManager::with_default_recipes()).unwrap();
        let text = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(text.trim_end(), @r"
        Georgian Dishes:
          1. Khachapuri
          2. Khinkali
        Mexican Dishes:
          1. Tacos
          2. Enchiladas
        Japanese Dishes:
          1. Sushi
          2. Ramen
        ");
    }

    #[test]
    fn test_write_catalog_empty() {
        let mut out = Vec::new();
        write_catalog(&mut out, &RecipeManager::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No countries available.\n");
    }

    #[test]
    fn test_write_recipe() {
        let manager = RecipeManager::with_default_recipes();
        let mut out = Vec::new();
        write_recipe(&mut out, manager.view_recipe("Japanese", "Ramen").unwrap()).unwrap();
        let text = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(text.trim_end(), @r"
        Ramen (Japanese)
        Ingredients:
        200g of Noodles
        1L of Broth
        100g of Pork
        Instructions: Cook noodles in broth. Top with pork and other desired toppings.
        ");
    }
}
