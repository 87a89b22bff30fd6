//! The interactive five-choice menu.
//!
//! The menu borrows the process's [`RecipeManager`] for the whole session and
//! routes each choice to one manager operation. Invalid choices and numbers
//! are re-asked; only a closed input stream or a console failure ends the
//! loop early.

use std::io::{BufRead, Write};

use camino::Utf8Path;
use rcat_core::{Recipe, RecipeManager, RecipeUpdate};
use tracing::{info, warn};

use crate::error::PromptError;
use crate::prompt::Prompter;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose "Save and Exit" and the save succeeded.
    Saved,

    /// Input ran out before the user saved.
    InputClosed,
}

/// Where and how the session saves the catalog.
#[derive(Debug, Clone, Copy)]
pub struct SaveTarget<'a> {
    /// Catalog file.
    pub path: &'a Utf8Path,

    /// Spaces per indentation level.
    pub indent: usize,

    /// Ask before saving, because the existing file could not be loaded and
    /// saving would replace it.
    pub confirm_overwrite: bool,
}

/// An interactive session over one manager.
pub struct Menu<'a, R, W> {
    manager: &'a mut RecipeManager,
    prompter: Prompter<R, W>,
    target: SaveTarget<'a>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a session that saves to `target` on exit.
    pub fn new(
        manager: &'a mut RecipeManager,
        prompter: Prompter<R, W>,
        target: SaveTarget<'a>,
    ) -> Self {
        Self {
            manager,
            prompter,
            target,
        }
    }

    /// Runs the menu until the catalog is saved or input runs out.
    pub fn run(&mut self) -> Result<SessionEnd, PromptError> {
        loop {
            match self.step() {
                Ok(Some(end)) => return Ok(end),
                Ok(None) => {}
                Err(err) if err.is_closed() => return Ok(SessionEnd::InputClosed),
                Err(err) => return Err(err),
            }
        }
    }

    /// Shows the menu once and handles one choice.
    fn step(&mut self) -> Result<Option<SessionEnd>, PromptError> {
        self.prompter.say("1. Add Dishes")?;
        self.prompter.say("2. View Dishes")?;
        self.prompter.say("3. Update Dishes")?;
        self.prompter.say("4. Delete Dishes")?;
        self.prompter.say("5. Save and Exit")?;

        let choice = self.prompter.line("Enter your choice: ")?;
        match choice.trim() {
            "1" => self.add()?,
            "2" => self.view()?,
            "3" => self.update()?,
            "4" => self.delete()?,
            "5" => {
                if self.save()? {
                    return Ok(Some(SessionEnd::Saved));
                }
            }
            _ => self.prompter.say("Invalid choice! Please try again.")?,
        }
        Ok(None)
    }

    fn add(&mut self) -> Result<(), PromptError> {
        let countries = self.country_names();
        for (i, name) in countries.iter().enumerate() {
            self.prompter.say(format_args!("{}. {name} Dishes", i + 1))?;
        }
        self.prompter
            .say(format_args!("{}. Add a new country", countries.len() + 1))?;

        let index = self
            .prompter
            .choose("Enter the number of the country: ", countries.len() + 1)?;
        let country = match countries.get(index) {
            Some(existing) => existing.clone(),
            None => self.prompter.required_line("Enter new country name: ")?,
        };

        let name = self.prompter.required_line("Enter dish name: ")?;
        let ingredients = self.prompter.ingredients("ingredient")?;
        let instructions = self.prompter.line("Enter instructions: ")?;

        let recipe = Recipe::new(name, country, ingredients, instructions);
        info!(dish = %recipe.name, country = %recipe.country, "dish added");
        self.manager.add_recipe(recipe);
        self.prompter.say("Dish added successfully!")
    }

    fn view(&mut self) -> Result<(), PromptError> {
        let Some((country, dish)) = self.select_dish()? else {
            return Ok(());
        };
        match self.manager.view_recipe(&country, &dish) {
            Some(recipe) => self.prompter.say(recipe.render()),
            None => self.prompter.say("Dish not found!"),
        }
    }

    fn update(&mut self) -> Result<(), PromptError> {
        let Some((country, dish)) = self.select_dish()? else {
            return Ok(());
        };

        let name = self
            .prompter
            .line("Enter new dish name (leave blank to keep): ")?;
        let new_country = self
            .prompter
            .line("Enter new country (leave blank to keep): ")?;
        let ingredients = self.prompter.ingredients("new ingredient")?;
        let instructions = self.prompter.line("Enter new instructions: ")?;

        let update = RecipeUpdate::new()
            .name(name.trim())
            .country(new_country.trim())
            .ingredients(ingredients)
            .instructions(instructions);

        match self.manager.update_recipe(&dish, &country, update) {
            Ok(Some(recipe)) => {
                info!(dish = %recipe.name, country = %recipe.country, "dish updated");
                self.prompter.say("Dish updated successfully!")
            }
            Ok(None) => self.prompter.say("Dish not found!"),
            Err(err) => {
                warn!(error = %err, dish = %dish, country = %country, "update failed");
                self.prompter.say(format_args!("Error updating dish: {err}"))
            }
        }
    }

    fn delete(&mut self) -> Result<(), PromptError> {
        let Some((country, dish)) = self.select_dish()? else {
            return Ok(());
        };

        match self.manager.delete_recipe(&dish, &country) {
            Ok(Some(recipe)) => {
                info!(dish = %recipe.name, country = %recipe.country, "dish deleted");
                self.prompter.say("Dish deleted successfully!")
            }
            Ok(None) => self.prompter.say("Dish not found!"),
            Err(err) => {
                warn!(error = %err, dish = %dish, country = %country, "delete failed");
                self.prompter.say(format_args!("Error deleting dish: {err}"))
            }
        }
    }

    /// Saves the catalog. Returns `false` if the save failed or was cancelled
    /// and the session should continue.
    fn save(&mut self) -> Result<bool, PromptError> {
        let SaveTarget {
            path,
            indent,
            confirm_overwrite,
        } = self.target;

        if confirm_overwrite {
            self.prompter.say(format_args!(
                "Warning: {path} could not be loaded and will be overwritten."
            ))?;
            let answer = self.prompter.line("Overwrite it? (y/N): ")?;
            if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                info!(%path, "save cancelled to keep unreadable catalog");
                self.prompter.say("Save cancelled.")?;
                return Ok(false);
            }
        }

        match self.manager.save_to_file_with_indent(path, indent) {
            Ok(()) => {
                self.prompter.say("Dishes saved! Exiting...")?;
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, %path, "save failed");
                self.prompter.say(format_args!("Error saving dishes: {err}"))?;
                Ok(false)
            }
        }
    }

    /// Asks for a country, then for one of its dishes.
    fn select_dish(&mut self) -> Result<Option<(String, String)>, PromptError> {
        let countries = self.country_names();
        if countries.is_empty() {
            self.prompter.say("No countries available.")?;
            return Ok(None);
        }

        for (i, name) in countries.iter().enumerate() {
            self.prompter.say(format_args!("{}. {name} Dishes", i + 1))?;
        }
        let index = self
            .prompter
            .choose("Enter the number of the country: ", countries.len())?;
        let country = &countries[index];

        let dishes: Vec<String> = self
            .manager
            .dish_names(country)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_owned)
            .collect();
        if dishes.is_empty() {
            self.prompter.say("Country not found.")?;
            return Ok(None);
        }

        self.prompter.say(format_args!("{country} Dishes:"))?;
        for (i, dish) in dishes.iter().enumerate() {
            self.prompter.say(format_args!("{}. {dish}", i + 1))?;
        }
        let index = self
            .prompter
            .choose("Enter the number of the dish: ", dishes.len())?;

        Ok(Some((country.clone(), dishes[index].clone())))
    }

    fn country_names(&self) -> Vec<String> {
        self.manager
            .country_names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}
