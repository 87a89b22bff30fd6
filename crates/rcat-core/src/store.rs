//! JSON persistence for [`RecipeManager`].
//!
//! The catalog file is a JSON array of recipes in canonical order:
//!
//! ```json
//! [
//!     {
//!         "name": "Sushi",
//!         "country": "Japanese",
//!         "ingredients": [
//!             {
//!                 "name": "Rice",
//!                 "quantity": "200g"
//!             }
//!         ],
//!         "instructions": "Roll the rice and fish in seaweed."
//!     }
//! ]
//! ```
//!
//! # Failure behaviour
//!
//! - **Missing file on load**: not an error, the built-in recipes are seeded
//! - **Unreadable or malformed file on load**: [`StoreError`], in-memory state untouched
//! - **Failed save**: [`StoreError`], the previous file untouched. Saves go to a
//!   temporary file in the same directory which is then renamed over the target.

use std::io::{self, Write};

use camino::Utf8Path;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::manager::RecipeManager;
use crate::types::Recipe;

/// Indentation width used by [`RecipeManager::save_to_file`].
pub const DEFAULT_INDENT: usize = 4;

/// What [`RecipeManager::load_from_file`] found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and this many recipes were read from it.
    Loaded(usize),

    /// No file existed, so this many built-in recipes were seeded.
    Seeded(usize),
}

impl LoadOutcome {
    /// Returns the number of recipes now in the catalog.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Loaded(count) | Self::Seeded(count) => count,
        }
    }

    /// Returns `true` if the built-in recipes were used.
    #[must_use]
    pub const fn is_seeded(self) -> bool {
        matches!(self, Self::Seeded(_))
    }
}

impl RecipeManager {
    /// Creates a manager from the catalog at `path`, seeding the built-in
    /// recipes if the file does not exist.
    pub fn open(path: &Utf8Path) -> Result<(Self, LoadOutcome), StoreError> {
        let mut manager = Self::new();
        let outcome = manager.load_from_file(path)?;
        Ok((manager, outcome))
    }

    /// Replaces the whole catalog with the contents of `path`.
    ///
    /// If `path` does not exist the catalog is replaced by the built-in
    /// recipes instead. On error the current catalog is left as it was.
    pub fn load_from_file(&mut self, path: &Utf8Path) -> Result<LoadOutcome, StoreError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                *self = Self::with_default_recipes();
                info!(%path, recipes = self.len(), "catalog not found, seeded default recipes");
                return Ok(LoadOutcome::Seeded(self.len()));
            }
            Err(err) => return Err(StoreError::read(path, err)),
        };

        *self = Self::from_json(&text).map_err(|err| StoreError::parse(path, err))?;
        info!(%path, recipes = self.len(), countries = self.country_names().len(), "catalog loaded");
        Ok(LoadOutcome::Loaded(self.len()))
    }

    /// Writes the catalog to `path` with [`DEFAULT_INDENT`] spaces per level.
    pub fn save_to_file(&self, path: &Utf8Path) -> Result<(), StoreError> {
        self.save_to_file_with_indent(path, DEFAULT_INDENT)
    }

    /// Writes the catalog to `path` with `indent` spaces per level.
    pub fn save_to_file_with_indent(
        &self,
        path: &Utf8Path,
        indent: usize,
    ) -> Result<(), StoreError> {
        let text = self.to_json(indent)?;
        write_atomically(path, text.as_bytes())?;
        info!(%path, recipes = self.len(), "catalog saved");
        Ok(())
    }

    /// Encodes the catalog as an indented JSON array with a trailing newline.
    pub fn to_json(&self, indent: usize) -> Result<String, StoreError> {
        let recipes: Vec<&Recipe> = self.recipes().collect();
        let indent = vec![b' '; indent];

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        recipes
            .serialize(&mut serializer)
            .map_err(StoreError::Serialize)?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(StoreError::Encoding)
    }

    /// Builds a catalog from a JSON array of recipes.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let recipes: Vec<Recipe> = serde_json::from_str(text)?;
        Ok(recipes.into_iter().collect())
    }
}

/// Writes `bytes` to a temporary file beside `path`, syncs it, and renames it
/// over `path`.
fn write_atomically(path: &Utf8Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent).map_err(|err| StoreError::write(path, err))?;
    debug!(%path, tmp = %tmp.path().display(), "writing catalog to temporary file");
    tmp.write_all(bytes)
        .map_err(|err| StoreError::write(path, err))?;
    tmp.flush().map_err(|err| StoreError::write(path, err))?;
    tmp.as_file()
        .sync_all()
        .map_err(|err| StoreError::write(path, err))?;

    tmp.persist(path)
        .map_err(|err| StoreError::persist(path, err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ingredient, RecipeUpdate};
    use camino::Utf8PathBuf;

    fn temp_catalog() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("recipes.json")).unwrap();
        (dir, path)
    }

    fn sample() -> RecipeManager {
        [
            Recipe::new(
                "Pizza",
                "Italian",
                vec![Ingredient::new("Dough", "1")],
                "Bake it",
            ),
            Recipe::new("Water", "Anywhere", Vec::new(), "Pour."),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_file_layout() {
        let text = sample().to_json(DEFAULT_INDENT).unwrap();
        insta::assert_snapshot!(text.trim_end(), @r#"
        [
            {
                "name": "Pizza",
                "country": "Italian",
                "ingredients": [
                    {
                        "name": "Dough",
                        "quantity": "1"
                    }
                ],
                "instructions": "Bake it"
            },
            {
                "name": "Water",
                "country": "Anywhere",
                "ingredients": [],
                "instructions": "Pour."
            }
        ]
        "#);
    }

    #[test]
    fn test_non_ascii_text_is_kept_verbatim() {
        let manager: RecipeManager = [Recipe::new(
            "Хачапури",
            "Georgian",
            vec![Ingredient::new("Сыр", "300g")],
            "Запечь.",
        )]
        .into_iter()
        .collect();

        let text = manager.to_json(DEFAULT_INDENT).unwrap();
        assert!(text.contains("\"name\": \"Хачапури\""));
        assert!(!text.contains('\u{FFFD}'));

        let reloaded = RecipeManager::from_json(&text).unwrap();
        assert_eq!(
            reloaded.view_recipe("Georgian", "Хачапури").unwrap().ingredients,
            vec![Ingredient::new("Сыр", "300g")]
        );
    }

    #[test]
    fn test_custom_indent() {
        let text = sample().to_json(2).unwrap();
        assert!(text.starts_with("[\n  {\n    \"name\": \"Pizza\""));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_empty_catalog_is_empty_array() {
        assert_eq!(RecipeManager::new().to_json(DEFAULT_INDENT).unwrap(), "[]\n");
    }

    #[test]
    fn test_missing_file_seeds_defaults() {
        let (_dir, path) = temp_catalog();
        let mut manager = sample();

        let outcome = manager.load_from_file(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Seeded(6));
        assert!(outcome.is_seeded());
        assert!(manager.view_recipe("Italian", "Pizza").is_none());
        assert!(manager.view_recipe("Georgian", "Khachapuri").is_some());
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let (_dir, path) = temp_catalog();
        let mut original = RecipeManager::with_default_recipes();
        original
            .update_recipe("Tacos", "Mexican", RecipeUpdate::new().country("Tex-Mex"))
            .unwrap()
            .unwrap();
        original.add_recipe(Recipe::new("Pelmeni", "Georgian", Vec::new(), "Boil."));
        original.save_to_file(&path).unwrap();

        let (loaded, outcome) = RecipeManager::open(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(7));
        loaded.verify_index().unwrap();

        let before: Vec<_> = original.recipes().cloned().collect();
        let after: Vec<_> = loaded.recipes().cloned().collect();
        assert_eq!(before, after);
        // Country order is rebuilt from recipe order on load.
        assert_eq!(
            loaded.country_names(),
            vec!["Georgian", "Tex-Mex", "Mexican", "Japanese"]
        );
        assert_eq!(
            loaded.dish_names("Georgian").unwrap(),
            vec!["Khachapuri", "Khinkali", "Pelmeni"]
        );
    }

    #[test]
    fn test_load_replaces_instead_of_merging() {
        let (_dir, path) = temp_catalog();
        sample().save_to_file(&path).unwrap();

        let mut manager = RecipeManager::with_default_recipes();
        manager.load_from_file(&path).unwrap();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.country_names(), vec!["Italian", "Anywhere"]);
    }

    #[test]
    fn test_malformed_file_leaves_state_untouched() {
        let (_dir, path) = temp_catalog();
        std::fs::write(&path, r#"[{"name": "Pizza", "country": "Italian"}]"#).unwrap();

        let mut manager = sample();
        let err = manager.load_from_file(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert_eq!(manager.len(), 2);
        assert!(manager.view_recipe("Italian", "Pizza").is_some());
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let (dir, _path) = temp_catalog();
        let as_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let mut manager = sample();
        let err = manager.load_from_file(&as_dir).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let (dir, path) = temp_catalog();
        sample().save_to_file(&path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let missing_dir = Utf8PathBuf::from_path_buf(dir.path().join("gone")).unwrap();
        let err = RecipeManager::with_default_recipes()
            .save_to_file(&missing_dir.join("recipes.json"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let (_dir, path) = temp_catalog();
        RecipeManager::with_default_recipes().save_to_file(&path).unwrap();
        sample().save_to_file(&path).unwrap();

        let (loaded, _) = RecipeManager::open(&path).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_reads_compact_layout() {
        let text = r#"[
            {"name": "Sushi", "country": "Japanese",
             "ingredients": [{"name": "Rice", "quantity": "200g"}],
             "instructions": "Roll the rice and fish in seaweed."}
        ]"#;
        let manager = RecipeManager::from_json(text).unwrap();
        assert_eq!(
            manager.view_recipe("Japanese", "Sushi").unwrap().ingredients,
            vec![Ingredient::new("Rice", "200g")]
        );
    }
}
