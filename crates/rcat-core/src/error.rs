//! Error types for the rcat-core crate.
//!
//! - [`CatalogError`] - the country index disagrees with the recipe arena
//! - [`StoreError`] - reading or writing the catalog file failed
//! - [`ConfigError`] - loading or validating configuration failed
//!
//! A missing recipe or country is never an error: lookups return `None`.

use camino::{Utf8Path, Utf8PathBuf};

use crate::types::RecipeId;

/// Errors raised when the country index and the recipe arena disagree.
///
/// Every public mutator of [`RecipeManager`](crate::RecipeManager) keeps the
/// two consistent, so these surface only if that invariant was broken.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A recipe names a country that is not in the index.
    #[error("country '{0}' is not indexed")]
    CountryNotFound(String),

    /// A country does not list a dish it was expected to list.
    #[error("dish {id} is not listed under country '{country}'")]
    DishNotListed {
        /// The country that was searched.
        country: String,
        /// The missing dish.
        id: RecipeId,
    },

    /// A handle does not resolve to a recipe in the arena.
    #[error("recipe {0} is not in the catalog")]
    UnknownRecipe(RecipeId),

    /// A recipe is listed under a country other than its own.
    #[error("recipe {id} belongs to '{actual}' but is listed under '{listed}'")]
    CountryMismatch {
        /// The misfiled recipe.
        id: RecipeId,
        /// The country that lists it.
        listed: String,
        /// The country recorded on the recipe.
        actual: String,
    },

    /// A country is indexed without any dishes.
    #[error("country '{0}' is indexed but lists no dishes")]
    EmptyCountry(String),

    /// The index lists a different number of dishes than the catalog holds.
    #[error("country index lists {listed} dishes for {recipes} recipes")]
    IndexSizeMismatch {
        /// Dishes reachable through the country index.
        listed: usize,
        /// Recipes in the canonical sequence.
        recipes: usize,
    },
}

/// Errors that can occur while loading or saving the catalog file.
///
/// A missing file on load is not an error; it triggers the default seed.
///
/// # Examples
///
/// ```
/// use rcat_core::StoreError;
/// use std::io;
///
/// let err = StoreError::read("recipes.json", io::Error::from(io::ErrorKind::PermissionDenied));
/// assert_eq!(err.path().map(|p| p.as_str()), Some("recipes.json"));
/// assert!(err.to_string().contains("recipes.json"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The catalog file exists but could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid recipe list.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory catalog could not be encoded.
    #[error("failed to encode catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The encoded catalog was not valid UTF-8.
    #[error("encoded catalog is not valid UTF-8: {0}")]
    Encoding(#[source] std::string::FromUtf8Error),

    /// Writing the temporary file next to the catalog failed.
    #[error("failed to write catalog {path}: {source}")]
    Write {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Replacing the catalog with the freshly written file failed.
    #[error("failed to replace catalog {path}: {source}")]
    Persist {
        /// The catalog path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Creates a new [`StoreError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`StoreError::Parse`] error.
    #[inline]
    pub fn parse(path: impl Into<Utf8PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`StoreError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`StoreError::Persist`] error.
    #[inline]
    pub fn persist(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Persist {
            path: path.into(),
            source,
        }
    }

    /// Returns the catalog path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. }
            | Self::Persist { path, .. } => Some(path),
            Self::Serialize(_) | Self::Encoding(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_dish_not_listed_display() {
        let err = CatalogError::DishNotListed {
            country: "Italian".to_owned(),
            id: RecipeId::new(3),
        };
        assert_eq!(err.to_string(), "dish #3 is not listed under country 'Italian'");
    }

    #[test]
    fn test_store_error_paths() {
        let err = StoreError::write("out/recipes.json", io::Error::from(io::ErrorKind::Other));
        assert_eq!(err.path().map(Utf8Path::as_str), Some("out/recipes.json"));

        let encode = serde_json::from_str::<u8>("x").unwrap_err();
        assert!(StoreError::Serialize(encode).path().is_none());

        let bytes = String::from_utf8(vec![0xff]).unwrap_err();
        let err = StoreError::Encoding(bytes);
        assert!(err.path().is_none());
        assert!(err.to_string().starts_with("encoded catalog is not valid UTF-8"));
    }

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let msg = StoreError::parse("recipes.json", source).to_string();
        assert!(msg.starts_with("failed to parse catalog recipes.json"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "prompt.done_sentinel".to_owned(),
            reason: "must not be empty".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("prompt.done_sentinel"));
        assert!(msg.contains("must not be empty"));
    }
}
