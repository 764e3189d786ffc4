//! Error types for Barback
//!
//! I/O, configuration and CLI lookups return `BarbackResult<T>`. The
//! availability engine itself never fails: malformed input degrades to
//! empty or unsatisfied results instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Barback operations
pub type BarbackResult<T> = Result<T, BarbackError>;

/// All errors that can occur in Barback
#[derive(Error, Debug)]
pub enum BarbackError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Catalog errors
    #[error("Catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog at {path}: {reason}")]
    CatalogInvalid { path: PathBuf, reason: String },

    // Lookup errors
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Cocktail not found: {0}")]
    CocktailNotFound(String),

    #[error("Name '{name}' matches {matches} {kind}s")]
    AmbiguousName {
        kind: &'static str,
        name: String,
        matches: usize,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl BarbackError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CatalogNotFound(_) => {
                Some("Run: barback import <file>, or pass --catalog <path>")
            }
            Self::AmbiguousName { .. } => Some("Use the numeric id instead of the name"),
            Self::ConfigInvalid { .. } => Some("Fix or remove the config file, then run: barback config init"),
            Self::IngredientNotFound(_) => Some("Run: barback ingredients to list known ids"),
            Self::CocktailNotFound(_) => Some("Run: barback available to list makeable cocktails"),
            _ => None,
        }
    }
}
