//! Ingredient and cocktail catalog
//!
//! The catalog is the plain-data snapshot the availability engine works on.
//! Parsing is tolerant: a catalog whose `ingredients` or `cocktails` member
//! is not a list is read as empty, and entries that fail to deserialize are
//! skipped rather than failing the whole file.

pub mod model;
pub mod normalize;
pub mod usage;

pub use model::{Cocktail, CocktailId, Ingredient, IngredientId, Requirement};
pub use normalize::normalize_search_name;
pub use usage::UsageMap;

use crate::error::{BarbackError, BarbackResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Full catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub cocktails: Vec<Cocktail>,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, cocktails: Vec<Cocktail>) -> Self {
        Self {
            ingredients,
            cocktails,
        }
    }

    /// Parse catalog JSON text. Only a syntax error fails; shape problems
    /// degrade to empty lists.
    pub fn from_json_str(text: &str) -> BarbackResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(value))
    }

    /// Build a catalog from an already-parsed JSON value
    pub fn from_json(mut value: Value) -> Self {
        let ingredients = take_list::<Ingredient>(&mut value, "ingredients");
        let cocktails = take_list::<Cocktail>(&mut value, "cocktails");
        debug!(
            "Parsed catalog: {} ingredients, {} cocktails",
            ingredients.len(),
            cocktails.len()
        );
        Self {
            ingredients,
            cocktails,
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> BarbackResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy of this catalog with every missing search name filled in
    pub fn normalized(mut self) -> Self {
        for ingredient in &mut self.ingredients {
            let key = ingredient.search_key();
            ingredient.search_name = Some(key);
        }
        self
    }

    /// Find an ingredient by numeric id or by name
    pub fn find_ingredient(&self, query: &str) -> BarbackResult<&Ingredient> {
        if let Ok(id) = query.trim().parse::<IngredientId>() {
            if let Some(found) = self.ingredients.iter().find(|i| i.id == id) {
                return Ok(found);
            }
        }

        let key = normalize_search_name(query);
        let matches: Vec<_> = self
            .ingredients
            .iter()
            .filter(|i| i.search_key() == key)
            .collect();
        match matches.as_slice() {
            [single] => Ok(single),
            [] => Err(BarbackError::IngredientNotFound(query.to_string())),
            many => Err(BarbackError::AmbiguousName {
                kind: "ingredient",
                name: query.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Find a cocktail by numeric id or by name
    pub fn find_cocktail(&self, query: &str) -> BarbackResult<&Cocktail> {
        if let Ok(id) = query.trim().parse::<CocktailId>() {
            if let Some(found) = self.cocktails.iter().find(|c| c.id == id) {
                return Ok(found);
            }
        }

        let key = normalize_search_name(query);
        let matches: Vec<_> = self
            .cocktails
            .iter()
            .filter(|c| normalize_search_name(&c.name) == key)
            .collect();
        match matches.as_slice() {
            [single] => Ok(single),
            [] => Err(BarbackError::CocktailNotFound(query.to_string())),
            many => Err(BarbackError::AmbiguousName {
                kind: "cocktail",
                name: query.to_string(),
                matches: many.len(),
            }),
        }
    }

    /// Set the stock flag of one ingredient. Returns whether it changed.
    pub fn set_stock(&mut self, id: IngredientId, in_stock: bool) -> BarbackResult<bool> {
        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BarbackError::IngredientNotFound(id.to_string()))?;

        let changed = ingredient.in_stock != in_stock;
        ingredient.in_stock = in_stock;
        Ok(changed)
    }

    pub fn usage_map(&self) -> UsageMap {
        UsageMap::build(&self.cocktails)
    }
}

/// Remove `key` from a JSON object and deserialize it as a list, skipping
/// entries that do not fit `T`
fn take_list<T: DeserializeOwned>(value: &mut Value, key: &str) -> Vec<T> {
    let items = match value.get_mut(key).map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Vec::new(),
        Some(other) => {
            warn!("Catalog `{}` is not a list ({}), treating as empty", key, kind(&other));
            return Vec::new();
        }
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(pos, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed {} entry #{}: {}", key, pos, e);
                None
            }
        })
        .collect();

    if parsed.len() != total {
        debug!("Kept {} of {} {} entries", parsed.len(), total, key);
    }
    parsed
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
