//! Ingredient, requirement and cocktail records
//!
//! JSON field names follow the catalog file format (camelCase). Every flag
//! defaults to false and every list to empty when absent.

use super::normalize::normalize_search_name;
use serde::{Deserialize, Serialize};

/// Ingredient identifier
pub type IngredientId = i64;

/// Cocktail identifier
pub type CocktailId = i64;

/// An ingredient the user may or may not have on the shelf
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    /// Stable unique id
    pub id: IngredientId,

    /// Display name
    pub name: String,

    /// Normalized form of `name` used for fallback lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_name: Option<String>,

    /// Whether the user currently owns it
    pub in_stock: bool,

    /// Base ingredient this one is a branded variant of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_ingredient_id: Option<IngredientId>,

    /// Shopping list membership
    pub in_shopping_list: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Ingredient {
    /// Create a base ingredient
    pub fn new(id: IngredientId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark this ingredient as a branded variant of `base`
    pub fn branded(mut self, base: IngredientId) -> Self {
        self.base_ingredient_id = Some(base);
        self
    }

    /// Set the stock flag
    pub fn stocked(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Id of the group this ingredient belongs to: its base, or itself
    pub fn base_id(&self) -> IngredientId {
        self.base_ingredient_id.unwrap_or(self.id)
    }

    /// True when this ingredient has no base of its own
    pub fn is_base(&self) -> bool {
        self.base_ingredient_id.is_none()
    }

    /// Key used for name lookup: the stored search name, else `name` normalized
    pub fn search_key(&self) -> String {
        match self.search_name.as_deref() {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => normalize_search_name(&self.name),
        }
    }
}

/// One line of a recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirement {
    /// Referenced ingredient, if the line carries an id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<IngredientId>,

    /// Literal ingredient name, used when the id does not resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub optional: bool,
    pub garnish: bool,
    pub allow_base_substitution: bool,
    pub allow_branded_substitutes: bool,

    /// Author-curated substitutes, checked in order
    pub substitutes: Vec<IngredientId>,
}

impl Requirement {
    /// Requirement referencing an ingredient by id
    pub fn of(ingredient_id: IngredientId) -> Self {
        Self {
            ingredient_id: Some(ingredient_id),
            ..Self::default()
        }
    }

    /// Requirement referencing an ingredient by name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// True when the line does not count towards availability
    pub fn is_excluded(&self, ignore_garnish: bool) -> bool {
        self.optional || (ignore_garnish && self.garnish)
    }
}

/// A recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cocktail {
    pub id: CocktailId,
    pub name: String,

    /// Ordered requirements
    pub ingredients: Vec<Requirement>,
}

impl Cocktail {
    pub fn new(id: CocktailId, name: impl Into<String>, ingredients: Vec<Requirement>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients,
        }
    }

    /// Literal ingredient ids referenced by this cocktail, first occurrence order
    pub fn referenced_ids(&self) -> impl Iterator<Item = IngredientId> + '_ {
        let mut seen = Vec::new();
        self.ingredients.iter().filter_map(move |r| {
            let id = r.ingredient_id?;
            if seen.contains(&id) {
                None
            } else {
                seen.push(id);
                Some(id)
            }
        })
    }
}
