//! Usage map: ingredient id -> cocktails whose requirements name it literally

use super::model::{Cocktail, CocktailId, IngredientId};
use indexmap::IndexMap;

/// Cocktails referencing each ingredient, built from literal `ingredientId`s
///
/// Substitutes are not followed. Each cocktail appears at most once per
/// ingredient, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageMap {
    by_ingredient: IndexMap<IngredientId, Vec<CocktailId>>,
}

impl UsageMap {
    /// Build the map from a cocktail list
    pub fn build(cocktails: &[Cocktail]) -> Self {
        let mut by_ingredient: IndexMap<IngredientId, Vec<CocktailId>> = IndexMap::new();
        for cocktail in cocktails {
            for id in cocktail.referenced_ids() {
                by_ingredient.entry(id).or_default().push(cocktail.id);
            }
        }
        Self { by_ingredient }
    }

    /// Cocktails referencing `id`; empty when none do
    pub fn cocktails_for(&self, id: IngredientId) -> &[CocktailId] {
        self.by_ingredient
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of ingredients referenced by at least one cocktail
    pub fn len(&self) -> usize {
        self.by_ingredient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ingredient.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IngredientId, &[CocktailId])> {
        self.by_ingredient.iter().map(|(id, c)| (*id, c.as_slice()))
    }
}

impl FromIterator<(IngredientId, Vec<CocktailId>)> for UsageMap {
    fn from_iter<T: IntoIterator<Item = (IngredientId, Vec<CocktailId>)>>(iter: T) -> Self {
        Self {
            by_ingredient: iter.into_iter().collect(),
        }
    }
}
