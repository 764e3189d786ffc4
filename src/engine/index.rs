//! Lookup structures over a flat ingredient list

use crate::catalog::{normalize_search_name, Ingredient, IngredientId};
use std::collections::HashMap;
use tracing::debug;

/// Name lookup slot; a name shared by several ingredients resolves to nothing
#[derive(Debug, Clone, Copy)]
enum NameSlot<'a> {
    Unique(&'a Ingredient),
    Ambiguous,
}

/// Id, base-group and name lookups over a borrowed ingredient list
///
/// Group members keep the order of the supplied list, which makes
/// [`IngredientIndex::find_brand`] deterministic: the first in-stock brand in
/// catalog order wins.
#[derive(Debug, Clone)]
pub struct IngredientIndex<'a> {
    by_id: HashMap<IngredientId, &'a Ingredient>,
    by_base: HashMap<IngredientId, Vec<&'a Ingredient>>,
    by_name: HashMap<String, NameSlot<'a>>,
}

impl<'a> IngredientIndex<'a> {
    pub fn new(ingredients: &'a [Ingredient]) -> Self {
        let mut by_id = HashMap::with_capacity(ingredients.len());
        let mut by_base: HashMap<IngredientId, Vec<&'a Ingredient>> = HashMap::new();
        let mut by_name = HashMap::with_capacity(ingredients.len());

        for ingredient in ingredients {
            if by_id.contains_key(&ingredient.id) {
                debug!("Duplicate ingredient id {}, keeping first", ingredient.id);
                continue;
            }
            by_id.insert(ingredient.id, ingredient);
            by_base.entry(ingredient.base_id()).or_default().push(ingredient);
            by_name
                .entry(ingredient.search_key())
                .and_modify(|slot| *slot = NameSlot::Ambiguous)
                .or_insert(NameSlot::Unique(ingredient));
        }

        Self {
            by_id,
            by_base,
            by_name,
        }
    }

    pub fn get(&self, id: IngredientId) -> Option<&'a Ingredient> {
        self.by_id.get(&id).copied()
    }

    /// Unique ingredient with this name after normalization
    pub fn by_name(&self, name: &str) -> Option<&'a Ingredient> {
        match self.by_name.get(&normalize_search_name(name)) {
            Some(NameSlot::Unique(ingredient)) => Some(ingredient),
            Some(NameSlot::Ambiguous) | None => None,
        }
    }

    /// Members of a base group, in list order. The base itself is included.
    pub fn group(&self, base_id: IngredientId) -> &[&'a Ingredient] {
        self.by_base.get(&base_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Base ingredient of `ingredient`: itself when it has none
    pub fn base_of(&self, ingredient: &'a Ingredient) -> Option<&'a Ingredient> {
        match ingredient.base_ingredient_id {
            None => Some(ingredient),
            Some(base) => self.get(base),
        }
    }

    /// First in-stock branded ingredient of a base group
    pub fn find_brand(&self, base_id: IngredientId) -> Option<&'a Ingredient> {
        self.group(base_id)
            .iter()
            .copied()
            .find(|i| !i.is_base() && i.in_stock)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
