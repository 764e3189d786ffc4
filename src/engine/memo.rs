//! Single-slot memoization of derived views
//!
//! Consumers that render availability repeatedly hold a [`SnapshotMemo`] and
//! get back the same `Arc` for as long as the availability-relevant
//! snapshot is unchanged, even if unrelated ingredient fields were edited in
//! between.

use super::fingerprint::{cocktails_fingerprint, fingerprint};
use super::index::IngredientIndex;
use super::predicate::is_available;
use super::Policy;
use crate::catalog::{Cocktail, CocktailId, Ingredient, IngredientId};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One-slot cache: the last key and the value computed for it
#[derive(Debug)]
pub struct Memo<K, T> {
    slot: Option<(K, Arc<T>)>,
}

impl<K: PartialEq, T> Memo<K, T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached value for `key`, computing and storing it when the
    /// slot holds a different key
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some((cached_key, value)) = &self.slot {
            if *cached_key == key {
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute());
        self.slot = Some((key, Arc::clone(&value)));
        value
    }
}

impl<K: PartialEq, T> Default for Memo<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache key for views derived from a catalog snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SnapshotKey {
    pub ingredients: u32,
    pub cocktails: u32,
    pub policy: Policy,
}

impl SnapshotKey {
    pub fn of(ingredients: &[Ingredient], cocktails: &[Cocktail], policy: Policy) -> Self {
        Self {
            ingredients: fingerprint(ingredients),
            cocktails: cocktails_fingerprint(cocktails),
            policy,
        }
    }
}

/// Makeable cocktails, overall and grouped by referenced ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvailabilityView {
    /// Makeable cocktail ids in catalog order
    pub makeable: Vec<CocktailId>,

    /// Ingredient id -> makeable cocktails naming it, in catalog order
    pub by_ingredient: IndexMap<IngredientId, Vec<CocktailId>>,
}

impl AvailabilityView {
    pub fn compute(ingredients: &[Ingredient], cocktails: &[Cocktail], policy: Policy) -> Self {
        let index = IngredientIndex::new(ingredients);
        let mut view = Self::default();

        for cocktail in cocktails {
            if !is_available(cocktail, &index, &policy) {
                continue;
            }
            view.makeable.push(cocktail.id);
            for id in cocktail.referenced_ids() {
                view.by_ingredient.entry(id).or_default().push(cocktail.id);
            }
        }

        debug!(
            "Computed availability view: {} of {} cocktails makeable",
            view.makeable.len(),
            cocktails.len()
        );
        view
    }

    pub fn is_makeable(&self, id: CocktailId) -> bool {
        self.makeable.contains(&id)
    }
}

/// Memoized [`AvailabilityView`] keyed by [`SnapshotKey`]
#[derive(Debug, Default)]
pub struct SnapshotMemo {
    view: Memo<SnapshotKey, AvailabilityView>,
}

impl SnapshotMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(
        &mut self,
        ingredients: &[Ingredient],
        cocktails: &[Cocktail],
        policy: Policy,
    ) -> Arc<AvailabilityView> {
        let key = SnapshotKey::of(ingredients, cocktails, policy);
        self.view
            .get_or_compute(key, || AvailabilityView::compute(ingredients, cocktails, policy))
    }
}
