//! Per-ingredient availability cache
//!
//! For every ingredient the cache holds how many cocktails that reference it
//! are currently makeable, and the name of that cocktail when there is
//! exactly one. A cocktail references an ingredient when one of its lines
//! names it literally; a base ingredient is also referenced by every line
//! naming one of its brands.
//!
//! A stock toggle only recomputes the entries it can influence. Besides the
//! cocktails that reference the toggled ingredient directly, a cocktail can
//! change state because the toggled ingredient is a base, sibling brand or
//! listed substitute for one of its requirements. The cache keeps a reach map
//! for that second kind, so after [`AvailabilityCache::apply_stock_change`]
//! every entry equals what [`AvailabilityCache::initialize`] would produce for
//! the same snapshot.

use super::index::IngredientIndex;
use super::predicate::is_available;
use super::resolve::reference_of;
use super::Policy;
use crate::catalog::{Catalog, Cocktail, CocktailId, Ingredient, IngredientId, UsageMap};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Cached availability of one ingredient
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    /// Makeable cocktails referencing the ingredient
    pub count: usize,

    /// Name of the makeable cocktail; set only when `count == 1`
    pub single_name: Option<String>,
}

/// Entries keyed by ingredient id, in ingredient-list order
pub type EntryMap = IndexMap<IngredientId, AvailabilityEntry>;

/// Owned availability cache; one instance per consumer
#[derive(Debug, Default)]
pub struct AvailabilityCache {
    ingredients: Vec<Ingredient>,
    cocktails: IndexMap<CocktailId, Cocktail>,
    usage: UsageMap,
    /// Ingredient id -> cocktails counted for its entry
    counted: HashMap<IngredientId, IndexSet<CocktailId>>,
    /// Ingredient id -> cocktails whose resolution can depend on it
    reach: HashMap<IngredientId, IndexSet<CocktailId>>,
    policy: Policy,
    entries: EntryMap,
    initialized: bool,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cache straight from a catalog
    pub fn from_catalog(catalog: &Catalog, policy: Policy) -> Self {
        let mut cache = Self::new();
        cache.initialize(
            catalog.ingredients.clone(),
            catalog.cocktails.clone(),
            catalog.usage_map(),
            policy,
        );
        cache
    }

    /// Replace every snapshot and recompute all entries
    pub fn initialize(
        &mut self,
        ingredients: Vec<Ingredient>,
        cocktails: Vec<Cocktail>,
        usage: UsageMap,
        policy: Policy,
    ) -> &EntryMap {
        self.ingredients = ingredients;
        self.cocktails = IndexMap::with_capacity(cocktails.len());
        for cocktail in cocktails {
            self.cocktails.entry(cocktail.id).or_insert(cocktail);
        }
        self.usage = usage;
        self.policy = policy;
        self.initialized = true;

        let index = IngredientIndex::new(&self.ingredients);
        self.counted = build_counted(&self.usage, &index);
        self.reach = build_reach(&self.cocktails, &index);

        let mut evaluated = HashMap::new();
        self.entries = self
            .ingredients
            .iter()
            .map(|ingredient| {
                let entry = compute_entry(
                    ingredient.id,
                    &self.counted,
                    &self.cocktails,
                    &index,
                    &self.policy,
                    &mut evaluated,
                );
                (ingredient.id, entry)
            })
            .collect();

        debug!(
            "Availability cache rebuilt: {} ingredients, {} cocktails, {} evaluated",
            self.entries.len(),
            self.cocktails.len(),
            evaluated.len()
        );
        &self.entries
    }

    /// Swap in a new ingredient snapshot after `changed` flipped its stock
    /// flag, recomputing only the affected entries
    pub fn apply_stock_change(
        &mut self,
        changed: IngredientId,
        ingredients: Vec<Ingredient>,
    ) -> &EntryMap {
        self.ingredients = ingredients;

        if !self.initialized {
            debug!("Stock change for {} before initialization, nothing cached", changed);
            return &self.entries;
        }

        let index = IngredientIndex::new(&self.ingredients);
        let affected = self.affected_with(changed, &index);
        let mut evaluated = HashMap::new();

        for id in &affected {
            if index.get(*id).is_none() {
                continue;
            }
            let entry = compute_entry(
                *id,
                &self.counted,
                &self.cocktails,
                &index,
                &self.policy,
                &mut evaluated,
            );
            self.entries.insert(*id, entry);
        }

        debug!(
            "Stock change for {}: {} affected entries, {} cocktails evaluated",
            changed,
            affected.len(),
            evaluated.len()
        );
        &self.entries
    }

    /// Rebuild every entry under a different policy
    pub fn apply_policy_change(&mut self, policy: Policy) -> &EntryMap {
        let ingredients = std::mem::take(&mut self.ingredients);
        let cocktails = std::mem::take(&mut self.cocktails).into_values().collect();
        let usage = std::mem::take(&mut self.usage);
        self.initialize(ingredients, cocktails, usage, policy)
    }

    /// Ingredient ids whose entries a stock change of `changed` can alter
    ///
    /// `changed` itself, plus every ingredient referenced by a cocktail that
    /// either names `changed` directly or can resolve one of its lines to it.
    pub fn affected_set(&self, changed: IngredientId) -> IndexSet<IngredientId> {
        let index = IngredientIndex::new(&self.ingredients);
        self.affected_with(changed, &index)
    }

    fn affected_with(
        &self,
        changed: IngredientId,
        index: &IngredientIndex<'_>,
    ) -> IndexSet<IngredientId> {
        let mut cocktails: IndexSet<CocktailId> =
            self.usage.cocktails_for(changed).iter().copied().collect();

        let group = index.get(changed).map(Ingredient::base_id);
        for key in std::iter::once(changed).chain(group) {
            if let Some(reaching) = self.reach.get(&key) {
                cocktails.extend(reaching.iter().copied());
            }
        }

        let mut affected = IndexSet::new();
        affected.insert(changed);
        for id in &cocktails {
            let Some(cocktail) = self.cocktails.get(id) else {
                continue;
            };
            for referenced in cocktail.referenced_ids() {
                affected.insert(referenced);
                if let Some(base) = index.get(referenced).and_then(|i| i.base_ingredient_id) {
                    affected.insert(base);
                }
            }
        }
        affected
    }

    /// Current entries; never recomputes
    pub fn read(&self) -> &EntryMap {
        &self.entries
    }

    pub fn entry(&self, id: IngredientId) -> Option<&AvailabilityEntry> {
        self.entries.get(&id)
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// Cocktails counted per ingredient: the usage map, with each brand's
/// cocktails also credited to its base
fn build_counted(
    usage: &UsageMap,
    index: &IngredientIndex<'_>,
) -> HashMap<IngredientId, IndexSet<CocktailId>> {
    let mut counted: HashMap<IngredientId, IndexSet<CocktailId>> = HashMap::new();
    for (id, cocktails) in usage.iter() {
        counted.entry(id).or_default().extend(cocktails.iter().copied());
        if let Some(base) = index.get(id).and_then(|i| i.base_ingredient_id) {
            counted.entry(base).or_default().extend(cocktails.iter().copied());
        }
    }
    counted
}

/// Map every ingredient a requirement can resolve through to the cocktail
/// holding that requirement: its reference, the reference's base group, and
/// its listed substitutes
fn build_reach(
    cocktails: &IndexMap<CocktailId, Cocktail>,
    index: &IngredientIndex<'_>,
) -> HashMap<IngredientId, IndexSet<CocktailId>> {
    let mut reach: HashMap<IngredientId, IndexSet<CocktailId>> = HashMap::new();
    for cocktail in cocktails.values() {
        for requirement in &cocktail.ingredients {
            if let Some(reference) = reference_of(requirement, index) {
                reach.entry(reference.id).or_default().insert(cocktail.id);
                reach.entry(reference.base_id()).or_default().insert(cocktail.id);
            }
            for substitute in &requirement.substitutes {
                reach.entry(*substitute).or_default().insert(cocktail.id);
            }
        }
    }
    reach
}

fn compute_entry(
    id: IngredientId,
    counted: &HashMap<IngredientId, IndexSet<CocktailId>>,
    cocktails: &IndexMap<CocktailId, Cocktail>,
    index: &IngredientIndex<'_>,
    policy: &Policy,
    evaluated: &mut HashMap<CocktailId, bool>,
) -> AvailabilityEntry {
    let mut count = 0;
    let mut single_name = None;

    for cocktail_id in counted.get(&id).into_iter().flatten() {
        let Some(cocktail) = cocktails.get(cocktail_id) else {
            continue;
        };
        let available = *evaluated
            .entry(cocktail.id)
            .or_insert_with(|| is_available(cocktail, index, policy));
        if available {
            count += 1;
            if count == 1 {
                single_name = Some(cocktail.name.clone());
            }
        }
    }

    if count != 1 {
        single_name = None;
    }
    AvailabilityEntry { count, single_name }
}
