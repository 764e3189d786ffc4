//! Property tests for the availability engine

use barback::catalog::{Cocktail, Ingredient, Requirement, UsageMap};
use barback::engine::{fingerprint, AvailabilityCache, Policy, SnapshotKey};
use proptest::prelude::*;
use proptest::sample::Index;

/// (branded, base pick, in stock)
type RawIngredient = (bool, usize, bool);

/// (reference pick, by name, optional, garnish, allow base, allow brands, substitutes)
type RawRequirement = (u8, bool, bool, bool, bool, bool, Vec<u8>);

fn build_ingredients(raw: Vec<RawIngredient>) -> Vec<Ingredient> {
    let mut bases = Vec::new();
    let mut ingredients = Vec::with_capacity(raw.len());

    for (position, (branded, base_pick, in_stock)) in raw.into_iter().enumerate() {
        let id = position as i64 + 1;
        let mut ingredient = Ingredient::new(id, format!("Ingredient {}", id)).stocked(in_stock);
        if branded && !bases.is_empty() {
            ingredient = ingredient.branded(bases[base_pick % bases.len()]);
        } else {
            bases.push(id);
        }
        ingredients.push(ingredient);
    }
    ingredients
}

fn build_requirement(raw: RawRequirement) -> Requirement {
    let (pick, by_name, optional, garnish, allow_base, allow_brands, substitutes) = raw;
    // Picks past the catalog size produce dangling references.
    let id = i64::from(pick) + 1;
    let mut requirement = if by_name {
        Requirement::named(format!("ingredient  {}", id))
    } else {
        Requirement::of(id)
    };
    requirement.optional = optional;
    requirement.garnish = garnish;
    requirement.allow_base_substitution = allow_base;
    requirement.allow_branded_substitutes = allow_brands;
    requirement.substitutes = substitutes.into_iter().map(|s| i64::from(s) + 1).collect();
    requirement
}

fn raw_requirement() -> impl Strategy<Value = RawRequirement> {
    (
        0u8..14,
        prop::bool::weighted(0.15),
        prop::bool::weighted(0.2),
        prop::bool::weighted(0.2),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(0u8..14, 0..3),
    )
}

fn catalog() -> impl Strategy<Value = (Vec<Ingredient>, Vec<Cocktail>)> {
    let ingredients =
        prop::collection::vec((prop::bool::weighted(0.4), any::<usize>(), any::<bool>()), 1..12);
    let cocktails = prop::collection::vec(prop::collection::vec(raw_requirement(), 0..5), 0..10);

    (ingredients, cocktails).prop_map(|(raw_ingredients, raw_cocktails)| {
        let ingredients = build_ingredients(raw_ingredients);
        let cocktails = raw_cocktails
            .into_iter()
            .enumerate()
            .map(|(position, lines)| {
                let id = position as i64 + 100;
                let requirements = lines.into_iter().map(build_requirement).collect();
                Cocktail::new(id, format!("Cocktail {}", id), requirements)
            })
            .collect();
        (ingredients, cocktails)
    })
}

fn flip(ingredients: &[Ingredient], id: i64) -> Vec<Ingredient> {
    ingredients
        .iter()
        .cloned()
        .map(|mut i| {
            if i.id == id {
                i.in_stock = !i.in_stock;
            }
            i
        })
        .collect()
}

fn full(ingredients: Vec<Ingredient>, cocktails: &[Cocktail], policy: Policy) -> AvailabilityCache {
    let mut cache = AvailabilityCache::new();
    cache.initialize(
        ingredients,
        cocktails.to_vec(),
        UsageMap::build(cocktails),
        policy,
    );
    cache
}

proptest! {
    #[test]
    fn incremental_update_matches_rebuild(
        (ingredients, cocktails) in catalog(),
        allow_substitutes in any::<bool>(),
        ignore_garnish in any::<bool>(),
        pick in any::<Index>(),
    ) {
        let policy = Policy::new(allow_substitutes, ignore_garnish);
        let mut cache = full(ingredients.clone(), &cocktails, policy);

        let changed = ingredients[pick.index(ingredients.len())].id;
        let flipped = flip(&ingredients, changed);
        let incremental = cache.apply_stock_change(changed, flipped.clone()).clone();

        let rebuilt = full(flipped, &cocktails, policy);
        prop_assert_eq!(&incremental, rebuilt.read());
    }

    #[test]
    fn repeated_toggles_stay_consistent(
        (ingredients, cocktails) in catalog(),
        allow_substitutes in any::<bool>(),
        picks in prop::collection::vec(any::<Index>(), 1..6),
    ) {
        let policy = Policy::new(allow_substitutes, false);
        let mut cache = full(ingredients.clone(), &cocktails, policy);
        let mut current = ingredients;

        for pick in picks {
            let changed = current[pick.index(current.len())].id;
            current = flip(&current, changed);
            cache.apply_stock_change(changed, current.clone());
        }

        let rebuilt = full(current, &cocktails, policy);
        prop_assert_eq!(cache.read(), rebuilt.read());
    }

    #[test]
    fn single_name_only_for_exactly_one(
        (ingredients, cocktails) in catalog(),
        allow_substitutes in any::<bool>(),
    ) {
        let cache = full(ingredients.clone(), &cocktails, Policy::new(allow_substitutes, false));
        prop_assert_eq!(cache.read().len(), ingredients.len());
        for entry in cache.read().values() {
            prop_assert_eq!(entry.single_name.is_some(), entry.count == 1);
        }
    }

    #[test]
    fn fingerprint_ignores_order_and_extra_fields(
        (ingredients, cocktails) in catalog(),
        pick in any::<Index>(),
    ) {
        let mut shuffled: Vec<Ingredient> = ingredients.iter().rev().cloned().collect();
        for ingredient in &mut shuffled {
            ingredient.in_shopping_list = !ingredient.in_shopping_list;
            ingredient.description = Some("tasting notes".to_string());
        }
        prop_assert_eq!(fingerprint(&ingredients), fingerprint(&shuffled));
        prop_assert_eq!(
            SnapshotKey::of(&ingredients, &cocktails, Policy::default()),
            SnapshotKey::of(&shuffled, &cocktails, Policy::default())
        );

        let changed = ingredients[pick.index(ingredients.len())].id;
        prop_assert_ne!(fingerprint(&ingredients), fingerprint(&flip(&ingredients, changed)));
    }
}
