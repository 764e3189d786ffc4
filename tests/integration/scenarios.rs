//! End-to-end engine scenarios over the public API

use barback::catalog::{Catalog, Cocktail, Ingredient, Requirement};
use barback::engine::{
    is_available, resolve, AvailabilityCache, IngredientIndex, Policy, SnapshotMemo, Substitution,
};
use barback::store::{CatalogStore, ImportGate};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn vodka_and_smirnoff() -> Vec<Ingredient> {
    vec![
        Ingredient::new(1, "Vodka").stocked(true),
        Ingredient::new(2, "Smirnoff").branded(1),
    ]
}

fn screwdriver(allow_base: bool) -> Cocktail {
    let mut line = Requirement::of(2);
    line.allow_base_substitution = allow_base;
    Cocktail::new(10, "Screwdriver", vec![line])
}

#[test]
fn base_substitution_counts_for_brand_and_base() {
    let catalog = Catalog::new(vodka_and_smirnoff(), vec![screwdriver(true)]);
    let index = IngredientIndex::new(&catalog.ingredients);
    assert!(is_available(&catalog.cocktails[0], &index, &Policy::default()));

    let cache = AvailabilityCache::from_catalog(&catalog, Policy::default());
    for id in [1, 2] {
        let entry = cache.entry(id).unwrap();
        assert_eq!(entry.count, 1);
        assert_eq!(entry.single_name.as_deref(), Some("Screwdriver"));
    }
}

#[test]
fn no_substitution_leaves_both_empty() {
    let catalog = Catalog::new(vodka_and_smirnoff(), vec![screwdriver(false)]);
    let index = IngredientIndex::new(&catalog.ingredients);
    assert!(!is_available(&catalog.cocktails[0], &index, &Policy::default()));

    let cache = AvailabilityCache::from_catalog(&catalog, Policy::default());
    for id in [1, 2] {
        let entry = cache.entry(id).unwrap();
        assert_eq!(entry.count, 0);
        assert!(entry.single_name.is_none());
    }
}

#[test]
fn global_policy_enables_substitution() {
    let catalog = Catalog::new(vodka_and_smirnoff(), vec![screwdriver(false)]);
    let mut cache = AvailabilityCache::from_catalog(&catalog, Policy::default());
    assert_eq!(cache.entry(2).unwrap().count, 0);

    cache.apply_policy_change(Policy::new(true, false));
    assert_eq!(cache.entry(2).unwrap().count, 1);
}

#[test]
fn exact_match_wins_over_substitutes() {
    let ingredients = vec![
        Ingredient::new(1, "Gin").stocked(true),
        Ingredient::new(2, "Tanqueray").branded(1).stocked(true),
        Ingredient::new(3, "Vodka").stocked(true),
    ];
    let mut line = Requirement::of(2);
    line.allow_base_substitution = true;
    line.substitutes = vec![3];

    let index = IngredientIndex::new(&ingredients);
    let resolution = resolve(&line, &index, &Policy::new(true, false));
    assert_eq!(resolution.used.map(|i| i.id), Some(2));
    assert_eq!(resolution.via, Some(Substitution::Exact));
}

#[test]
fn base_requirement_takes_first_stocked_brand() {
    let ingredients = vec![
        Ingredient::new(1, "Rum"),
        Ingredient::new(2, "Havana Club").branded(1),
        Ingredient::new(3, "Plantation").branded(1).stocked(true),
        Ingredient::new(4, "Diplomatico").branded(1).stocked(true),
    ];
    let index = IngredientIndex::new(&ingredients);
    let resolution = resolve(&Requirement::of(1), &index, &Policy::default());
    assert_eq!(resolution.used.map(|i| i.id), Some(3));
    assert_eq!(resolution.via, Some(Substitution::Brand));
}

#[test]
fn garnish_only_recipe_never_makeable() {
    let ingredients = vec![Ingredient::new(1, "Mint").stocked(true)];
    let mut line = Requirement::of(1);
    line.garnish = true;
    let cocktail = Cocktail::new(5, "Mint Sprig", vec![line]);

    let index = IngredientIndex::new(&ingredients);
    assert!(is_available(&cocktail, &index, &Policy::default()));
    assert!(!is_available(&cocktail, &index, &Policy::new(false, true)));
}

#[test]
fn ambiguous_name_is_unsatisfied() {
    let ingredients = vec![
        Ingredient::new(1, "Bitters").stocked(true),
        Ingredient::new(2, "bitters").stocked(true),
    ];
    let index = IngredientIndex::new(&ingredients);
    let resolution = resolve(&Requirement::named("Bitters"), &index, &Policy::default());
    assert!(resolution.reference.is_none());
    assert!(!resolution.is_satisfied());
}

#[test]
fn memo_reuses_view_until_stock_changes() {
    let mut ingredients = vodka_and_smirnoff();
    let cocktails = vec![screwdriver(true)];
    let mut memo = SnapshotMemo::new();

    let first = memo.view(&ingredients, &cocktails, Policy::default());
    ingredients[0].in_shopping_list = true;
    let second = memo.view(&ingredients, &cocktails, Policy::default());
    assert!(Arc::ptr_eq(&first, &second));

    ingredients[0].in_stock = false;
    let third = memo.view(&ingredients, &cocktails, Policy::default());
    assert!(!Arc::ptr_eq(&second, &third));
    assert!(third.makeable.is_empty());
}

#[tokio::test]
async fn import_waits_for_reader() {
    let dir = TempDir::new().unwrap();
    let gate = Arc::new(ImportGate::new());
    let store = Arc::new(CatalogStore::with_gate(
        dir.path().join("catalog.json"),
        Arc::clone(&gate),
    ));

    let reader = gate.read().await;
    let importer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store
                .import(Catalog::new(vodka_and_smirnoff(), vec![screwdriver(true)]))
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!store.exists());
    assert!(!gate.is_importing());

    drop(reader);
    importer.await.unwrap().unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.ingredients.len(), 2);
    assert_eq!(gate.active_readers(), 0);
}
