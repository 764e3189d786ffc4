//! Stock command - toggle an ingredient and report what changed

use crate::catalog::{Catalog, IngredientId};
use crate::cli::args::StockArgs;
use crate::config::Config;
use crate::engine::{AvailabilityCache, AvailabilityEntry, AvailabilityView, SnapshotMemo};
use crate::error::BarbackResult;
use crate::store::CatalogStore;
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the stock command
pub async fn execute(args: StockArgs, config: &Config, store: &CatalogStore) -> BarbackResult<()> {
    let ctx = UiContext::detect();
    let policy = config.policy;
    let in_stock = !args.off;

    let before = store.load().await?;
    let ingredient = before.find_ingredient(&args.ingredient)?;
    let (id, name) = (ingredient.id, ingredient.name.clone());

    let mut memo = SnapshotMemo::new();
    let view_before = memo.view(&before.ingredients, &before.cocktails, policy);
    let mut cache = AvailabilityCache::from_catalog(&before, policy);
    let entries_before = cache.read().clone();

    let (after, changed) = store.set_stock(id, in_stock).await?;
    if !changed {
        let state = if in_stock { "in stock" } else { "out of stock" };
        ui::step_info(&ctx, &format!("{} is already {}", name, state));
        return Ok(());
    }

    let affected = cache.affected_set(id);
    let entries_after = cache.apply_stock_change(id, after.ingredients.clone());
    debug!("Recomputed {} availability entries", affected.len());

    if in_stock {
        ui::step_ok(&ctx, &format!("{} is now in stock", name));
    } else {
        ui::step_warn(&ctx, &format!("{} is now out of stock", name));
    }

    for entry_id in &affected {
        let old = entries_before.get(entry_id).cloned().unwrap_or_default();
        let new = entries_after.get(entry_id).cloned().unwrap_or_default();
        if old != new {
            let label = ingredient_name(&after, *entry_id);
            ui::key_value(&ctx, &label, &format!("{} -> {}", describe(&old), describe(&new)));
        }
    }

    let view_after = memo.view(&after.ingredients, &after.cocktails, policy);
    report_view_changes(&ctx, &after, &view_before, &view_after);

    Ok(())
}

fn ingredient_name(catalog: &Catalog, id: IngredientId) -> String {
    catalog
        .ingredients
        .iter()
        .find(|i| i.id == id)
        .map(|i| i.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

fn describe(entry: &AvailabilityEntry) -> String {
    match (entry.count, entry.single_name.as_deref()) {
        (0, _) => "none".to_string(),
        (1, Some(name)) => name.to_string(),
        (n, _) => format!("{} cocktails", n),
    }
}

fn report_view_changes(
    ctx: &UiContext,
    catalog: &Catalog,
    before: &AvailabilityView,
    after: &AvailabilityView,
) {
    for cocktail in &catalog.cocktails {
        match (before.is_makeable(cocktail.id), after.is_makeable(cocktail.id)) {
            (false, true) => ui::step_ok_detail(ctx, &cocktail.name, "now makeable"),
            (true, false) => ui::step_warn_hint(ctx, &cocktail.name, "no longer makeable"),
            _ => {}
        }
    }
}
