//! Explain command - show how each recipe line resolves

use super::effective_policy;
use crate::catalog::Requirement;
use crate::cli::args::ExplainArgs;
use crate::config::Config;
use crate::engine::{explain, is_available, IngredientIndex, Resolution, Substitution};
use crate::error::BarbackResult;
use crate::store::CatalogStore;
use crate::ui::{self, UiContext};

/// Execute the explain command
pub async fn execute(args: ExplainArgs, config: &Config, store: &CatalogStore) -> BarbackResult<()> {
    let catalog = store.load().await?;
    let cocktail = catalog.find_cocktail(&args.cocktail)?;
    let policy = effective_policy(config, &args.policy);
    let index = IngredientIndex::new(&catalog.ingredients);

    let ctx = UiContext::detect();
    ui::intro(&ctx, &cocktail.name);

    for (requirement, resolution) in explain(cocktail, &index, &policy) {
        let label = line_label(requirement, &resolution);
        if requirement.is_excluded(policy.ignore_garnish) {
            ui::remark(&ctx, &format!("{} (not counted)", label));
            continue;
        }
        match (resolution.used, resolution.via) {
            (Some(_), Some(Substitution::Exact)) => ui::step_ok(&ctx, &label),
            (Some(used), Some(via)) => {
                ui::step_ok_detail(&ctx, &label, &format!("{} via {}", used.name, via))
            }
            _ => ui::step_error_detail(&ctx, &label, "missing"),
        }
    }

    if is_available(cocktail, &index, &policy) {
        ui::outro_success(&ctx, "Makeable");
    } else {
        ui::outro_warn(&ctx, "Not makeable");
    }

    Ok(())
}

/// What a line asks for: resolved reference name, else literal name or id
fn line_label(requirement: &Requirement, resolution: &Resolution<'_>) -> String {
    let mut label = match (resolution.reference, &requirement.name, requirement.ingredient_id) {
        (Some(reference), _, _) => reference.name.clone(),
        (None, Some(name), _) => format!("{} (unknown)", name),
        (None, None, Some(id)) => format!("#{} (unknown)", id),
        (None, None, None) => "(empty line)".to_string(),
    };
    if requirement.garnish {
        label.push_str(" [garnish]");
    }
    if requirement.optional {
        label.push_str(" [optional]");
    }
    label
}
