//! Ingredients command - per-ingredient availability counts

use super::effective_policy;
use crate::catalog::IngredientId;
use crate::cli::args::{IngredientsArgs, OutputFormat};
use crate::config::Config;
use crate::engine::{AvailabilityCache, AvailabilityEntry};
use crate::error::BarbackResult;
use crate::store::CatalogStore;
use crate::ui::{self, UiContext};
use console::style;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Row<'a> {
    id: IngredientId,
    name: &'a str,
    in_stock: bool,
    #[serde(flatten)]
    availability: AvailabilityEntry,
}

/// Execute the ingredients command
pub async fn execute(
    args: IngredientsArgs,
    config: &Config,
    store: &CatalogStore,
) -> BarbackResult<()> {
    let catalog = store.load().await?;
    let policy = effective_policy(config, &args.policy);
    let cache = AvailabilityCache::from_catalog(&catalog, policy);

    let rows: Vec<Row<'_>> = catalog
        .ingredients
        .iter()
        .filter(|i| !args.in_stock || i.in_stock)
        .map(|i| Row {
            id: i.id,
            name: &i.name,
            in_stock: i.in_stock,
            availability: cache.entry(i.id).cloned().unwrap_or_default(),
        })
        .collect();

    if rows.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "No ingredients yet");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => {
            for row in &rows {
                println!("{}\t{}", row.name, row.availability.count);
            }
        }
    }

    Ok(())
}

fn print_table(rows: &[Row<'_>]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Ingredients");

    println!(
        "{:<8} {:<28} {:<8} {:<6} {:<28}",
        style("ID").bold(),
        style("NAME").bold(),
        style("STOCK").bold(),
        style("MAKES").bold(),
        style("ONLY").bold()
    );
    println!("{}", "-".repeat(82));

    for row in rows {
        let stock = if row.in_stock {
            style("yes").green()
        } else {
            style("no").dim()
        };
        println!(
            "{:<8} {:<28} {:<8} {:<6} {:<28}",
            row.id,
            row.name,
            stock,
            row.availability.count,
            row.availability.single_name.as_deref().unwrap_or("")
        );
    }

    println!();
    println!("{} ingredient(s)", rows.len());
}
