//! Available command - list makeable cocktails

use super::effective_policy;
use crate::catalog::Cocktail;
use crate::cli::args::{AvailableArgs, OutputFormat};
use crate::config::Config;
use crate::engine::SnapshotMemo;
use crate::error::BarbackResult;
use crate::store::CatalogStore;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the available command
pub async fn execute(args: AvailableArgs, config: &Config, store: &CatalogStore) -> BarbackResult<()> {
    let catalog = store.load().await?;
    let policy = effective_policy(config, &args.policy);

    let mut memo = SnapshotMemo::new();
    let view = memo.view(&catalog.ingredients, &catalog.cocktails, policy);

    let makeable: Vec<&Cocktail> = catalog
        .cocktails
        .iter()
        .filter(|c| view.is_makeable(c.id))
        .collect();

    if makeable.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "Nothing makeable with the current stock");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&makeable, catalog.cocktails.len()),
        OutputFormat::Json => print_json(&makeable)?,
        OutputFormat::Plain => print_plain(&makeable),
    }

    Ok(())
}

fn print_table(cocktails: &[&Cocktail], total: usize) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Makeable cocktails");

    println!(
        "{:<8} {:<30} {:<6}",
        style("ID").bold(),
        style("NAME").bold(),
        style("LINES").bold()
    );
    println!("{}", "-".repeat(46));

    for cocktail in cocktails {
        println!(
            "{:<8} {:<30} {:<6}",
            cocktail.id,
            cocktail.name,
            cocktail.ingredients.len()
        );
    }

    println!();
    println!("{} of {} cocktail(s) makeable", cocktails.len(), total);
}

fn print_json(cocktails: &[&Cocktail]) -> BarbackResult<()> {
    let json = serde_json::to_string_pretty(cocktails)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(cocktails: &[&Cocktail]) {
    for cocktail in cocktails {
        println!("{}", cocktail.name);
    }
}
