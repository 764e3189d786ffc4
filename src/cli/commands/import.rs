//! Import command - bulk-replace the catalog

use crate::cli::args::ImportArgs;
use crate::config::Config;
use crate::error::BarbackResult;
use crate::store::CatalogStore;
use crate::ui::{self, UiContext};

/// Execute the import command
pub async fn execute(args: ImportArgs, _config: &Config, store: &CatalogStore) -> BarbackResult<()> {
    let ctx = UiContext::detect();

    let incoming = CatalogStore::read_external(&args.file).await?;
    if incoming.ingredients.is_empty() {
        ui::step_warn_hint(
            &ctx,
            "Imported catalog has no ingredients",
            "Check that the file has an `ingredients` list",
        );
    }

    let imported = store.import(incoming).await?;
    ui::step_ok_detail(
        &ctx,
        &format!(
            "Imported {} ingredients and {} cocktails",
            imported.ingredients.len(),
            imported.cocktails.len()
        ),
        &store.path().display().to_string(),
    );

    Ok(())
}
