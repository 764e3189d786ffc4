//! Fingerprint command - print the availability fingerprint

use crate::config::Config;
use crate::engine::fingerprint;
use crate::error::BarbackResult;
use crate::store::CatalogStore;

/// Execute the fingerprint command
pub async fn execute(_config: &Config, store: &CatalogStore) -> BarbackResult<()> {
    let catalog = store.load().await?;
    println!("{:08x}", fingerprint(&catalog.ingredients));
    Ok(())
}
