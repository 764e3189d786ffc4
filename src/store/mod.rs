//! Catalog storage
//!
//! Keeps the catalog as a JSON file. Every read goes through the
//! [`ImportGate`] so a bulk import is never observed half-written.

pub mod gate;

pub use gate::{ImportGate, ImportGuard, ReadGuard};

use crate::catalog::{Catalog, IngredientId};
use crate::error::{BarbackError, BarbackResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

/// JSON-file catalog store
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
    gate: Arc<ImportGate>,
}

impl CatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            gate: Arc::new(ImportGate::new()),
        }
    }

    /// Share an existing gate between stores pointing at the same file
    pub fn with_gate(path: PathBuf, gate: Arc<ImportGate>) -> Self {
        Self { path, gate }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gate(&self) -> &Arc<ImportGate> {
        &self.gate
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the catalog
    pub async fn load(&self) -> BarbackResult<Catalog> {
        let _reader = self.gate.read().await;
        self.read_file().await
    }

    /// Load the catalog, or an empty one when the file does not exist yet
    pub async fn load_or_default(&self) -> BarbackResult<Catalog> {
        if !self.exists() {
            debug!("No catalog at {}, starting empty", self.path.display());
            return Ok(Catalog::default());
        }
        self.load().await
    }

    /// Persist one ingredient's stock flag. Returns the updated catalog and
    /// whether the flag actually changed.
    ///
    /// Stock toggles are single user actions and do not take the import
    /// barrier; callers serialize them.
    pub async fn set_stock(
        &self,
        id: IngredientId,
        in_stock: bool,
    ) -> BarbackResult<(Catalog, bool)> {
        let mut catalog = self.load().await?;
        let changed = catalog.set_stock(id, in_stock)?;
        if changed {
            self.save(&catalog).await?;
            info!("Set ingredient {} in_stock = {}", id, in_stock);
        }
        Ok((catalog, changed))
    }

    /// Replace the whole catalog
    pub async fn import(&self, catalog: Catalog) -> BarbackResult<Catalog> {
        let catalog = catalog.normalized();
        let _guard = self.gate.import().await;
        self.save(&catalog).await?;
        info!(
            "Imported {} ingredients and {} cocktails into {}",
            catalog.ingredients.len(),
            catalog.cocktails.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    /// Read and parse another catalog file, e.g. an import source
    pub async fn read_external(path: &Path) -> BarbackResult<Catalog> {
        read_catalog(path).await
    }

    async fn read_file(&self) -> BarbackResult<Catalog> {
        read_catalog(&self.path).await
    }

    /// Write the catalog atomically, replacing the file. Takes no barrier;
    /// bulk replacement goes through [`CatalogStore::import`].
    pub async fn save(&self, catalog: &Catalog) -> BarbackResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                BarbackError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        let content = catalog.to_json_string()?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| BarbackError::io(format!("writing catalog to {}", tmp.display()), e))?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            BarbackError::io(format!("replacing catalog {}", self.path.display()), e)
        })?;
        Ok(())
    }
}

async fn read_catalog(path: &Path) -> BarbackResult<Catalog> {
    if !path.exists() {
        return Err(BarbackError::CatalogNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| BarbackError::io(format!("reading catalog from {}", path.display()), e))?;

    Catalog::from_json_str(&content).map_err(|e| BarbackError::CatalogInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
