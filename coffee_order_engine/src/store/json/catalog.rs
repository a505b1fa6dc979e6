use std::path::{Path, PathBuf};

use log::*;

use crate::{
    db_types::{CatalogItem, UNKNOWN_ITEM_NAME},
    store::{json::CatalogError, traits::OrderCatalog},
};

/// A catalog backed by a JSON file containing an array of `{"id": .., "name": ..}` objects.
///
/// The file is re-read on every call. There is no caching, so edits to the file are picked up immediately.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderCatalog for JsonFileCatalog {
    type Error = CatalogError;

    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, Self::Error> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io { path: self.path.clone(), source })?;
        let items = serde_json::from_slice::<Vec<CatalogItem>>(&data)
            .map_err(|source| CatalogError::Malformed { path: self.path.clone(), source })?;
        trace!("📋️ Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    async fn lookup_name(&self, id: i64) -> String {
        match self.fetch_catalog().await {
            Ok(items) => items.into_iter().find(|item| item.id == id).map(|item| item.name).unwrap_or_else(|| {
                debug!("📋️ Item #{id} is not in the catalog. Using '{UNKNOWN_ITEM_NAME}'");
                UNKNOWN_ITEM_NAME.to_string()
            }),
            Err(e) => {
                warn!("📋️ Catalog is unavailable, so item #{id} will be reported as '{UNKNOWN_ITEM_NAME}'. {e}");
                UNKNOWN_ITEM_NAME.to_string()
            },
        }
    }
}
