use crate::db_types::CatalogItem;

/// The `OrderCatalog` trait defines read-only access to the list of items customers can order.
#[allow(async_fn_in_trait)]
pub trait OrderCatalog {
    type Error: std::error::Error;

    /// Fetch the full catalog.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, Self::Error>;

    /// Resolve the display name for the given item id.
    ///
    /// This call never fails. If the id is not in the catalog, or the catalog cannot be read, implementations must
    /// return [`crate::db_types::UNKNOWN_ITEM_NAME`] so that downstream notifications can still go out.
    async fn lookup_name(&self, id: i64) -> String;
}
