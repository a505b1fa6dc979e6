//! JSON file backends for the catalog and the order ledger.
mod catalog;
mod errors;
mod ledger;

pub use catalog::JsonFileCatalog;
pub use errors::{CatalogError, LedgerError};
pub use ledger::JsonFileLedger;
