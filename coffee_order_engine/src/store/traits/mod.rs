mod order_catalog;
mod order_ledger;

pub use order_catalog::OrderCatalog;
pub use order_ledger::OrderLedger;
