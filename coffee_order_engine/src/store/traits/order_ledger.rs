use crate::db_types::Order;

/// The `OrderLedger` trait defines the append-only record of submitted orders.
///
/// Implementations must guarantee that concurrent calls to [`OrderLedger::append`] do not lose updates: every order
/// whose append returned `Ok` is present in a subsequent [`OrderLedger::load`], in the order the appends completed.
#[allow(async_fn_in_trait)]
pub trait OrderLedger {
    type Error: std::error::Error;

    /// Add a new order to the end of the ledger.
    async fn append(&self, order: Order) -> Result<(), Self::Error>;

    /// Fetch every order in the ledger, oldest first.
    async fn load(&self) -> Result<Vec<Order>, Self::Error>;
}
