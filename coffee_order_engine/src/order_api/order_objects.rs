use crate::{db_types::Order, notifier::NotificationOutcome};

/// Everything that happened while processing one order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmissionResult {
    pub order: Order,
    /// The display name the order's item resolved to.
    pub item_name: String,
    /// Set when the order could not be written to the ledger.
    pub ledger_error: Option<String>,
    pub operator_notice: NotificationOutcome,
    pub customer_confirmation: NotificationOutcome,
}

impl OrderSubmissionResult {
    pub fn saved(&self) -> bool {
        self.ledger_error.is_none()
    }
}
