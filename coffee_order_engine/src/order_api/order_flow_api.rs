use std::fmt::Debug;

use coffee_common::non_blank;
use log::*;

use crate::{
    db_types::Order,
    notifier::{Mailer, NotificationOutcome, Notice, Notifier},
    order_api::{errors::OrderFlowError, order_objects::OrderSubmissionResult},
    store::traits::{OrderCatalog, OrderLedger},
};

/// `OrderFlowApi` runs the order submission workflow: record the order, tell the shop about it, and confirm it with
/// the customer.
///
/// Only an undecodable payload stops the flow. Ledger and email failures are logged, recorded in the
/// [`OrderSubmissionResult`] and the remaining steps still run.
pub struct OrderFlowApi<C, L, M> {
    catalog: C,
    ledger: L,
    notifier: Notifier<M>,
    operator_address: String,
}

impl<C, L, M> Debug for OrderFlowApi<C, L, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<C, L, M> OrderFlowApi<C, L, M> {
    pub fn new<S: Into<String>>(catalog: C, ledger: L, notifier: Notifier<M>, operator_address: S) -> Self {
        Self { catalog, ledger, notifier, operator_address: operator_address.into() }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<C, L, M> OrderFlowApi<C, L, M>
where
    C: OrderCatalog,
    L: OrderLedger,
    M: Mailer,
{
    /// Decode a JSON order payload and submit it.
    ///
    /// If the payload cannot be decoded, nothing is recorded and nobody is notified.
    pub async fn submit_raw(&self, payload: &[u8]) -> Result<OrderSubmissionResult, OrderFlowError> {
        let order = Order::decode(payload).map_err(|e| {
            debug!("🔄️📦️ Rejecting undecodable order payload. {e}");
            OrderFlowError::InvalidOrder(e)
        })?;
        Ok(self.submit_order(order).await)
    }

    /// Submit a new order.
    ///
    /// Orders are not de-duplicated. Submitting the same order twice records it twice and sends every email twice.
    pub async fn submit_order(&self, order: Order) -> OrderSubmissionResult {
        trace!("🔄️📦️ Processing new order: {order}");
        let item_name = self.catalog.lookup_name(order.coffee_id).await;
        let ledger_error = match self.ledger.append(order.clone()).await {
            Ok(()) => None,
            Err(e) => {
                error!("🔄️📦️ Order from {} could not be saved to the ledger. Carrying on regardless. {e}", order.name);
                Some(e.to_string())
            },
        };
        let operator_notice = self.notify_operator(&order, &item_name).await;
        let customer_confirmation =
            self.notifier.notify(order.customer_email(), Notice::CustomerConfirmation, &order, &item_name).await;
        debug!(
            "🔄️📦️ Order from {} for {item_name} complete. Saved: {}. Operator notified: {}. Customer notified: {}",
            order.name,
            ledger_error.is_none(),
            operator_notice.succeeded(),
            customer_confirmation.succeeded()
        );
        OrderSubmissionResult { order, item_name, ledger_error, operator_notice, customer_confirmation }
    }

    async fn notify_operator(&self, order: &Order, item_name: &str) -> NotificationOutcome {
        match non_blank(Some(self.operator_address.as_str())) {
            Some(to) => self.notifier.notify(Some(to), Notice::OperatorNotice, order, item_name).await,
            None => {
                error!("🔄️📦️ No operator contact address is configured. The shop will not hear about this order.");
                NotificationOutcome::Failed("No operator contact address is configured".to_string())
            },
        }
    }
}
