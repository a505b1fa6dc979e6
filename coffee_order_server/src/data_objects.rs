use coffee_order_engine::OrderSubmissionResult;
use serde::{Deserialize, Serialize};

/// The response to a successfully decoded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub status: String,
    pub admin_email_sent: bool,
    pub customer_email_sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_error: Option<String>,
    pub order_saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_error: Option<String>,
}

impl From<OrderSubmissionResult> for OrderResponse {
    fn from(result: OrderSubmissionResult) -> Self {
        Self {
            status: "ok".to_string(),
            admin_email_sent: result.operator_notice.succeeded(),
            customer_email_sent: result.customer_confirmation.succeeded(),
            admin_error: result.operator_notice.error_detail().map(String::from),
            customer_error: result.customer_confirmation.error_detail().map(String::from),
            order_saved: result.saved(),
            ledger_error: result.ledger_error,
        }
    }
}
