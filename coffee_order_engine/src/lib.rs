//! Coffee Order Engine
//!
//! The core of the coffee order server. It accepts orders for items in a small catalog, keeps a durable record of every
//! order, and emails the shop and the customer about it. The library knows nothing about HTTP.
//!
//! The library is divided into three sections:
//! 1. Storage ([`mod@store`]). The read-only item catalog and the append-only order ledger are defined as traits, with
//!    JSON file implementations provided.
//! 2. Notification ([`mod@notifier`]). Composes the order emails and hands them to a [`Mailer`]; [`SmtpMailer`] talks
//!    to a real SMTP relay.
//! 3. The order workflow ([`OrderFlowApi`]). Decodes an order, records it, and sends both notifications, collecting the
//!    outcome of every step in an [`OrderSubmissionResult`].
pub mod db_types;
pub mod notifier;
mod order_api;
pub mod store;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use notifier::{
    DeliveryError,
    MailMessage,
    Mailer,
    NotificationOutcome,
    Notice,
    Notifier,
    SmtpConfig,
    SmtpMailer,
};
pub use order_api::{errors::OrderFlowError, order_flow_api::OrderFlowApi, order_objects::OrderSubmissionResult};
pub use store::{
    json::{CatalogError, JsonFileCatalog, JsonFileLedger, LedgerError},
    traits::{OrderCatalog, OrderLedger},
};
