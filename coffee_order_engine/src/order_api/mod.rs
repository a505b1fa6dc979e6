//! # Coffee order engine public API
//!
//! [`order_flow_api`] hosts [`OrderFlowApi`](order_flow_api::OrderFlowApi), the workflow that runs for every order
//! submission. It is created by supplying a catalog, a ledger and a notifier, each of which can be swapped for
//! alternative backends or test doubles.
//!
//! ```rust,ignore
//! use coffee_order_engine::{JsonFileCatalog, JsonFileLedger, Notifier, OrderFlowApi, SmtpMailer};
//! let mailer = SmtpMailer::new(&smtp_config)?;
//! let api = OrderFlowApi::new(
//!     JsonFileCatalog::new("coffees.json"),
//!     JsonFileLedger::new("orders.json"),
//!     Notifier::new(mailer, &smtp_config.user),
//!     "owner@example.com",
//! );
//! let result = api.submit_raw(br#"{"name":"Ada","coffeeId":1,"notes":""}"#).await?;
//! ```
pub mod errors;
pub mod order_flow_api;
pub mod order_objects;
