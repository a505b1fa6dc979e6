use std::fmt::Display;

use coffee_common::non_blank;
use serde::{Deserialize, Serialize};

/// Display name used when an order refers to an item that is not in the catalog, or the catalog is unavailable.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";

//--------------------------------------     CatalogItem       -------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
}

impl CatalogItem {
    pub fn new<S: Into<String>>(id: i64, name: S) -> Self {
        Self { id, name: name.into() }
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

//--------------------------------------        Order          -------------------------------------------------------
/// A purchase order, as submitted by a customer.
///
/// The `coffee_id` is deliberately not checked against the catalog. Orders for unknown items are accepted and recorded
/// as-is; they show up as [`UNKNOWN_ITEM_NAME`] in notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub name: String,
    #[serde(rename = "coffeeId")]
    pub coffee_id: i64,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Order {
    pub fn new<S: Into<String>>(name: S, coffee_id: i64) -> Self {
        Self { name: name.into(), coffee_id, notes: String::default(), email: None }
    }

    pub fn with_notes<S: Into<String>>(mut self, notes: S) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Decode an order from a JSON payload. A blank email address is dropped, so it never reaches the ledger.
    pub fn decode(payload: &[u8]) -> Result<Self, serde_json::Error> {
        let mut order = serde_json::from_slice::<Self>(payload)?;
        order.email = order.customer_email().map(str::to_string);
        Ok(order)
    }

    /// The customer's email address, if one was supplied. Blank addresses count as not supplied.
    pub fn customer_email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ordered item #{}", self.name, self.coffee_id)
    }
}
