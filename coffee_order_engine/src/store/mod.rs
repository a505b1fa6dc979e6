//! # Order storage
//!
//! This module defines the contracts for the two pieces of durable state used by the order workflow, and provides
//! JSON-file backed implementations of each.
//!
//! * [`OrderCatalog`] is the read-only list of items that can be ordered.
//! * [`OrderLedger`] is the append-only record of every order that has been submitted.
//!
//! The workflow only ever talks to the traits, so alternative backends (or test doubles) can be swapped in freely.
pub mod json;
pub mod traits;
