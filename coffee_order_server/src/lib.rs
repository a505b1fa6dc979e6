//! # Coffee order server
//! This crate hosts the HTTP front end for the coffee order engine. It is responsible for:
//! Serving the item catalog.
//! Accepting new orders, recording them and emailing the shop and the customer.
//! Answering cross-origin preflight requests, so that a browser storefront on another origin can use the API.
//!
//! ## Configuration
//! The server is configured via environment variables, optionally loaded from a `.env` file. See
//! [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `GET /coffees`: The item catalog.
//! * `POST /order`: Submit a new order.
//! * `OPTIONS` on any path: cross-origin preflight.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
