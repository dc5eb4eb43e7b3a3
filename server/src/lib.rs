// server/src/lib.rs

//! REST surface for the storefront order core.
//!
//! The binary in `main.rs` wires [`storefront_core::OrderService`] over
//! Postgres and serves the order lifecycle API; everything reusable by the
//! integration tests (configuration, state, error mapping, extractors, routes)
//! lives in this library.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;
