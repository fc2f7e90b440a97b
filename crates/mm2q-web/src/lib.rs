//! mm2q web library entry.
//!
//! This crate wires config, the HTML form, the JSON API, and ops endpoints
//! around the `mm2q-core` calculator. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod transport;
pub mod views;
