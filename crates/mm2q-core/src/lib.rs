//! mm2q core: M/M/2 queue metrics, input validation, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies so the calculator
//! can be reused behind any front end. The web crate is one such front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed user
//! input surfaces as `Mm2Error`, and instability surfaces as
//! `queue::mm2::Outcome::Unstable`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod queue;

/// Shared result type.
pub use error::{ClientCode, Mm2Error, Result};
pub use queue::{compute, parse_pair, Field, InputPair, MetricsResult, Outcome, UNSTABLE_MESSAGE};
