//! Queue model modules.
//!
//! - `input`: turns two raw form strings into a validated [`InputPair`].
//! - `mm2`: closed-form metrics of a two-server queue with Poisson arrivals
//!   and exponential service.
//!
//! Validation happens strictly before computation: `mm2::compute` only
//! accepts an `InputPair`, which only holds values in `MIN_TIME..=MAX_TIME`.

pub mod input;
pub mod mm2;

pub use input::{parse_pair, Field, InputPair, MAX_TIME, MIN_TIME};
pub use mm2::{compute, compute_raw, MetricsResult, Outcome, UNSTABLE_MESSAGE};
