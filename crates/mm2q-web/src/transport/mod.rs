//! Transport layer (HTTP).
//!
//! Both handlers go through the same path: raw strings, then
//! `queue::input::parse_pair`, then `queue::mm2::compute`. They differ only
//! in how the outcome is rendered.

pub mod api;
pub mod form;
