//! Input validation for the two form values.
//!
//! The checks run in a fixed order across both fields: emptiness first,
//! then parsing, then positivity, then range. So a blank service field is
//! reported even when the arrival field is garbage.

use std::fmt;

use crate::error::{Mm2Error, Result};

/// Which of the two form inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Mean minutes between arrivals.
    Arrival,
    /// Mean minutes to serve one customer at one server.
    Service,
}

impl Field {
    /// Form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Arrival => "arrival",
            Field::Service => "service",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smallest accepted mean time, in minutes.
pub const MIN_TIME: f64 = 1e-100;
/// Largest accepted mean time, in minutes.
pub const MAX_TIME: f64 = 1e100;

/// A validated pair of mean times, both within `MIN_TIME..=MAX_TIME`.
///
/// Inside that range every rate, denominator, and metric `compute` derives is
/// finite; outside it λ², μ(μ - λ/2) or a reciprocal can overflow or underflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputPair {
    arrival_time: f64,
    service_time: f64,
}

impl InputPair {
    /// Validate numbers the caller already holds.
    pub fn new(arrival_time: f64, service_time: f64) -> Result<Self> {
        let arrival_time = check_value(Field::Arrival, arrival_time)?;
        let service_time = check_value(Field::Service, service_time)?;
        check_positive(Field::Arrival, arrival_time)?;
        check_positive(Field::Service, service_time)?;
        check_range(Field::Arrival, arrival_time)?;
        check_range(Field::Service, service_time)?;
        Ok(Self {
            arrival_time,
            service_time,
        })
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn service_time(&self) -> f64 {
        self.service_time
    }
}

/// Validate two raw form strings into an [`InputPair`].
pub fn parse_pair(arrival: &str, service: &str) -> Result<InputPair> {
    let arrival = arrival.trim();
    let service = service.trim();

    if arrival.is_empty() {
        return Err(reject(Mm2Error::EmptyInput(Field::Arrival)));
    }
    if service.is_empty() {
        return Err(reject(Mm2Error::EmptyInput(Field::Service)));
    }

    let arrival_time = parse_value(Field::Arrival, arrival)?;
    let service_time = parse_value(Field::Service, service)?;

    check_positive(Field::Arrival, arrival_time)?;
    check_positive(Field::Service, service_time)?;

    check_range(Field::Arrival, arrival_time)?;
    check_range(Field::Service, service_time)?;

    Ok(InputPair {
        arrival_time,
        service_time,
    })
}

fn parse_value(field: Field, raw: &str) -> Result<f64> {
    let v: f64 = raw
        .parse()
        .map_err(|_| reject(Mm2Error::NonNumericInput(field)))?;
    check_value(field, v)
}

// `f64::from_str` accepts "inf" and "NaN"; neither is a usable mean time.
fn check_value(field: Field, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(reject(Mm2Error::NonNumericInput(field)))
    }
}

fn check_positive(field: Field, v: f64) -> Result<()> {
    if v > 0.0 {
        Ok(())
    } else {
        Err(reject(Mm2Error::NonPositiveInput(field)))
    }
}

fn check_range(field: Field, v: f64) -> Result<()> {
    if (MIN_TIME..=MAX_TIME).contains(&v) {
        Ok(())
    } else {
        Err(reject(Mm2Error::OutOfRangeInput(field)))
    }
}

fn reject(err: Mm2Error) -> Mm2Error {
    if let Some(field) = err.field() {
        tracing::debug!(%field, code = err.client_code().as_str(), "input rejected");
    }
    err
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn empty_is_checked_before_parsing() {
        let err = parse_pair("abc", "  ").expect_err("must fail");
        assert_eq!(err, Mm2Error::EmptyInput(Field::Service));
    }

    #[test]
    fn parse_is_checked_before_positivity() {
        let err = parse_pair("-1", "xyz").expect_err("must fail");
        assert_eq!(err, Mm2Error::NonNumericInput(Field::Service));
    }

    #[test]
    fn new_rejects_non_finite() {
        let err = InputPair::new(f64::NAN, 1.0).expect_err("must fail");
        assert_eq!(err, Mm2Error::NonNumericInput(Field::Arrival));
        let err = InputPair::new(1.0, f64::INFINITY).expect_err("must fail");
        assert_eq!(err, Mm2Error::NonNumericInput(Field::Service));
    }

    #[test]
    fn new_rejects_zero() {
        let err = InputPair::new(0.0, 1.0).expect_err("must fail");
        assert_eq!(err, Mm2Error::NonPositiveInput(Field::Arrival));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(InputPair::new(MIN_TIME, MAX_TIME).is_ok());
        let err = InputPair::new(MIN_TIME / 10.0, 1.0).expect_err("must fail");
        assert_eq!(err, Mm2Error::OutOfRangeInput(Field::Arrival));
    }

    #[test]
    fn sign_is_checked_before_range() {
        let err = parse_pair("1e308", "-1").expect_err("must fail");
        assert_eq!(err, Mm2Error::NonPositiveInput(Field::Service));
    }

    #[test]
    fn field_names() {
        assert_eq!(Field::Arrival.to_string(), "arrival");
        assert_eq!(Field::Service.as_str(), "service");
    }
}
