//! Shared error type across mm2q crates.

use thiserror::Error;

use crate::queue::input::Field;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// A raw input was missing or blank.
    EmptyInput,
    /// A raw input did not parse as a finite real number.
    NonNumericInput,
    /// A parsed input was zero or negative.
    NonPositiveInput,
    /// A positive input outside the supported magnitude range.
    OutOfRangeInput,
    /// Utilization reached 1. Only used to label `Outcome::Unstable`.
    UnstableSystem,
    /// Malformed config or request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::EmptyInput => "EMPTY_INPUT",
            ClientCode::NonNumericInput => "NON_NUMERIC_INPUT",
            ClientCode::NonPositiveInput => "NON_POSITIVE_INPUT",
            ClientCode::OutOfRangeInput => "OUT_OF_RANGE_INPUT",
            ClientCode::UnstableSystem => "UNSTABLE_SYSTEM",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, Mm2Error>;

/// Unified error type used by core and web.
///
/// Instability is not an error; see [`crate::queue::mm2::Outcome`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Mm2Error {
    #[error("input must not be empty")]
    EmptyInput(Field),
    #[error("input must be numeric")]
    NonNumericInput(Field),
    #[error("input must be positive (> 0)")]
    NonPositiveInput(Field),
    #[error("input must be between 1e-100 and 1e100")]
    OutOfRangeInput(Field),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl Mm2Error {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            Mm2Error::EmptyInput(_) => ClientCode::EmptyInput,
            Mm2Error::NonNumericInput(_) => ClientCode::NonNumericInput,
            Mm2Error::NonPositiveInput(_) => ClientCode::NonPositiveInput,
            Mm2Error::OutOfRangeInput(_) => ClientCode::OutOfRangeInput,
            Mm2Error::BadRequest(_) => ClientCode::BadRequest,
            Mm2Error::UnsupportedVersion => ClientCode::UnsupportedVersion,
            Mm2Error::Internal(_) => ClientCode::Internal,
        }
    }

    /// The offending form field, for input errors.
    pub fn field(&self) -> Option<Field> {
        match self {
            Mm2Error::EmptyInput(f)
            | Mm2Error::NonNumericInput(f)
            | Mm2Error::NonPositiveInput(f)
            | Mm2Error::OutOfRangeInput(f) => Some(*f),
            _ => None,
        }
    }

    /// True for errors the user can fix by editing the form.
    pub fn is_input_error(&self) -> bool {
        self.field().is_some()
    }
}
