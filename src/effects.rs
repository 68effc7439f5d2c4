//! Validation helpers built on stillwater's `Validation`.
//!
//! Input checks in bizdoctor accumulate ALL problems before failing, so a
//! caller submitting a malformed bottleneck list sees every bad field in
//! one pass instead of fixing them one at a time.
//!
//! # Example
//!
//! ```rust
//! use bizdoctor::effects::{from_errors, run_validation, FieldError, InputValidation};
//!
//! fn validate_hours(hours: f64) -> InputValidation<f64> {
//!     let errors = if hours >= 0.0 {
//!         vec![]
//!     } else {
//!         vec![FieldError::new("time_impact_hours", "must be non-negative")]
//!     };
//!     from_errors(hours, errors)
//! }
//!
//! assert!(run_validation(validate_hours(4.0)).is_ok());
//! assert!(run_validation(validate_hours(-1.0)).is_err());
//! ```

use crate::errors::Error;
use std::fmt;
use stillwater::{NonEmptyVec, Validation};

/// A validation failure tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path, e.g. `name` -> `bottlenecks[2].name`.
    pub fn nested(self, parent: &str) -> Self {
        Self {
            field: format!("{}.{}", parent, self.field),
            message: self.message,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Error collection type for validation accumulation.
pub type FieldErrors = NonEmptyVec<FieldError>;

/// Validation type for input and record checks.
pub type InputValidation<T> = Validation<T, FieldErrors>;

/// Turn a list of collected errors into a validation result.
///
/// An empty list is a success carrying `value`.
pub fn from_errors<T>(value: T, errors: Vec<FieldError>) -> InputValidation<T> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(value),
    }
}

/// Convert a validation into a fail-fast `Result` carrying every message.
pub fn run_validation<T>(validation: InputValidation<T>) -> crate::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(Error::validation(
            errors.into_iter().map(|e| e.to_string()),
        )),
    }
}
