//! # Argument Contract
//!
//! Every operation receives an ordered sequence of strings. An operation
//! fails with `InvalidArgument` when the count does not match its fixed
//! arity, when any argument is empty, or when a numeric argument is not a
//! decimal integer in range.

use crate::errors::{CallFailure, ErrorKind};
use thiserror::Error;

/// Argument validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// Wrong number of arguments.
    #[error("{operation}: incorrect number of arguments, expecting {expected} but got {got}")]
    Arity {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    /// An argument was the empty string.
    #[error("argument {index} must be a non-empty string")]
    Empty { index: usize },

    /// A numeric argument did not parse.
    #[error("{field} must be a non-negative decimal integer, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// A numeric argument that must be positive was zero.
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
}

impl From<ArgumentError> for CallFailure {
    fn from(err: ArgumentError) -> Self {
        CallFailure::new(ErrorKind::InvalidArgument, err.to_string())
    }
}

/// Check arity and non-emptiness.
pub fn validate_args(
    operation: &'static str,
    args: &[String],
    arity: usize,
) -> Result<(), ArgumentError> {
    if args.len() != arity {
        return Err(ArgumentError::Arity {
            operation,
            expected: arity,
            got: args.len(),
        });
    }

    match args.iter().position(String::is_empty) {
        Some(index) => Err(ArgumentError::Empty { index }),
        None => Ok(()),
    }
}

/// Parse a bandwidth amount that may be zero.
pub fn parse_bandwidth(field: &'static str, value: &str) -> Result<u64, ArgumentError> {
    // u64::from_str accepts a leading '+', the decimal contract does not.
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgumentError::NotANumber {
            field,
            value: value.to_string(),
        });
    }
    value.parse::<u64>().map_err(|_| ArgumentError::NotANumber {
        field,
        value: value.to_string(),
    })
}

/// Parse a bandwidth amount that must be strictly positive.
pub fn parse_positive_bandwidth(field: &'static str, value: &str) -> Result<u64, ArgumentError> {
    match parse_bandwidth(field, value)? {
        0 => Err(ArgumentError::Zero { field }),
        amount => Ok(amount),
    }
}
