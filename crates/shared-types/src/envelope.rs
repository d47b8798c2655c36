//! # Call Outcome Envelope
//!
//! The result of every cross-service and top-level call: success with an
//! optional payload, or failure with a kind and message.
//!
//! Callers branch on success/failure. The failure kind is only inspected
//! where a service makes a local decision on it (for example the
//! orchestrator telling a capacity rejection apart from a missing circuit
//! when reserving).

use crate::errors::{CallFailure, ErrorKind};
use serde::{Deserialize, Serialize};

/// Outcome of a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome {
    /// The call succeeded, optionally returning raw payload bytes.
    Success(Option<Vec<u8>>),
    /// The call failed.
    Failure(CallFailure),
}

impl CallOutcome {
    /// Success without payload.
    #[must_use]
    pub fn ok() -> Self {
        Self::Success(None)
    }

    /// Success carrying payload bytes.
    #[must_use]
    pub fn payload(bytes: Vec<u8>) -> Self {
        Self::Success(Some(bytes))
    }

    /// Failure of the given kind.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure(CallFailure::new(kind, message))
    }

    /// Returns true for `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Failure kind, if any.
    #[must_use]
    pub fn failure_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.kind),
        }
    }

    /// Convert into a `Result` over the optional payload.
    pub fn into_result(self) -> Result<Option<Vec<u8>>, CallFailure> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl From<CallFailure> for CallOutcome {
    fn from(failure: CallFailure) -> Self {
        Self::Failure(failure)
    }
}

impl From<Result<Option<Vec<u8>>, CallFailure>> for CallOutcome {
    fn from(result: Result<Option<Vec<u8>>, CallFailure>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(failure) => Self::Failure(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_without_payload() {
        let outcome = CallOutcome::ok();
        assert!(outcome.is_success());
        assert_eq!(outcome.failure_kind(), None);
        assert_eq!(outcome.into_result(), Ok(None));
    }

    #[test]
    fn test_failure_round_trips_through_result() {
        let outcome = CallOutcome::failure(ErrorKind::CapacityExceeded, "too much");
        assert_eq!(outcome.failure_kind(), Some(ErrorKind::CapacityExceeded));

        let back: CallOutcome = outcome.clone().into_result().into();
        assert_eq!(back, outcome);
    }
}
