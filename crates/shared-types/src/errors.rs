//! # Error Types
//!
//! Defines the error taxonomy carried on the wire between services.
//!
//! Each service keeps its own `thiserror` enum for local reasoning and maps
//! every variant onto exactly one [`ErrorKind`] when it answers a call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Categories of call failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Wrong arity, empty argument or unparseable number.
    InvalidArgument,
    /// Duplicate key on create.
    AlreadyExists,
    /// Missing key on read or mutate.
    NotFound,
    /// Business-rule rejection: the request exceeds unallocated capacity.
    CapacityExceeded,
    /// A downstream call itself failed, timed out or returned garbage.
    UpstreamUnavailable,
    /// The capacity decision passed but the provisioning write failed.
    CommitFailed,
    /// The function name is not served by this service.
    UnknownFunction,
    /// The service's own store failed.
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::AlreadyExists => "AlreadyExists",
            Self::NotFound => "NotFound",
            Self::CapacityExceeded => "CapacityExceeded",
            Self::UpstreamUnavailable => "UpstreamUnavailable",
            Self::CommitFailed => "CommitFailed",
            Self::UnknownFunction => "UnknownFunction",
            Self::Storage => "Storage",
        };
        f.write_str(name)
    }
}

/// A failed call as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{kind}] {message}")]
pub struct CallFailure {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl CallFailure {
    /// Create a failure of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure for a transport problem reaching `service`.
    pub fn unavailable(service: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UpstreamUnavailable,
            format!("{service} unavailable: {reason}"),
        )
    }

    /// Failure for a function name nobody registered.
    pub fn unknown_function(function: &str) -> Self {
        Self::new(
            ErrorKind::UnknownFunction,
            format!("Received unknown invoke function name - '{function}'"),
        )
    }
}
