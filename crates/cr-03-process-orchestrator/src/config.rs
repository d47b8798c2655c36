//! Configuration for the Process Orchestrator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether admission reserves capacity before committing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdmissionMode {
    /// Read capacity, decide, commit. `allocate` is never called and the
    /// circuit's unallocated bandwidth is not decremented.
    #[default]
    CheckOnly,
    /// Read capacity, decide, `allocate`, commit.
    #[serde(rename = "reserve")]
    ReserveOnAdmit,
}

/// Who establishes the order key before `complete`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderPolicy {
    /// The orchestrator calls `openOrder` and then `complete`.
    #[default]
    OpenOnCommit,
    /// The orchestrator only calls `complete`; the placeholder must already
    /// exist.
    RequireExisting,
}

/// Unrecognised mode or policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {setting} '{value}', expected one of: {expected}")]
pub struct ParseSettingError {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for AdmissionMode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "check-only" => Ok(Self::CheckOnly),
            "reserve" => Ok(Self::ReserveOnAdmit),
            _ => Err(ParseSettingError {
                setting: "admission mode",
                value: s.to_string(),
                expected: "check-only, reserve",
            }),
        }
    }
}

impl fmt::Display for AdmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CheckOnly => "check-only",
            Self::ReserveOnAdmit => "reserve",
        })
    }
}

impl FromStr for PlaceholderPolicy {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open-on-commit" => Ok(Self::OpenOnCommit),
            "require-existing" => Ok(Self::RequireExisting),
            _ => Err(ParseSettingError {
                setting: "placeholder policy",
                value: s.to_string(),
                expected: "open-on-commit, require-existing",
            }),
        }
    }
}

impl fmt::Display for PlaceholderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OpenOnCommit => "open-on-commit",
            Self::RequireExisting => "require-existing",
        })
    }
}

/// Orchestrator configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Check-only (observed protocol) or reserve-on-admit
    pub admission_mode: AdmissionMode,
    /// Who writes the order placeholder
    pub placeholder_policy: PlaceholderPolicy,
}
