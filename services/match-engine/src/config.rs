//! Service configuration
//!
//! The source system shipped two incompatible behaviors for unknown match
//! ids and for repeated period changes. Both are explicit choices here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How event application treats a match id the store has never seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupPolicy {
    /// Create the match with an empty result on first event
    #[default]
    AutoCreate,
    /// Fail with `MatchError::NotFound`
    StrictExists,
}

/// How many period boundaries a result may hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodPolicy {
    /// At most one separator; further `NextPeriod` events are no-ops
    #[default]
    Single,
    /// Every `NextPeriod` appends a separator
    Multi,
}

/// How event codes outside the enumeration are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownEventPolicy {
    /// Leave the result unchanged and return it
    #[default]
    Ignore,
    /// Fail with `MatchError::InvalidEvent`
    Reject,
}

/// Match service configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub lookup: LookupPolicy,
    pub periods: PeriodPolicy,
    pub unknown_events: UnknownEventPolicy,
}

/// Unrecognized policy name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {setting} '{value}', expected one of: {expected}")]
pub struct ConfigError {
    pub setting: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for LookupPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto-create" => Ok(LookupPolicy::AutoCreate),
            "strict-exists" => Ok(LookupPolicy::StrictExists),
            _ => Err(ConfigError {
                setting: "lookup policy",
                value: s.to_string(),
                expected: "auto-create, strict-exists",
            }),
        }
    }
}

impl FromStr for PeriodPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(PeriodPolicy::Single),
            "multi" => Ok(PeriodPolicy::Multi),
            _ => Err(ConfigError {
                setting: "period policy",
                value: s.to_string(),
                expected: "single, multi",
            }),
        }
    }
}

impl FromStr for UnknownEventPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnknownEventPolicy::Ignore),
            "reject" => Ok(UnknownEventPolicy::Reject),
            _ => Err(ConfigError {
                setting: "unknown event policy",
                value: s.to_string(),
                expected: "ignore, reject",
            }),
        }
    }
}

impl fmt::Display for LookupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupPolicy::AutoCreate => "auto-create",
            LookupPolicy::StrictExists => "strict-exists",
        })
    }
}

impl fmt::Display for PeriodPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PeriodPolicy::Single => "single",
            PeriodPolicy::Multi => "multi",
        })
    }
}

impl fmt::Display for UnknownEventPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnknownEventPolicy::Ignore => "ignore",
            UnknownEventPolicy::Reject => "reject",
        })
    }
}
