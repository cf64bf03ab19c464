//! Identifier types for tracked entities
//!
//! Matches are addressed by the integer id callers already use, so the
//! newtype is a thin wrapper that keeps ids from mixing with event codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(i32);

impl MatchId {
    /// Create from the raw integer id
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw integer id
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for MatchId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
