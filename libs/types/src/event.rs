//! Match events
//!
//! Events are state-transition requests against a match's result string.
//! The integer codes are an external contract with existing callers and
//! must stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single in-game event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEvent {
    HomeGoal,
    AwayGoal,
    NextPeriod,
    HomeCancel,
    AwayCancel,
}

impl MatchEvent {
    /// All events in code order
    pub const ALL: [MatchEvent; 5] = [
        MatchEvent::HomeGoal,
        MatchEvent::AwayGoal,
        MatchEvent::NextPeriod,
        MatchEvent::HomeCancel,
        MatchEvent::AwayCancel,
    ];

    /// Decode a caller-supplied event code
    ///
    /// Returns `None` for codes outside the enumeration; whether that is an
    /// error is decided by the caller's configuration.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(MatchEvent::HomeGoal),
            1 => Some(MatchEvent::AwayGoal),
            2 => Some(MatchEvent::NextPeriod),
            3 => Some(MatchEvent::HomeCancel),
            4 => Some(MatchEvent::AwayCancel),
            _ => None,
        }
    }

    /// Stable integer code for this event
    pub fn code(&self) -> i32 {
        match self {
            MatchEvent::HomeGoal => 0,
            MatchEvent::AwayGoal => 1,
            MatchEvent::NextPeriod => 2,
            MatchEvent::HomeCancel => 3,
            MatchEvent::AwayCancel => 4,
        }
    }

    /// Variant name, as shown in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            MatchEvent::HomeGoal => "HomeGoal",
            MatchEvent::AwayGoal => "AwayGoal",
            MatchEvent::NextPeriod => "NextPeriod",
            MatchEvent::HomeCancel => "HomeCancel",
            MatchEvent::AwayCancel => "AwayCancel",
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
