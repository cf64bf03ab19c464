//! Rendered score types
//!
//! `RenderedScore` is derived from a result string and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score and period derived from a result string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedScore {
    /// Home goals across all periods
    pub home: u32,
    /// Away goals across all periods
    pub away: u32,
    /// Current period, 1-based
    pub period: usize,
}

impl RenderedScore {
    /// Score of a match with no recorded events
    pub const KICK_OFF: RenderedScore = RenderedScore {
        home: 0,
        away: 0,
        period: 1,
    };

    /// Display label of the current period
    pub fn period_label(&self) -> String {
        period_label(self.period)
    }
}

impl Default for RenderedScore {
    fn default() -> Self {
        Self::KICK_OFF
    }
}

/// Map a 1-based period index to its display name
pub fn period_label(period: usize) -> String {
    match period {
        1 => "First Half".to_string(),
        2 => "Second Half".to_string(),
        3 => "Third Period".to_string(),
        4 => "Fourth Period".to_string(),
        n => format!("Period {n}"),
    }
}

impl fmt::Display for RenderedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} ({})", self.home, self.away, self.period_label())
    }
}
