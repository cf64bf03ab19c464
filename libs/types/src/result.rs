//! Result string alphabet
//!
//! A match result is an ordered string of goal characters and period
//! separators, e.g. `"HAH;A"` is three goals in the first period and one
//! away goal in the second.

use serde::{Deserialize, Serialize};

use crate::ids::MatchId;

/// Home team goal
pub const HOME_GOAL: char = 'H';

/// Away team goal
pub const AWAY_GOAL: char = 'A';

/// Boundary between two periods
pub const PERIOD_SEPARATOR: char = ';';

/// A tracked match and its running result string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: MatchId,
    pub match_result: String,
}

impl Match {
    /// Create a match with an empty result
    pub fn new(match_id: MatchId) -> Self {
        Self {
            match_id,
            match_result: String::new(),
        }
    }
}
