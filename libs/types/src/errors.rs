//! Error types for the match result tracker
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

use crate::event::MatchEvent;
use crate::ids::MatchId;

/// Why a cancel event could not be applied
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    #[error("no character to cancel: Expected last character to be '{expected}' but found none")]
    NothingToCancel { expected: char },

    #[error("last character mismatch: Expected last character to be '{expected}' but found '{found}'")]
    Mismatch { expected: char, found: char },
}

impl CancelReason {
    /// Goal character the cancel was looking for
    pub fn expected(&self) -> char {
        match self {
            CancelReason::NothingToCancel { expected } => *expected,
            CancelReason::Mismatch { expected, .. } => *expected,
        }
    }

    /// Character actually found, `None` when the result held no goals
    pub fn found(&self) -> Option<char> {
        match self {
            CancelReason::NothingToCancel { .. } => None,
            CancelReason::Mismatch { found, .. } => Some(*found),
        }
    }
}

/// A cancel event rejected by the result engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot apply {event} to result \"{original_result}\": {reason}")]
pub struct CancelError {
    pub event: MatchEvent,
    /// Result string as it was before the failed operation
    pub original_result: String,
    pub reason: CancelReason,
}

/// Top-level error for match operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match {match_id}: {source}")]
    Cancel {
        match_id: MatchId,
        #[source]
        source: CancelError,
    },

    #[error("Match with ID {match_id} not found")]
    NotFound { match_id: MatchId },

    #[error("Invalid event code: {code}")]
    InvalidEvent { code: i32 },
}

impl MatchError {
    /// Match the error refers to, if any
    pub fn match_id(&self) -> Option<MatchId> {
        match self {
            MatchError::Cancel { match_id, .. } | MatchError::NotFound { match_id } => {
                Some(*match_id)
            }
            MatchError::InvalidEvent { .. } => None,
        }
    }
}
