//! Cancel logic
//!
//! A cancel reverses the most recent goal. Period separators recorded after
//! that goal are transparent: `"HA;"` cancelled by `AwayCancel` becomes `"H;"`.

use types::errors::{CancelError, CancelReason};
use types::event::MatchEvent;
use types::result::PERIOD_SEPARATOR;

/// Byte offset and character of the most recent goal in `result`
pub fn last_goal(result: &str) -> Option<(usize, char)> {
    result
        .char_indices()
        .rev()
        .find(|(_, c)| *c != PERIOD_SEPARATOR)
}

/// Remove the most recent goal if it is `expected`
///
/// Every other character keeps its position and order, separators included.
pub fn cancel_goal(
    result: &str,
    event: MatchEvent,
    expected: char,
) -> Result<String, CancelError> {
    let reject = |reason| CancelError {
        event,
        original_result: result.to_string(),
        reason,
    };

    let (index, found) =
        last_goal(result).ok_or_else(|| reject(CancelReason::NothingToCancel { expected }))?;

    if found != expected {
        return Err(reject(CancelReason::Mismatch { expected, found }));
    }

    let mut next = String::with_capacity(result.len());
    next.push_str(&result[..index]);
    next.push_str(&result[index + found.len_utf8()..]);
    Ok(next)
}
