//! Result engine core
//!
//! Pure transition function from a result string and an event to the next
//! result string. Holds no state besides its period policy and never logs;
//! failures go back to the caller as `CancelError` values.

use types::errors::CancelError;
use types::event::MatchEvent;
use types::result::{AWAY_GOAL, HOME_GOAL, PERIOD_SEPARATOR};

use crate::cancel;
use crate::config::PeriodPolicy;

/// Result engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultEngine {
    periods: PeriodPolicy,
}

impl ResultEngine {
    /// Create a result engine with the given period policy
    pub fn new(periods: PeriodPolicy) -> Self {
        Self { periods }
    }

    /// Apply one event to `current` and return the next result
    ///
    /// `current` is left untouched; on error the caller still holds the
    /// result as it was before the event.
    pub fn apply_event(&self, current: &str, event: MatchEvent) -> Result<String, CancelError> {
        match event {
            MatchEvent::HomeGoal => Ok(append(current, HOME_GOAL)),
            MatchEvent::AwayGoal => Ok(append(current, AWAY_GOAL)),
            MatchEvent::NextPeriod => Ok(self.next_period(current)),
            MatchEvent::HomeCancel => cancel::cancel_goal(current, event, HOME_GOAL),
            MatchEvent::AwayCancel => cancel::cancel_goal(current, event, AWAY_GOAL),
        }
    }

    /// Apply a sequence of events, stopping at the first failure
    pub fn replay<I>(&self, events: I) -> Result<String, CancelError>
    where
        I: IntoIterator<Item = MatchEvent>,
    {
        events
            .into_iter()
            .try_fold(String::new(), |result, event| self.apply_event(&result, event))
    }

    fn next_period(&self, current: &str) -> String {
        match self.periods {
            PeriodPolicy::Single if current.contains(PERIOD_SEPARATOR) => current.to_string(),
            PeriodPolicy::Single | PeriodPolicy::Multi => append(current, PERIOD_SEPARATOR),
        }
    }
}

fn append(current: &str, c: char) -> String {
    let mut next = String::with_capacity(current.len() + c.len_utf8());
    next.push_str(current);
    next.push(c);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::errors::CancelReason;

    fn single() -> ResultEngine {
        ResultEngine::new(PeriodPolicy::Single)
    }

    fn multi() -> ResultEngine {
        ResultEngine::new(PeriodPolicy::Multi)
    }

    #[test]
    fn test_goals_append() {
        let engine = single();
        assert_eq!(engine.apply_event("", MatchEvent::HomeGoal).unwrap(), "H");
        assert_eq!(engine.apply_event("", MatchEvent::AwayGoal).unwrap(), "A");
        assert_eq!(engine.apply_event("H;", MatchEvent::HomeGoal).unwrap(), "H;H");
    }

    #[test]
    fn test_next_period_on_empty() {
        assert_eq!(single().apply_event("", MatchEvent::NextPeriod).unwrap(), ";");
    }

    #[test]
    fn test_single_policy_ignores_second_boundary() {
        let engine = single();
        assert_eq!(engine.apply_event("H;", MatchEvent::NextPeriod).unwrap(), "H;");
        assert_eq!(engine.apply_event("H;A", MatchEvent::NextPeriod).unwrap(), "H;A");
    }

    #[test]
    fn test_multi_policy_accumulates_boundaries() {
        let engine = multi();
        assert_eq!(engine.apply_event("H;", MatchEvent::NextPeriod).unwrap(), "H;;");
        assert_eq!(engine.apply_event("H;A", MatchEvent::NextPeriod).unwrap(), "H;A;");
    }

    #[test]
    fn test_sequential_events_accumulate() {
        let result = single()
            .replay([
                MatchEvent::HomeGoal,
                MatchEvent::AwayGoal,
                MatchEvent::AwayGoal,
                MatchEvent::NextPeriod,
                MatchEvent::HomeGoal,
            ])
            .unwrap();
        assert_eq!(result, "HAA;H");
    }

    #[test]
    fn test_cancel_dispatch() {
        let engine = single();
        assert_eq!(engine.apply_event("HH", MatchEvent::HomeCancel).unwrap(), "H");
        assert_eq!(engine.apply_event("HA;", MatchEvent::AwayCancel).unwrap(), "H;");
    }

    #[test]
    fn test_cancel_on_empty_fails_for_both_sides() {
        let engine = single();
        for event in [MatchEvent::HomeCancel, MatchEvent::AwayCancel] {
            let err = engine.apply_event("", event).unwrap_err();
            assert_eq!(err.event, event);
            assert_eq!(err.original_result, "");
            assert!(matches!(err.reason, CancelReason::NothingToCancel { .. }));
        }
    }

    #[test]
    fn test_cancel_wrong_side() {
        let err = single().apply_event("H", MatchEvent::AwayCancel).unwrap_err();
        assert_eq!(err.reason.expected(), 'A');
        assert_eq!(err.reason.found(), Some('H'));
    }

    #[test]
    fn test_replay_stops_at_failure() {
        let err = single()
            .replay([MatchEvent::HomeGoal, MatchEvent::AwayCancel, MatchEvent::HomeGoal])
            .unwrap_err();
        assert_eq!(err.original_result, "H");
    }

    #[test]
    fn test_multi_period_scenario() {
        let result = multi()
            .replay([
                MatchEvent::HomeGoal,
                MatchEvent::NextPeriod,
                MatchEvent::AwayGoal,
                MatchEvent::NextPeriod,
                MatchEvent::HomeGoal,
            ])
            .unwrap();
        assert_eq!(result, "H;A;H");
    }
}
