//! Concurrency test
//!
//! Verifies that events for the same match are serialized (no lost updates)
//! and that different matches can be updated in parallel.

use std::sync::Arc;
use std::thread;

use match_engine::{MatchService, MatchStore, PeriodPolicy, ServiceConfig};
use types::event::MatchEvent;
use types::ids::MatchId;

const THREADS: usize = 8;
const GOALS_PER_THREAD: usize = 250;

fn service() -> MatchService {
    let config = ServiceConfig {
        periods: PeriodPolicy::Multi,
        ..ServiceConfig::default()
    };
    MatchService::new(Arc::new(MatchStore::with_seed([MatchId::new(91)])), config)
}

#[test]
fn test_same_match_no_lost_updates() {
    let service = Arc::new(service());
    let match_id = MatchId::new(91);

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let event = if i % 2 == 0 {
                    MatchEvent::HomeGoal
                } else {
                    MatchEvent::AwayGoal
                };
                for _ in 0..GOALS_PER_THREAD {
                    service.apply_event(match_id, event).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let score = service.score(match_id);
    let per_side = (THREADS / 2 * GOALS_PER_THREAD) as u32;
    assert_eq!(score.home, per_side);
    assert_eq!(score.away, per_side);
    assert_eq!(score.period, 1);
}

#[test]
fn test_goal_and_cancel_pairs_balance_out() {
    let service = Arc::new(service());
    let match_id = MatchId::new(91);

    // Each thread scores and immediately cancels a home goal. Cancels may
    // interleave with other threads' goals, but every cancel finds an 'H'.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..GOALS_PER_THREAD {
                    service.apply_event(match_id, MatchEvent::HomeGoal).unwrap();
                    service.apply_event(match_id, MatchEvent::HomeCancel).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(service.store().get(match_id).unwrap().match_result, "");
}

#[test]
fn test_independent_matches_in_parallel() {
    let service = Arc::new(service());

    let handles: Vec<_> = (0..THREADS as i32)
        .map(|n| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let match_id = MatchId::new(1000 + n);
                for _ in 0..GOALS_PER_THREAD {
                    service.apply_event(match_id, MatchEvent::AwayGoal).unwrap();
                }
                service.apply_event(match_id, MatchEvent::NextPeriod).unwrap();
                service.display_match_result(match_id)
            })
        })
        .collect();

    for handle in handles {
        let rendered = handle.join().unwrap();
        assert_eq!(rendered, format!("0 : {GOALS_PER_THREAD} (Second Half)"));
    }

    // seeded match plus one per thread
    assert_eq!(service.store().len(), THREADS + 1);
}
