//! Match service facade
//!
//! The only component that touches the store. Decodes event codes, runs
//! the result engine inside the store's per-match lock, and renders scores.

use std::sync::Arc;

use tracing::{debug, info, warn};
use types::errors::MatchError;
use types::event::MatchEvent;
use types::ids::MatchId;
use types::score::RenderedScore;

use crate::config::{ServiceConfig, UnknownEventPolicy};
use crate::engine::ResultEngine;
use crate::render;
use crate::store::MatchStore;

/// Match service
#[derive(Debug, Clone)]
pub struct MatchService {
    store: Arc<MatchStore>,
    engine: ResultEngine,
    config: ServiceConfig,
}

impl MatchService {
    /// Create a service over `store` with the given configuration
    pub fn new(store: Arc<MatchStore>, config: ServiceConfig) -> Self {
        info!(
            lookup = %config.lookup,
            periods = %config.periods,
            unknown_events = %config.unknown_events,
            "MatchService initialized"
        );

        Self {
            store,
            engine: ResultEngine::new(config.periods),
            config,
        }
    }

    /// Create a service with default configuration
    pub fn with_defaults(store: Arc<MatchStore>) -> Self {
        Self::new(store, ServiceConfig::default())
    }

    pub fn store(&self) -> &Arc<MatchStore> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Apply a caller-supplied event code and return the new raw result
    pub fn update_match_result(
        &self,
        match_id: MatchId,
        event_code: i32,
    ) -> Result<String, MatchError> {
        match MatchEvent::from_code(event_code) {
            Some(event) => self.apply_event(match_id, event),
            None => match self.config.unknown_events {
                UnknownEventPolicy::Ignore => {
                    debug!(match_id = %match_id, event_code, "Ignoring unknown event code");
                    self.store
                        .update(match_id, self.config.lookup, |current| Ok(current.to_string()))
                }
                UnknownEventPolicy::Reject => {
                    warn!(match_id = %match_id, event_code, "Rejecting unknown event code");
                    Err(MatchError::InvalidEvent { code: event_code })
                }
            },
        }
    }

    /// Apply an event and return the new raw result
    pub fn apply_event(&self, match_id: MatchId, event: MatchEvent) -> Result<String, MatchError> {
        let outcome = self.store.update(match_id, self.config.lookup, |current| {
            self.engine
                .apply_event(current, event)
                .map_err(|source| MatchError::Cancel { match_id, source })
        });

        match &outcome {
            Ok(result) => debug!(match_id = %match_id, event = %event, result = %result, "Event applied"),
            Err(err) => warn!(match_id = %match_id, event = %event, error = %err, "Event rejected"),
        }

        outcome
    }

    /// Current score of a match; unknown matches are at kick-off
    pub fn score(&self, match_id: MatchId) -> RenderedScore {
        self.store
            .get(match_id)
            .map(|m| render::score(&m.match_result))
            .unwrap_or_default()
    }

    /// Rendered score of a match, e.g. `"2 : 1 (Second Half)"`
    pub fn display_match_result(&self, match_id: MatchId) -> String {
        self.score(match_id).to_string()
    }
}
