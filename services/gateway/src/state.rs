use crate::config::GatewayConfig;
use match_engine::{MatchService, MatchStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub matches: Arc<MatchService>,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        let store = Arc::new(MatchStore::with_seed(config.seed_matches.iter().copied()));
        Self {
            matches: Arc::new(MatchService::new(store, config.service)),
        }
    }
}
