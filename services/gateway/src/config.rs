use anyhow::Context;
use match_engine::ServiceConfig;
use std::env;
use std::net::SocketAddr;
use types::ids::MatchId;

/// Gateway configuration, read from the environment
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// `GATEWAY_ADDR`
    pub addr: SocketAddr,
    /// `MATCH_LOOKUP`, `MATCH_PERIODS`, `MATCH_UNKNOWN_EVENTS`
    pub service: ServiceConfig,
    /// `MATCH_SEED_IDS`, comma separated
    pub seed_matches: Vec<MatchId>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            service: ServiceConfig::default(),
            seed_matches: vec![MatchId::new(91)],
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("GATEWAY_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("invalid GATEWAY_ADDR '{addr}'"))?;
        }
        if let Some(lookup_policy) = lookup("MATCH_LOOKUP") {
            config.service.lookup = lookup_policy.parse()?;
        }
        if let Some(periods) = lookup("MATCH_PERIODS") {
            config.service.periods = periods.parse()?;
        }
        if let Some(unknown_events) = lookup("MATCH_UNKNOWN_EVENTS") {
            config.service.unknown_events = unknown_events.parse()?;
        }
        if let Some(seed) = lookup("MATCH_SEED_IDS") {
            config.seed_matches = parse_seed(&seed)?;
        }

        Ok(config)
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<Vec<MatchId>> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<i32>()
                .map(MatchId::new)
                .with_context(|| format!("invalid match id '{id}' in MATCH_SEED_IDS"))
        })
        .collect()
}
