//! Match Engine Service
//!
//! Tracks the running result string of each match and renders it as a
//! score with a period label.
//!
//! **Components:**
//! - `engine`: pure transition from (result, event) to the next result
//! - `cancel`: locating and removing the most recent goal
//! - `render`: result string to `"<home> : <away> (<period>)"`
//! - `store`: in-memory match collection with per-entry locking
//! - `service`: facade tying store, engine and renderer together
//!
//! **Key Invariants:**
//! - Only the service mutates the store
//! - Concurrent events for the same match are serialized
//! - A cancel removes exactly one goal character and nothing else

pub mod cancel;
pub mod config;
pub mod engine;
pub mod render;
pub mod service;
pub mod store;

pub use config::{LookupPolicy, PeriodPolicy, ServiceConfig, UnknownEventPolicy};
pub use engine::ResultEngine;
pub use service::MatchService;
pub use store::MatchStore;
