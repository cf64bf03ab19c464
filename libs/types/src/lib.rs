//! Types library for the match result tracker
//!
//! This library provides the core type definitions shared by the result
//! engine and the gateway, so both sides agree on event codes, the result
//! string alphabet and the error taxonomy.
//!
//! # Modules
//! - `ids`: Match identifier
//! - `event`: Match events and their stable integer codes
//! - `result`: Result string alphabet and the `Match` record
//! - `score`: Rendered score and period labels
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod event;
pub mod result;
pub mod score;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::event::*;
    pub use crate::result::*;
    pub use crate::score::*;
    pub use crate::errors::*;
}
