//! Types library for the competition tracker
//!
//! This library provides the domain type definitions shared across the
//! tracker's services, keeping the wire format compatible with the existing
//! front-end and data files.
//!
//! # Modules
//! - `ids`: Identifiers (CompetitionId, MatchId)
//! - `fixture`: Match fixtures and their create/update payloads
//! - `standings`: Standings table rows and outcome markers

// Public modules
pub mod fixture;
pub mod ids;
pub mod standings;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixture::*;
    pub use crate::ids::*;
    pub use crate::standings::*;
}
