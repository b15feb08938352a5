//! Standings Engine
//!
//! Pure computation of a ranked competition table from an ordered sequence
//! of match fixtures. Only completed matches count; input order is trusted
//! as chronological play order and drives the recent-form window.
//!
//! **Key Invariants:**
//! - Deterministic output (same inputs → same table, byte for byte)
//! - Total ordering: points, goal difference, goals for, then team name
//! - `played = wins + draws + losses` and `points = 3*wins + draws` per row
//! - Input is never mutated; the engine holds no state across calls
//! - Malformed completed matches reject the whole call, never a partial table

pub mod engine;
pub mod ordering;
pub mod tally;

pub use engine::{compute_standings, StandingsError};
