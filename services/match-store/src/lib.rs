//! Match Store Service
//!
//! File-backed persistence for match fixtures: one JSON file per
//! competition under a data directory, addressed through a fixed catalog
//! of known competitions. Files keep matches in chronological play order;
//! the store appends on create and rewrites atomically on every change.

pub mod catalog;
pub mod store;

pub use catalog::Catalog;
pub use store::{FileMatchStore, StoreConfig, StoreError};
