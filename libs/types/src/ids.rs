//! Identifier types for tracker entities
//!
//! Competitions are addressed by name (case-insensitive), matches by a
//! sequential integer that is unique within one competition's dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Competition identifier (named tournament/league)
///
/// Stored in canonical form: trimmed and lower-cased, so lookups are
/// case-insensitive ("Brasileirao" and "brasileirao" address the same
/// competition).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompetitionId(String);

impl CompetitionId {
    /// Create a new CompetitionId from a string
    ///
    /// # Panics
    /// Panics if the name is empty after trimming
    pub fn new(name: impl Into<String>) -> Self {
        Self::try_new(name).expect("CompetitionId must be non-empty")
    }

    /// Try to create a CompetitionId, returning None if the name is empty
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let canonical = name.into().trim().to_lowercase();
        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    /// Get the canonical name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CompetitionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Canonicalizes on the way in, so ids read from request parameters or data
// files compare equal regardless of the casing they arrived with.
impl TryFrom<String> for CompetitionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| "competition name must be non-empty".to_string())
    }
}

impl From<CompetitionId> for String {
    fn from(id: CompetitionId) -> Self {
        id.0
    }
}

/// Unique identifier for a match within one competition
///
/// Sequential and 1-based: the store assigns `last + 1` on creation, which
/// keeps ids stable across file rewrites and readable in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u64);

impl MatchId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one in the sequence
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
