//! Competition catalog
//!
//! Maps competition names to their data files. The set of tracked
//! competitions is closed: a name outside the catalog is a client error,
//! not a missing file.

use std::collections::HashMap;
use types::ids::CompetitionId;

/// Mapping from competition to data file name
#[derive(Debug, Clone)]
pub struct Catalog {
    files: HashMap<CompetitionId, String>,
}

impl Catalog {
    /// The tracked 2025 competitions
    pub fn season_2025() -> Self {
        let mut catalog = Self {
            files: HashMap::new(),
        };
        catalog.insert("brasileirao", "brasileirao2025.json");
        catalog.insert("libertadores", "libertadores2025.json");
        catalog.insert("copa do brasil", "copadobrasil2025.json");
        catalog.insert("super mundial", "supermundial2025.json");
        catalog
    }

    /// Register a competition's data file
    pub fn insert(&mut self, competition: impl Into<CompetitionId>, file: impl Into<String>) {
        self.files.insert(competition.into(), file.into());
    }

    /// Data file name for a competition, if tracked
    pub fn file_for(&self, competition: &CompetitionId) -> Option<&str> {
        self.files.get(competition).map(String::as_str)
    }

    /// Whether the competition is tracked
    pub fn contains(&self, competition: &CompetitionId) -> bool {
        self.files.contains_key(competition)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::season_2025()
    }
}
