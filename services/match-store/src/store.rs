//! File-backed match store
//!
//! Read-modify-write over one JSON array per competition. Writers are
//! serialized by a mutex and every rewrite goes through a temp file plus
//! rename, so readers never observe a half-written file.

use serde_json::Error as JsonError;
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use types::fixture::{Match, MatchUpdate, NewMatch};
use types::ids::{CompetitionId, MatchId};

use crate::catalog::Catalog;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unknown competition: {0}")]
    UnknownCompetition(CompetitionId),

    #[error("match {id} not found in {competition}")]
    MatchNotFound {
        competition: CompetitionId,
        id: MatchId,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("data file {file} is not valid JSON: {source}")]
    Corrupt { file: PathBuf, source: JsonError },
}

// ── Configuration ───────────────────────────────────────────────────

/// Configuration for the file store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the competition data files
    pub dir: PathBuf,
    /// Competition → file mapping
    pub catalog: Catalog,
}

impl StoreConfig {
    /// Config with the default season catalog
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            catalog: Catalog::default(),
        }
    }
}

// ── Store ───────────────────────────────────────────────────────────

/// File-backed store for match fixtures, one JSON file per competition
pub struct FileMatchStore {
    config: StoreConfig,
    // Serializes the read-modify-write cycle of create/update
    write_lock: Mutex<()>,
}

impl FileMatchStore {
    /// Open the store, creating the data directory if needed
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        fs::create_dir_all(&config.dir)?;
        Ok(Self {
            config,
            write_lock: Mutex::new(()),
        })
    }

    /// All matches for a competition, in stored (chronological) order
    ///
    /// A tracked competition whose file does not exist yet reads as an
    /// empty list; only names outside the catalog are an error.
    pub fn list(&self, competition: &CompetitionId) -> Result<Vec<Match>, StoreError> {
        let path = self.path_for(competition)?;
        Self::read_matches(&path)
    }

    /// Append a new match, assigning the next sequential id
    pub fn create(&self, new_match: NewMatch) -> Result<Match, StoreError> {
        let path = self.path_for(&new_match.competition)?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut matches = Self::read_matches(&path)?;
        let id = matches
            .last()
            .map(|m| m.id.next())
            .unwrap_or_else(|| MatchId::new(1));

        let stored = new_match.into_match(id);
        matches.push(stored.clone());
        self.write_matches(&path, &matches)?;

        Ok(stored)
    }

    /// Merge-update an existing match (the score-editing flow)
    pub fn update(
        &self,
        competition: &CompetitionId,
        id: MatchId,
        update: &MatchUpdate,
    ) -> Result<Match, StoreError> {
        let path = self.path_for(competition)?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut matches = Self::read_matches(&path)?;
        let target = matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::MatchNotFound {
                competition: competition.clone(),
                id,
            })?;

        update.apply(target);
        let updated = target.clone();
        self.write_matches(&path, &matches)?;

        Ok(updated)
    }

    // ── Internal Helpers ────────────────────────────────────────────

    fn path_for(&self, competition: &CompetitionId) -> Result<PathBuf, StoreError> {
        let file = self
            .config
            .catalog
            .file_for(competition)
            .ok_or_else(|| StoreError::UnknownCompetition(competition.clone()))?;
        Ok(self.config.dir.join(file))
    }

    fn read_matches(path: &Path) -> Result<Vec<Match>, StoreError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Corrupt {
            file: path.to_path_buf(),
            source,
        })
    }

    fn write_matches(&self, path: &Path, matches: &[Match]) -> Result<(), StoreError> {
        // Temp file in the same directory so the rename stays on one
        // filesystem.
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            // Pretty-printed, matching how the original data files are kept
            serde_json::to_writer_pretty(&mut file, matches).map_err(|source| {
                StoreError::Corrupt {
                    file: tmp.clone(),
                    source,
                }
            })?;
            file.flush()?;
        }
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
