use match_store::{FileMatchStore, StoreConfig, StoreError};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FileMatchStore>,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = FileMatchStore::open(StoreConfig::new(data_dir))?;
        Ok(Self {
            store: Arc::new(store),
        })
    }
}
