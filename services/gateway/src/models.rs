use serde::{Deserialize, Serialize};
use types::standings::StandingRow;

/// The `?competicao=` query parameter, optional at parse time so its
/// absence can surface as a 400 instead of an extractor rejection
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionQuery {
    pub competicao: Option<String>,
}

/// One standings line as served to the front-end: the engine's row plus
/// the resolved crest URL
#[derive(Debug, Clone, Serialize)]
pub struct StandingsEntry {
    #[serde(flatten)]
    pub row: StandingRow,
    pub escudo: String,
}
