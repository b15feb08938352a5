use crate::crest;
use crate::error::AppError;
use crate::handlers::require_competition;
use crate::models::{CompetitionQuery, StandingsEntry};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use standings_engine::compute_standings;

pub async fn get_standings(
    State(state): State<AppState>,
    Query(query): Query<CompetitionQuery>,
) -> Result<Json<Vec<StandingsEntry>>, AppError> {
    let competition = require_competition(&query)?;

    // The store returns matches in play order; the engine depends on that
    // for the recent-form window.
    let matches = state.store.list(&competition)?;
    let table = compute_standings(&matches)?;

    let entries = table
        .into_iter()
        .map(|row| StandingsEntry {
            escudo: crest::crest_url(&row.team),
            row,
        })
        .collect();

    Ok(Json(entries))
}
