pub mod matches;
pub mod standings;

use crate::error::AppError;
use crate::models::CompetitionQuery;
use types::ids::CompetitionId;

/// Resolve the `?competicao=` parameter, rejecting absent or blank values
pub fn require_competition(query: &CompetitionQuery) -> Result<CompetitionId, AppError> {
    query
        .competicao
        .as_deref()
        .and_then(CompetitionId::try_new)
        .ok_or_else(|| {
            AppError::BadRequest(
                "Informe a competição como parâmetro: ?competicao=brasileirao".into(),
            )
        })
}
