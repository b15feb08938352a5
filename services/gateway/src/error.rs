use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use match_store::StoreError;
use serde_json::json;
use standings_engine::StandingsError;
use thiserror::Error;

/// Central error type for the API application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unrankable data: {0}")]
    UnrankableData(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::UnrankableData(msg) => {
                // Stored results cannot be ranked; surfacing the offending
                // match beats serving a table with holes in it.
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "UNRANKABLE_DATA")
            }
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownCompetition(_) => AppError::BadRequest(err.to_string()),
            StoreError::MatchNotFound { .. } => AppError::NotFound(err.to_string()),
            StoreError::Io(_) | StoreError::Corrupt { .. } => {
                AppError::InternalError(anyhow::Error::new(err))
            }
        }
    }
}

impl From<StandingsError> for AppError {
    fn from(err: StandingsError) -> Self {
        AppError::UnrankableData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{CompetitionId, MatchId};

    #[test]
    fn test_unknown_competition_maps_to_bad_request() {
        let err: AppError =
            StoreError::UnknownCompetition(CompetitionId::new("premier league")).into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_missing_match_maps_to_not_found() {
        let err: AppError = StoreError::MatchNotFound {
            competition: CompetitionId::new("brasileirao"),
            id: MatchId::new(9),
        }
        .into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_engine_rejection_maps_to_unrankable() {
        let err: AppError = StandingsError::MissingScore {
            id: MatchId::new(3),
        }
        .into();
        match err {
            AppError::UnrankableData(msg) => assert!(msg.contains("match 3")),
            other => panic!("Unexpected mapping: {:?}", other),
        }
    }
}
