use crate::error::AppError;
use crate::handlers::require_competition;
use crate::models::CompetitionQuery;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use types::fixture::{Match, MatchUpdate, NewMatch};
use types::ids::MatchId;

pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<CompetitionQuery>,
) -> Result<Json<Vec<Match>>, AppError> {
    let competition = require_competition(&query)?;
    let matches = state.store.list(&competition)?;
    Ok(Json(matches))
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(payload): Json<NewMatch>,
) -> Result<(StatusCode, Json<Match>), AppError> {
    validate_new_match(&payload)?;
    let stored = state.store.create(payload)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<CompetitionQuery>,
    Json(payload): Json<MatchUpdate>,
) -> Result<Json<Match>, AppError> {
    let competition = require_competition(&query)?;
    let updated = state
        .store
        .update(&competition, MatchId::new(id), &payload)?;
    Ok(Json(updated))
}

/// Field-level validation of the create payload
fn validate_new_match(payload: &NewMatch) -> Result<(), AppError> {
    let required = [
        ("data", &payload.date),
        ("hora", &payload.kickoff),
        ("local", &payload.venue),
        ("time_casa", &payload.home_team),
        ("time_fora", &payload.away_team),
        ("etapa", &payload.stage),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "Campo obrigatório ausente: {field}"
            )));
        }
    }
    if payload.home_team == payload.away_team {
        return Err(AppError::BadRequest(
            "time_casa e time_fora devem ser diferentes".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::CompetitionId;

    fn payload(home: &str, away: &str) -> NewMatch {
        serde_json::from_value(serde_json::json!({
            "data": "2025-04-12",
            "hora": "16:00",
            "local": "Maracanã",
            "time_casa": home,
            "time_fora": away,
            "concluido": false,
            "competicao": "brasileirao",
            "etapa": "fase de grupos"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_payload_accepted() {
        assert!(validate_new_match(&payload("Flamengo", "Vasco")).is_ok());
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut p = payload("Flamengo", "Vasco");
        p.venue = "  ".to_string();
        let err = validate_new_match(&p).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("local")),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_same_teams_rejected() {
        assert!(validate_new_match(&payload("Flamengo", "Flamengo")).is_err());
    }

    #[test]
    fn test_payload_competition_canonical() {
        assert_eq!(
            payload("Flamengo", "Vasco").competition,
            CompetitionId::new("brasileirao")
        );
    }
}
