use crate::handlers::{matches, standings};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/jogos",
            get(matches::list_matches).post(matches::create_match),
        )
        .route("/jogos/{id}", patch(matches::update_match))
        .route("/classificacao", get(standings::get_standings))
        // Crest images and the static front-end, served as the original
        // express app did
        .nest_service("/escudos", ServeDir::new("public/escudos"))
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
