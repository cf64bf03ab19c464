use crate::handlers::match_result;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let match_routes = Router::new()
        .route("/UpdateMatchResult", post(match_result::update_match_result))
        .route("/DisplayMatchResult", get(match_result::display_match_result));

    Router::new()
        .nest("/Match", match_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
