use crate::error::AppError;
use crate::models::{DisplayMatchResultQuery, UpdateMatchResultQuery};
use crate::state::AppState;
use axum::extract::{Query, State};
use types::ids::MatchId;

pub async fn update_match_result(
    State(state): State<AppState>,
    Query(query): Query<UpdateMatchResultQuery>,
) -> Result<String, AppError> {
    let result = state
        .matches
        .update_match_result(MatchId::new(query.match_id), query.match_event)?;
    Ok(result)
}

pub async fn display_match_result(
    State(state): State<AppState>,
    Query(query): Query<DisplayMatchResultQuery>,
) -> String {
    state
        .matches
        .display_match_result(MatchId::new(query.match_id))
}
