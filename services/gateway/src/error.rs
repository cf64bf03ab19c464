use crate::models::ErrorBody;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use types::errors::MatchError;

/// Central error type for the gateway
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Match(#[from] MatchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Match(err) = self;
        let message = err.to_string();

        let (status, body) = match err {
            MatchError::Cancel { match_id, source } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "CANCEL_REJECTED",
                    message,
                    match_id: Some(match_id),
                    original_result: Some(source.original_result),
                    event: Some(source.event.to_string()),
                    expected: Some(source.reason.expected()),
                    found: Some(source.reason.found()),
                },
            ),
            MatchError::NotFound { match_id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "NOT_FOUND",
                    message,
                    match_id: Some(match_id),
                    original_result: None,
                    event: None,
                    expected: None,
                    found: None,
                },
            ),
            MatchError::InvalidEvent { .. } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "INVALID_EVENT",
                    message,
                    match_id: None,
                    original_result: None,
                    event: None,
                    expected: None,
                    found: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
