use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Request-local API failures. Store operations are infallible, so the
/// only error paths are malformed request bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid prediction data")]
    InvalidPrediction,

    #[error("Invalid vote data")]
    InvalidVote,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidPrediction | ApiError::InvalidVote => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
