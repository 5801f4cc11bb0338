//! HTTP layer: the prediction and vote endpoints plus service status.
//!
//! Request bodies arrive as raw JSON and are validated with serde, so any
//! shape failure maps to 400 with an `{"error": ...}` body rather than
//! the framework's default rejection.

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::{InsertPrediction, InsertVote, Prediction, Vote};
use crate::state::AppState;

/// Assemble the full application router around the shared state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route(
            "/api/predictions",
            get(list_predictions).post(create_prediction),
        )
        .route("/api/votes", post(create_vote))
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Audio voting engine",
        "status": "running"
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "voting-engine"
    }))
}

async fn list_predictions(State(state): State<AppState>) -> Json<Vec<Prediction>> {
    let storage = state.storage.read().await;
    Json(storage.predictions())
}

async fn create_prediction(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Prediction>, ApiError> {
    let insert: InsertPrediction =
        serde_json::from_value(body).map_err(|_| ApiError::InvalidPrediction)?;

    let mut storage = state.storage.write().await;
    let prediction = storage.create_prediction(insert);
    info!(
        id = prediction.id,
        audio_id = %prediction.audio_id,
        label = %prediction.prediction,
        "created prediction"
    );

    Ok(Json(prediction))
}

/// Records the vote, then applies it to the referenced prediction. A vote
/// for an id that was never issued is still recorded and returned with
/// 200; only the counter update is skipped.
async fn create_vote(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Vote>, ApiError> {
    let insert: InsertVote = serde_json::from_value(body).map_err(|_| ApiError::InvalidVote)?;

    // One write lock across create + apply keeps the counter in step with
    // the recorded votes under concurrent requests.
    let mut storage = state.storage.write().await;
    let vote = storage.create_vote(insert);
    if storage.apply_vote(vote.prediction_id) {
        debug!(vote_id = vote.id, prediction_id = vote.prediction_id, "vote applied");
    } else {
        warn!(
            vote_id = vote.id,
            prediction_id = vote.prediction_id,
            "vote references a prediction that does not exist, counter unchanged"
        );
    }

    Ok(Json(vote))
}
