use crate::models::{outcome_message, PredictResponse, PredictionRecord};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use churncast_core::{CustomerRecord, Error, FormSchema};
use serde::Deserialize;

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Schema endpoint
// ============================================================================

/// Field definitions, UI ranges, option sets and defaults for the form
pub async fn get_schema() -> impl IntoResponse {
    Json(FormSchema::new())
}

// ============================================================================
// Prediction endpoint
// ============================================================================

pub async fn predict(
    State(state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> impl IntoResponse {
    let schema = FormSchema::new();
    if let Err(err) = schema.validate(&record) {
        return error_response(err);
    }

    let prediction = match state.predictor.predict(&record) {
        Ok(prediction) => prediction,
        Err(err) => return error_response(err),
    };

    let id = uuid::Uuid::new_v4().to_string();
    state.stats.record(&prediction);
    state.add_prediction_record(PredictionRecord {
        id: id.clone(),
        timestamp: chrono::Utc::now(),
        record,
        label: prediction.label,
        probability: prediction.probability,
        latency_us: prediction.latency_us,
    });

    tracing::info!(
        %id,
        label = %prediction.label,
        probability = prediction.probability,
        "prediction served"
    );

    let response = PredictResponse {
        id,
        label: prediction.label,
        probability: prediction.probability,
        message: outcome_message(prediction.label, prediction.probability),
    };
    (StatusCode::OK, Json(serde_json::to_value(response).unwrap_or_default()))
}

fn error_response(err: Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = if err.is_client_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        tracing::error!(error = %err, "prediction failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

// ============================================================================
// Prediction history endpoints
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PredictionsQuery {
    pub limit: Option<usize>,
    pub label: Option<String>,
}

pub async fn list_predictions(
    State(state): State<AppState>,
    Query(query): Query<PredictionsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(100);
    let records = state.recent_predictions(limit);

    let filtered: Vec<_> = records
        .into_iter()
        .filter(|r| {
            if let Some(ref label) = query.label {
                if !r.label.to_string().eq_ignore_ascii_case(label) {
                    return false;
                }
            }
            true
        })
        .collect();

    Json(filtered)
}

pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.get_prediction_record(&id) {
        Some(record) => (
            StatusCode::OK,
            Json(serde_json::to_value(record).unwrap_or_default()),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Prediction not found" })),
        ),
    }
}

// ============================================================================
// Statistics endpoints
// ============================================================================

pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.stats.snapshot())
}

pub async fn reset_stats(State(state): State<AppState>) -> impl IntoResponse {
    state.stats.reset();
    Json(serde_json::json!({ "status": "reset" }))
}
