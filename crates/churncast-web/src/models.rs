//! API data types shared by the server and the CLI

use chrono::{DateTime, Utc};
use churncast_core::CustomerRecord;
use churncast_inference::ChurnLabel;
use serde::{Deserialize, Serialize};

/// Response body for `POST /api/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Identifier of the stored prediction record
    pub id: String,

    /// Thresholded decision
    pub label: ChurnLabel,

    /// Churn probability, in [0, 1]
    pub probability: f64,

    /// Human-readable outcome line shown on the form
    pub message: String,
}

/// A completed prediction kept in the in-memory history ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub record: CustomerRecord,
    pub label: ChurnLabel,
    pub probability: f64,
    pub latency_us: u64,
}

/// Aggregate counters served at `GET /api/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub churn_count: u64,
    pub retain_count: u64,
    pub churn_rate: f64,
    pub avg_probability: f64,
    pub avg_latency_us: f64,
}

/// The outcome copy rendered under the form
pub fn outcome_message(label: ChurnLabel, probability: f64) -> String {
    let percent = probability * 100.0;
    match label {
        ChurnLabel::Churn => format!(
            "Customer is likely to churn with {:.2}% probability.",
            percent
        ),
        ChurnLabel::Retain => format!(
            "Customer is unlikely to churn. Risk level: {:.2}%.",
            percent
        ),
    }
}
