//! Shared application state

use crate::models::PredictionRecord;
use crate::state::PredictionStats;
use churncast_inference::ChurnPredictor;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

const MAX_PREDICTION_HISTORY: usize = 1000;

/// State shared across request handlers.
///
/// The predictor is loaded once at startup and read-only afterwards; the
/// stats collector and the history ring are the only mutable state.
#[derive(Clone)]
pub struct AppState {
    /// The loaded preprocessor + classifier
    pub predictor: Arc<ChurnPredictor>,

    /// Aggregate counters for the stats endpoint
    pub stats: Arc<PredictionStats>,

    /// Recent predictions for the inspector endpoints
    pub history: Arc<RwLock<VecDeque<PredictionRecord>>>,
}

impl AppState {
    pub fn new(predictor: ChurnPredictor) -> Self {
        Self {
            predictor: Arc::new(predictor),
            stats: Arc::new(PredictionStats::new()),
            history: Arc::new(RwLock::new(VecDeque::with_capacity(MAX_PREDICTION_HISTORY))),
        }
    }

    /// Add a prediction record to history, evicting the oldest past the cap
    pub fn add_prediction_record(&self, record: PredictionRecord) {
        let mut history = self.history.write();
        history.push_front(record);
        if history.len() > MAX_PREDICTION_HISTORY {
            history.pop_back();
        }
    }

    /// Get a prediction record by ID
    pub fn get_prediction_record(&self, id: &str) -> Option<PredictionRecord> {
        let history = self.history.read();
        history.iter().find(|r| r.id == id).cloned()
    }

    /// Get recent prediction records, newest first
    pub fn recent_predictions(&self, limit: usize) -> Vec<PredictionRecord> {
        let history = self.history.read();
        history.iter().take(limit).cloned().collect()
    }
}
