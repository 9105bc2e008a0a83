//! Aggregate prediction statistics

use crate::models::StatsSnapshot;
use churncast_inference::{ChurnLabel, Prediction};
use parking_lot::RwLock;

/// Collects running totals over served predictions
pub struct PredictionStats {
    inner: RwLock<StatsInner>,
}

#[derive(Default)]
struct StatsInner {
    total: u64,
    churn_count: u64,
    retain_count: u64,
    probability_sum: f64,
    latency_sum_us: u64,
}

impl PredictionStats {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StatsInner::default()),
        }
    }

    /// Record a served prediction
    pub fn record(&self, prediction: &Prediction) {
        let mut inner = self.inner.write();
        inner.total += 1;
        match prediction.label {
            ChurnLabel::Churn => inner.churn_count += 1,
            ChurnLabel::Retain => inner.retain_count += 1,
        }
        inner.probability_sum += prediction.probability;
        inner.latency_sum_us += prediction.latency_us;
    }

    /// Get the current aggregate snapshot
    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.inner.read();
        let total = inner.total as f64;

        let churn_rate = if total > 0.0 {
            inner.churn_count as f64 / total
        } else {
            0.0
        };
        let avg_probability = if total > 0.0 {
            inner.probability_sum / total
        } else {
            0.0
        };
        let avg_latency_us = if total > 0.0 {
            inner.latency_sum_us as f64 / total
        } else {
            0.0
        };

        StatsSnapshot {
            total: inner.total,
            churn_count: inner.churn_count,
            retain_count: inner.retain_count,
            churn_rate,
            avg_probability,
            avg_latency_us,
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        *self.inner.write() = StatsInner::default();
    }
}

impl Default for PredictionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(label: ChurnLabel, probability: f64) -> Prediction {
        Prediction {
            label,
            probability,
            margin: 0.0,
            latency_us: 100,
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = PredictionStats::new();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.churn_rate, 0.0);
        assert_eq!(snapshot.avg_probability, 0.0);
    }

    #[test]
    fn test_record_and_snapshot() {
        let stats = PredictionStats::new();
        stats.record(&prediction(ChurnLabel::Churn, 0.8));
        stats.record(&prediction(ChurnLabel::Retain, 0.2));
        stats.record(&prediction(ChurnLabel::Churn, 0.6));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.churn_count, 2);
        assert_eq!(snapshot.retain_count, 1);
        assert!((snapshot.churn_rate - 2.0 / 3.0).abs() < 1e-12);
        assert!((snapshot.avg_probability - (0.8 + 0.2 + 0.6) / 3.0).abs() < 1e-12);
        assert!((snapshot.avg_latency_us - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let stats = PredictionStats::new();
        stats.record(&prediction(ChurnLabel::Churn, 0.9));
        stats.reset();
        assert_eq!(stats.snapshot().total, 0);
    }
}
