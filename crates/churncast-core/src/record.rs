//! Customer record: the single-row input consumed by the predictor

use serde::{Deserialize, Serialize};

/// A single customer described by the 18 form fields.
///
/// All fields are required; deserializing a document with a missing field
/// fails. Records are constructed per submission, consumed by the
/// predictor and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Age in years
    pub age: f64,

    /// Tenure in months
    pub tenure: f64,

    /// Usage frequency per month
    pub usage_frequency: f64,

    /// Number of support calls
    pub support_calls: f64,

    /// Payment delay in days
    pub payment_delay: f64,

    /// Total spend in dollars
    pub total_spend: f64,

    /// Days since last interaction
    pub last_interaction: f64,

    /// Customer lifetime value
    pub lifetime_value: f64,

    /// Monthly spend in dollars
    pub monthly_spend: f64,

    /// Usage intensity (0-1)
    pub usage_intensity: f64,

    /// Support call rate (0-1)
    pub support_call_rate: f64,

    /// Last interaction ratio (0-1)
    pub interaction_ratio: f64,

    /// Payment delay / tenure ratio
    pub delay_ratio: f64,

    /// Gender
    pub gender: String,

    /// Subscription tier
    pub subscription_type: String,

    /// Contract length
    pub contract_length: String,

    /// Age bucket
    pub age_group: String,

    /// Tenure bucket
    pub tenure_group: String,
}

impl CustomerRecord {
    /// Look up a numeric field by column name
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "age" => Some(self.age),
            "tenure" => Some(self.tenure),
            "usage_frequency" => Some(self.usage_frequency),
            "support_calls" => Some(self.support_calls),
            "payment_delay" => Some(self.payment_delay),
            "total_spend" => Some(self.total_spend),
            "last_interaction" => Some(self.last_interaction),
            "lifetime_value" => Some(self.lifetime_value),
            "monthly_spend" => Some(self.monthly_spend),
            "usage_intensity" => Some(self.usage_intensity),
            "support_call_rate" => Some(self.support_call_rate),
            "interaction_ratio" => Some(self.interaction_ratio),
            "delay_ratio" => Some(self.delay_ratio),
            _ => None,
        }
    }

    /// Look up a categorical field by column name
    pub fn categorical(&self, column: &str) -> Option<&str> {
        match column {
            "gender" => Some(&self.gender),
            "subscription_type" => Some(&self.subscription_type),
            "contract_length" => Some(&self.contract_length),
            "age_group" => Some(&self.age_group),
            "tenure_group" => Some(&self.tenure_group),
            _ => None,
        }
    }
}
