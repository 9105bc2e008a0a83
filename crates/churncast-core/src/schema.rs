//! Form schema: field definitions, UI ranges and server-side validation
//!
//! The schema is the single source of truth for the 18 input fields. The
//! web layer serves it as JSON so the form and the server agree on
//! ranges, option sets and defaults.

use crate::error::{Error, Result};
use crate::record::CustomerRecord;
use serde::Serialize;

/// Kind of a form field, with its UI constraints
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Numeric input with an inclusive range
    Numeric {
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    },

    /// Select input with a fixed option set
    Categorical {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// A single form field
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Column name, matching `CustomerRecord` field names
    pub name: &'static str,

    /// Human-readable label shown on the form
    pub label: &'static str,

    #[serde(flatten)]
    pub kind: FieldKind,
}

const fn numeric(
    name: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
    step: f64,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Numeric {
            min,
            max,
            default,
            step,
        },
    }
}

const fn categorical(
    name: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    default: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Categorical { options, default },
    }
}

/// All 18 form fields, in display order
pub const FIELDS: &[FieldSpec] = &[
    numeric("age", "Age", 18.0, 100.0, 30.0, 1.0),
    numeric("tenure", "Tenure (months)", 0.0, 120.0, 24.0, 1.0),
    numeric("usage_frequency", "Usage Frequency (per month)", 0.0, 100.0, 12.0, 1.0),
    numeric("support_calls", "Support Calls", 0.0, 50.0, 2.0, 1.0),
    numeric("payment_delay", "Payment Delay (days)", 0.0, 30.0, 5.0, 1.0),
    numeric("total_spend", "Total Spend ($)", 0.0, 10000.0, 1000.0, 0.01),
    numeric("last_interaction", "Days Since Last Interaction", 0.0, 365.0, 30.0, 1.0),
    numeric("lifetime_value", "Customer Lifetime Value (CLV)", 0.0, 50000.0, 5000.0, 0.01),
    numeric("monthly_spend", "Monthly Spend ($)", 0.0, 5000.0, 50.0, 0.01),
    numeric("usage_intensity", "Usage Intensity", 0.0, 1.0, 0.5, 0.01),
    numeric("support_call_rate", "Support Call Rate", 0.0, 1.0, 0.1, 0.01),
    numeric("interaction_ratio", "Last Interaction Ratio", 0.0, 1.0, 0.2, 0.01),
    numeric("delay_ratio", "Payment Delay/Tenure Ratio", 0.0, 2.0, 0.2, 0.01),
    categorical("gender", "Gender", &["Male", "Female"], "Male"),
    categorical(
        "subscription_type",
        "Subscription Type",
        &["Basic", "Standard", "Premium"],
        "Basic",
    ),
    categorical(
        "contract_length",
        "Contract Length",
        &["Monthly", "Quarterly", "Annual"],
        "Monthly",
    ),
    categorical(
        "age_group",
        "Age Group",
        &["Under 25", "25-35", "36-50", "51-65", "65+"],
        "25-35",
    ),
    categorical(
        "tenure_group",
        "Tenure Group",
        &["< 1 Year", "1-2 Years", "2-3 Years", "3+ Years"],
        "< 1 Year",
    ),
];

/// The form schema served to clients and used for validation
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    /// Get the schema for the 18 customer fields
    pub fn new() -> Self {
        Self { fields: FIELDS }
    }

    /// Validate a record against the declared ranges and option sets.
    ///
    /// Ranges are inclusive on both ends, so boundary values are valid.
    pub fn validate(&self, record: &CustomerRecord) -> Result<()> {
        for field in self.fields {
            match &field.kind {
                FieldKind::Numeric { min, max, .. } => {
                    let value = record
                        .numeric(field.name)
                        .ok_or_else(|| Error::internal(format!("schema field {} missing from record", field.name)))?;
                    if !value.is_finite() {
                        return Err(Error::validation(format!(
                            "{} must be a finite number, got {}",
                            field.name, value
                        )));
                    }
                    if value < *min || value > *max {
                        return Err(Error::validation(format!(
                            "{} must be between {} and {}, got {}",
                            field.name, min, max, value
                        )));
                    }
                }
                FieldKind::Categorical { options, .. } => {
                    let value = record
                        .categorical(field.name)
                        .ok_or_else(|| Error::internal(format!("schema field {} missing from record", field.name)))?;
                    if !options.contains(&value) {
                        return Err(Error::validation(format!(
                            "{} must be one of {:?}, got {:?}",
                            field.name, options, value
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Build a record with every field at its form default
    pub fn default_record() -> CustomerRecord {
        CustomerRecord {
            age: 30.0,
            tenure: 24.0,
            usage_frequency: 12.0,
            support_calls: 2.0,
            payment_delay: 5.0,
            total_spend: 1000.0,
            last_interaction: 30.0,
            lifetime_value: 5000.0,
            monthly_spend: 50.0,
            usage_intensity: 0.5,
            support_call_rate: 0.1,
            interaction_ratio: 0.2,
            delay_ratio: 0.2,
            gender: "Male".to_string(),
            subscription_type: "Basic".to_string(),
            contract_length: "Monthly".to_string(),
            age_group: "25-35".to_string(),
            tenure_group: "< 1 Year".to_string(),
        }
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::new()
    }
}
