//! Fitted preprocessing pipeline
//!
//! Mirrors the transformation applied at training time: numeric columns
//! are standardized with the fitted mean/scale, categorical columns are
//! label-encoded against the fitted class lists. The fitted parameters
//! arrive in the preprocessor artifact and are never refit here.

use churncast_core::{CustomerRecord, Error, Result};
use serde::{Deserialize, Serialize};

/// A numeric column with its fitted standardization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumn {
    /// Column name, matching a `CustomerRecord` field
    pub name: String,

    /// Fitted mean
    pub mean: f64,

    /// Fitted standard deviation
    pub scale: f64,
}

/// A categorical column with its fitted class list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalColumn {
    /// Column name, matching a `CustomerRecord` field
    pub name: String,

    /// Classes seen during fit; a value's label code is its index here
    pub classes: Vec<String>,
}

/// The fitted preprocessor loaded from the preprocessor artifact.
///
/// `transform` emits numeric columns first, then categorical codes, in
/// the fitted column order. That order defines the feature indices the
/// classifier was trained against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedPreprocessor {
    pub numeric: Vec<NumericColumn>,
    pub categorical: Vec<CategoricalColumn>,
}

impl FittedPreprocessor {
    /// Width of the emitted feature vector
    pub fn output_width(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    /// Check the fitted parameters for values that cannot be applied
    pub fn validate(&self) -> Result<()> {
        if self.output_width() == 0 {
            return Err(Error::artifact("preprocessor has no fitted columns"));
        }
        for col in &self.numeric {
            if !col.mean.is_finite() || !col.scale.is_finite() {
                return Err(Error::artifact(format!(
                    "non-finite standardization parameters for column {:?}",
                    col.name
                )));
            }
        }
        for col in &self.categorical {
            if col.classes.is_empty() {
                return Err(Error::artifact(format!(
                    "empty class list for column {:?}",
                    col.name
                )));
            }
        }
        Ok(())
    }

    /// Transform a record into the feature vector the classifier expects.
    ///
    /// A categorical value absent from the fitted class list is a hard
    /// error; there is no fallback encoding.
    pub fn transform(&self, record: &CustomerRecord) -> Result<Vec<f64>> {
        let mut features = Vec::with_capacity(self.output_width());

        for col in &self.numeric {
            let value = record.numeric(&col.name).ok_or_else(|| {
                Error::schema_mismatch(format!(
                    "fitted numeric column {:?} not present in record",
                    col.name
                ))
            })?;
            // A degenerate constant column fits with scale 0; pass it
            // through unscaled rather than dividing by zero.
            let scale = if col.scale == 0.0 { 1.0 } else { col.scale };
            features.push((value - col.mean) / scale);
        }

        for col in &self.categorical {
            let value = record.categorical(&col.name).ok_or_else(|| {
                Error::schema_mismatch(format!(
                    "fitted categorical column {:?} not present in record",
                    col.name
                ))
            })?;
            let code = col
                .classes
                .iter()
                .position(|class| class == value)
                .ok_or_else(|| Error::unknown_category(&col.name, value))?;
            features.push(code as f64);
        }

        Ok(features)
    }
}
