//! The prediction request handler.
//!
//! Turns an untrusted map of form fields into a screening outcome, with a
//! strict validation contract:
//!
//! 1. every schema feature must be present (checked in schema order, first
//!    missing name wins),
//! 2. every value must parse as f64 (checked in schema order, first bad value
//!    wins),
//! 3. the vector is assembled in schema order regardless of map iteration
//!    order,
//! 4. the gateway is called exactly once, and only with a fully valid vector,
//! 5. label 1 maps to "Positive Outcome", everything else to
//!    "Negative Outcome".
//!
//! The handler keeps no state between invocations.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Classifier, FeatureVector};
use crate::schema;

/// A failed prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// A required form field was absent. Bad-request class.
    #[error("missing feature: {0}")]
    MissingFeature(String),
    /// A form field was present but not numeric. Bad-request class.
    #[error("feature `{field}` is not a number: `{value}`")]
    InvalidNumericValue { field: String, value: String },
    /// Unexpected failure during classification. Server class; the detail is
    /// for the server log, never for the client.
    #[error("internal prediction failure")]
    Internal(String),
}

/// Human-readable screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Positive,
    Negative,
}

impl Outcome {
    /// Map a prediction label to an outcome.
    ///
    /// Only label 1 is positive. Any other value, including out-of-contract
    /// ones, maps to negative; this permissive fallback is observable
    /// behavior of the original system and is kept deliberately.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Outcome::Positive
        } else {
            Outcome::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Positive => "Positive Outcome",
            Outcome::Negative => "Negative Outcome",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successful prediction: the raw label and its outcome string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub label: i64,
    pub outcome: Outcome,
}

/// Validate a form submission and assemble the feature vector in schema
/// order.
///
/// Extra fields in the map are ignored; map iteration order never matters.
pub fn assemble_vector(form: &HashMap<String, String>) -> Result<FeatureVector, PredictError> {
    // Presence pass first: a missing field is reported before any parse
    // failure, whatever their schema positions.
    for &name in &schema::FEATURE_NAMES {
        if !form.contains_key(name) {
            return Err(PredictError::MissingFeature(name.to_string()));
        }
    }

    let mut vector = [0.0; schema::FEATURE_COUNT];
    for (index, &name) in schema::FEATURE_NAMES.iter().enumerate() {
        let raw = &form[name];
        vector[index] =
            raw.trim()
                .parse::<f64>()
                .map_err(|_| PredictError::InvalidNumericValue {
                    field: name.to_string(),
                    value: raw.clone(),
                })?;
    }
    Ok(vector)
}

/// Run the full pipeline: validate, assemble, classify, map.
pub fn predict<C: Classifier + ?Sized>(
    model: &C,
    form: &HashMap<String, String>,
) -> Result<Prediction, PredictError> {
    let vector = assemble_vector(form)?;
    let label = model.classify(&vector);
    Ok(Prediction {
        label,
        outcome: Outcome::from_label(label),
    })
}
