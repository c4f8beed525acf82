//! JSON artifact format for the screening classifier.
//!
//! The original model is an AdaBoost ensemble of decision stumps exported to
//! JSON. The artifact carries a version tag, the expected feature count, an
//! optional copy of the feature names it was trained with, and the stump
//! list:
//!
//! ```text
//! {
//!   "version": "ada-stumps/1",
//!   "n_features": 25,
//!   "feature_names": ["CONS_ALCOHOL", ...],
//!   "stumps": [
//!     { "feature": 24, "threshold": 30.0, "polarity": 1, "weight": 0.8 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Every structural problem is a distinct [`ModelLoadError`] variant, and all
//! of them are fatal at startup: a process that cannot load its artifact must
//! not serve traffic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema;

/// Artifact version this build understands.
pub const FORMAT_VERSION: &str = "ada-stumps/1";

/// One weighted decision stump of the ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactStump {
    /// Index into the feature vector.
    pub feature: u32,
    /// Split threshold; the stump votes `polarity` when the value exceeds it.
    pub threshold: f64,
    /// Vote direction, 1 or -1.
    pub polarity: i8,
    /// Ensemble weight of this stump's vote.
    pub weight: f64,
}

/// Deserialized model artifact, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub n_features: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub stumps: Vec<ArtifactStump>,
}

/// Failure to load or validate a model artifact.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("cannot read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported artifact version `{found}` (expected `{FORMAT_VERSION}`)")]
    VersionMismatch { found: String },
    #[error("artifact declares {found} features, schema has {expected}")]
    FeatureCountMismatch { found: usize, expected: usize },
    #[error(
        "artifact feature name at position {position} is `{found}`, schema has `{expected}`"
    )]
    SchemaMismatch {
        position: usize,
        found: String,
        expected: String,
    },
    #[error("artifact feature name list has {found} entries, schema has {expected}")]
    SchemaLengthMismatch { found: usize, expected: usize },
    #[error("artifact contains no stumps")]
    EmptyEnsemble,
    #[error("stump {index} references feature {feature}, out of range for {n_features} features")]
    FeatureIndexOutOfRange {
        index: usize,
        feature: u32,
        n_features: usize,
    },
    #[error("stump {index} has a non-finite threshold or weight")]
    NonFiniteParameter { index: usize },
    #[error("stump {index} has polarity {polarity}, expected 1 or -1")]
    InvalidPolarity { index: usize, polarity: i8 },
}

impl ModelArtifact {
    /// Check the artifact against the schema and its own declared shape.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.version != FORMAT_VERSION {
            return Err(ModelLoadError::VersionMismatch {
                found: self.version.clone(),
            });
        }
        if self.n_features != schema::FEATURE_COUNT {
            return Err(ModelLoadError::FeatureCountMismatch {
                found: self.n_features,
                expected: schema::FEATURE_COUNT,
            });
        }
        // Feature names are optional metadata; when present they must match
        // the schema exactly, ordering included.
        if let Some(names) = &self.feature_names {
            if names.len() != schema::FEATURE_COUNT {
                return Err(ModelLoadError::SchemaLengthMismatch {
                    found: names.len(),
                    expected: schema::FEATURE_COUNT,
                });
            }
            for (position, (found, expected)) in
                names.iter().zip(schema::FEATURE_NAMES.iter()).enumerate()
            {
                if found != expected {
                    return Err(ModelLoadError::SchemaMismatch {
                        position,
                        found: found.clone(),
                        expected: (*expected).to_string(),
                    });
                }
            }
        }
        if self.stumps.is_empty() {
            return Err(ModelLoadError::EmptyEnsemble);
        }
        for (index, stump) in self.stumps.iter().enumerate() {
            if stump.feature as usize >= self.n_features {
                return Err(ModelLoadError::FeatureIndexOutOfRange {
                    index,
                    feature: stump.feature,
                    n_features: self.n_features,
                });
            }
            if !stump.threshold.is_finite() || !stump.weight.is_finite() {
                return Err(ModelLoadError::NonFiniteParameter { index });
            }
            if stump.polarity != 1 && stump.polarity != -1 {
                return Err(ModelLoadError::InvalidPolarity {
                    index,
                    polarity: stump.polarity,
                });
            }
        }
        Ok(())
    }
}
